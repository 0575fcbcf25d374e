//! SQLite save-slot store — the persistence collaborator.
//!
//! RULE: Only store.rs talks to the database. The engine hands over a
//! serializable snapshot and never sees SQL.

use crate::{
    error::{SimError, SimResult},
    state::GameState,
};
use rusqlite::{params, Connection, OptionalExtension};

pub struct SaveStore {
    conn: Connection,
}

/// Slot metadata as listed to the UI's load screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotInfo {
    pub slot: String,
    pub session_id: String,
    pub saved_at: String,
}

impl SaveStore {
    /// Open (or create) the save database at `path`.
    pub fn open(path: &str) -> SimResult<Self> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> SimResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Apply all schema migrations in order.
    pub fn migrate(&self) -> SimResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_save_slots.sql"))?;
        Ok(())
    }

    /// Serialize `state` into `slot`, replacing any previous save there.
    pub fn save_slot(&self, slot: &str, session_id: &str, state: &GameState) -> SimResult<()> {
        let payload = serde_json::to_string(state)?;
        let saved_at = chrono::Utc::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO save_slot (slot, session_id, payload, saved_at)
             VALUES (?1, ?2, ?3, ?4)
             ON CONFLICT(slot) DO UPDATE SET
                 session_id = excluded.session_id,
                 payload    = excluded.payload,
                 saved_at   = excluded.saved_at",
            params![slot, session_id, payload, saved_at],
        )?;
        Ok(())
    }

    /// Read a snapshot back, or `None` when the slot has never been
    /// written.
    pub fn load_slot(&self, slot: &str) -> SimResult<Option<GameState>> {
        let payload: Option<String> = self
            .conn
            .query_row(
                "SELECT payload FROM save_slot WHERE slot = ?1",
                params![slot],
                |row| row.get(0),
            )
            .optional()?;
        match payload {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Like [`load_slot`], but a missing slot is an error. Used by the
    /// runner's `--load` path.
    ///
    /// [`load_slot`]: SaveStore::load_slot
    pub fn load_slot_required(&self, slot: &str) -> SimResult<GameState> {
        self.load_slot(slot)?.ok_or_else(|| SimError::SlotNotFound {
            slot: slot.to_string(),
        })
    }

    /// All slots, newest save first.
    pub fn list_slots(&self) -> SimResult<Vec<SlotInfo>> {
        let mut stmt = self.conn.prepare(
            "SELECT slot, session_id, saved_at FROM save_slot
             ORDER BY saved_at DESC",
        )?;
        let slots = stmt
            .query_map([], |row| {
                Ok(SlotInfo {
                    slot: row.get(0)?,
                    session_id: row.get(1)?,
                    saved_at: row.get(2)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(slots)
    }
}
