//! sim-runner: headless runner for the Dream Story engine.
//!
//! Usage:
//!   sim-runner --ticks 96                     fast-forward one in-game day
//!   sim-runner --realtime --ticks 96          paced run (1000/speed ms per tick)
//!   sim-runner --ipc-mode --db saves.db       stdin/stdout JSON command loop
//!   sim-runner --db saves.db --load slot1     resume from a save slot

use anyhow::Result;
use dreamstory_core::{
    action::Verb,
    clock::GameSpeed,
    engine::SimEngine,
    state::GameState,
    store::SaveStore,
};
use std::env;
use std::io::{self, BufRead, Write};
use std::time::Instant;

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcCommand {
    GetState,
    Tick { count: u64 },
    Action { verb: String, target: String },
    TogglePlay,
    SetSpeed { speed: GameSpeed },
    NextRoom,
    PreviousRoom,
    Reset,
    Save { slot: String },
    Quit,
}

/// The flattened view the UI process renders from.
#[derive(serde::Serialize)]
struct UiState<'a> {
    day: u32,
    day_of_week: &'static str,
    clock: String,
    playing: bool,
    speed: GameSpeed,
    room: &'static str,
    mood: dreamstory_core::state::Mood,
    activity: dreamstory_core::state::Activity,
    energy: f64,
    social: f64,
    health: f64,
    productivity: f64,
    total_score: u64,
    achievements: &'a [String],
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ticks = parse_arg(&args, "--ticks", 96u64);
    let realtime = args.iter().any(|a| a == "--realtime");
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str());
    let load_slot = args
        .windows(2)
        .find(|w| w[0] == "--load")
        .map(|w| w[1].as_str());
    let save_slot = args
        .windows(2)
        .find(|w| w[0] == "--slot")
        .map(|w| w[1].as_str());

    let store = match db {
        Some(path) => SaveStore::open(path)?,
        None => SaveStore::in_memory()?,
    };
    store.migrate()?;

    let mut engine = match load_slot {
        Some(slot) => SimEngine::from_state(store.load_slot_required(slot)?),
        None => SimEngine::new(),
    };

    if ipc_mode {
        run_ipc_loop(&mut engine, &store)?;
        return Ok(());
    }

    println!("Dream Story — sim-runner");
    println!("  session:  {}", engine.session_id);
    println!("  ticks:    {ticks}");
    println!("  realtime: {realtime}");
    println!();

    if realtime {
        run_realtime(&mut engine, ticks);
    } else {
        engine.run_ticks(ticks);
    }

    if let Some(slot) = save_slot {
        engine.save(&store, slot)?;
        println!("saved to slot '{slot}'");
    }

    print_summary(&engine);
    Ok(())
}

/// Paced loop: one tick per cadence interval. The deadline is recomputed
/// from scratch after every tick, so a speed change takes effect on the
/// next tick with no partial-tick carry-over.
fn run_realtime(engine: &mut SimEngine, ticks: u64) {
    if !engine.state().clock.playing {
        engine.toggle_play_pause();
    }
    for _ in 0..ticks {
        let interval = engine.state().clock.tick_interval();
        std::thread::sleep(interval);
        engine.tick();
        let _ = engine.expire_activity(Instant::now());
    }
    if engine.state().clock.playing {
        engine.toggle_play_pause();
    }
}

fn run_ipc_loop(engine: &mut SimEngine, store: &SaveStore) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut handle = stdin.lock();
    let mut buffer = String::new();

    loop {
        // Anything due from the previous command's activity window.
        let _ = engine.expire_activity(Instant::now());

        buffer.clear();
        let bytes_read = handle.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }

        let cmd: IpcCommand = match serde_json::from_str(&buffer) {
            Ok(c) => c,
            Err(e) => {
                let err_json = serde_json::json!({ "error": e.to_string() });
                writeln!(stdout, "{}", err_json)?;
                stdout.flush()?;
                continue;
            }
        };

        match cmd {
            IpcCommand::Quit => break,
            IpcCommand::GetState => {}
            IpcCommand::Tick { count } => {
                engine.run_ticks(count);
            }
            IpcCommand::Action { verb, target } => match verb.parse::<Verb>() {
                Ok(verb) => {
                    engine.perform_action(verb, &target, Instant::now());
                }
                Err(e) => log::warn!("ignoring action: {e}"),
            },
            IpcCommand::TogglePlay => {
                engine.toggle_play_pause();
            }
            IpcCommand::SetSpeed { speed } => {
                engine.set_speed(speed);
            }
            IpcCommand::NextRoom => {
                engine.next_room();
            }
            IpcCommand::PreviousRoom => {
                engine.previous_room();
            }
            IpcCommand::Reset => {
                engine.reset();
            }
            IpcCommand::Save { slot } => {
                engine.save(store, &slot)?;
            }
        }

        let state = build_ui_state(engine.state());
        writeln!(stdout, "{}", serde_json::to_string(&state)?)?;
        stdout.flush()?;
    }
    Ok(())
}

fn build_ui_state(state: &GameState) -> UiState<'_> {
    UiState {
        day: state.clock.day,
        day_of_week: state.clock.day_of_week(),
        clock: state.clock.formatted(),
        playing: state.clock.playing,
        speed: state.clock.speed,
        room: state.current_room.label(),
        mood: state.character.mood,
        activity: state.character.activity,
        energy: state.meters.energy,
        social: state.meters.social,
        health: state.meters.health,
        productivity: state.meters.productivity,
        total_score: state.total_score,
        achievements: &state.achievements,
    }
}

fn print_summary(engine: &SimEngine) {
    let state = engine.state();
    println!("=== RUN SUMMARY ===");
    println!("  ticks run:    {}", engine.ticks_run());
    println!(
        "  game time:    day {} ({}), {}",
        state.clock.day,
        state.clock.day_of_week(),
        state.clock.formatted()
    );
    println!("  room:         {}", state.current_room.label());
    println!("  energy:       {:.1}", state.meters.energy);
    println!("  social:       {:.1}", state.meters.social);
    println!("  health:       {:.1}", state.meters.health);
    println!("  productivity: {:.1}", state.meters.productivity);
    println!("  score:        {}", state.total_score);
    if state.achievements.is_empty() {
        println!("  achievements: (none)");
    } else {
        println!("  achievements: {}", state.achievements.join(", "));
    }
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
