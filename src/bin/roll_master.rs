//! Terminal host for the dice game.
//!
//! Reads one command per line and renders the state after each action.
//! The computer's two reroll opportunities are played out with a pause
//! between them before the round is scored.

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use clap::Parser;
use roll_master::{
    Action, DiceSource, GameConfig, GameRng, GameState, RoundEngine, Side, Winner,
};
use tracing_subscriber::EnvFilter;

/// CLI flags
#[derive(Parser, Debug)]
#[command(name = "roll-master", about = "Five-dice race against the computer")]
struct Args {
    /// Target score (non-numeric or non-positive values fall back to 101)
    #[arg(long, default_value = "101")]
    target: String,

    /// Seed for reproducible games (OS entropy if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Pause between computer reroll steps, in milliseconds
    #[arg(long, default_value_t = 1000)]
    delay_ms: u64,
}

const HELP: &str = "commands: roll | toggle <1-5> | reroll | score | new | target <n> | help | quit";

fn render(state: &GameState) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Attempt {}  |  target {}  |  wins H:{} C:{}\n",
        state.attempt_count, state.target_score, state.human_wins, state.computer_wins
    ));
    for side in Side::ALL {
        let player = state.player(side);
        out.push_str(&format!(
            "{:<9} {}   roll {:>2}   total {:>3}\n",
            side.to_string(),
            player.dice,
            player.current_sum(),
            player.total_score
        ));
    }
    if state.is_tie_breaker {
        out.push_str("Tie-breaker! Roll again; highest single roll wins.\n");
    } else if state.can_reroll() {
        out.push_str(&format!("Rerolls left: {}\n", state.human.rerolls_left()));
    } else if !state.game_ended {
        match state.leader() {
            Some(side) => out.push_str(&format!("{side} leads.\n")),
            None => out.push_str("Scores level.\n"),
        }
    }
    match state.winner {
        Winner::Human => out.push_str(&format!(
            "You win! {} points in {} attempts.\n",
            state.human.total_score,
            state.attempt_count - 1
        )),
        Winner::Computer => out.push_str(&format!(
            "You lose. The computer reached {} points in {} attempts.\n",
            state.computer.total_score,
            state.attempt_count - 1
        )),
        Winner::None => {}
    }
    out
}

fn play_computer_and_score<R: DiceSource>(
    engine: &mut RoundEngine<R>,
    state: &GameState,
    delay: Duration,
) -> GameState {
    let mut state = state.clone();
    while state.can_computer_reroll() {
        thread::sleep(delay);
        let before = state.computer.dice;
        state = engine.computer_reroll(&state);
        if state.computer.dice != before {
            println!("Computer rerolls: {}", state.computer.dice);
        } else {
            println!("Computer keeps its dice.");
        }
    }
    engine.score(&state)
}

fn parse_command(line: &str) -> Option<Command> {
    let mut parts = line.split_whitespace();
    let command = match parts.next()? {
        "roll" | "throw" => Command::Play(Action::Roll),
        "reroll" => Command::Play(Action::Reroll),
        "score" => Command::Score,
        "toggle" | "t" => {
            let position: usize = parts.next()?.parse().ok()?;
            Command::Play(Action::Toggle(position.checked_sub(1)?))
        }
        "new" => Command::NewGame,
        "target" => Command::Target(parts.next().unwrap_or_default().to_string()),
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => return None,
    };
    Some(command)
}

enum Command {
    Play(Action),
    Score,
    NewGame,
    Target(String),
    Help,
    Quit,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = GameConfig::default().with_target_score(GameConfig::parse_target(&args.target));
    let rng = args.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    tracing::info!(seed = rng.seed(), target = config.target_score, "starting session");

    let mut engine = RoundEngine::new(rng);
    let mut state = engine.start_with_config(&config, None)?;
    let delay = Duration::from_millis(args.delay_ms);

    println!("{HELP}");
    print!("{}", render(&state));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    for line in stdin.lock().lines() {
        let line = line?;
        let Some(command) = parse_command(line.trim()) else {
            println!("{HELP}");
            continue;
        };

        state = match command {
            Command::Play(action) => match engine.apply(&state, action) {
                Ok(next) => next,
                Err(err) => {
                    println!("{err}");
                    continue;
                }
            },
            Command::Score => play_computer_and_score(&mut engine, &state, delay),
            Command::NewGame => engine.new_game(&state),
            Command::Target(input) => {
                let target = GameConfig::parse_target(&input);
                engine.start_round(i64::from(target), Some(&state))?
            }
            Command::Help => {
                println!("{HELP}");
                continue;
            }
            Command::Quit => break,
        };

        print!("{}", render(&state));
        stdout.flush()?;
    }

    Ok(())
}
