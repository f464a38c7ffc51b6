//! Line-based terminal client entry point.
mod config;
mod input;
mod render;

use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use combat_content::ContentFactory;
use combat_core::{CombatCommand, CombatController, CombatPhase, CombatSession, CommandOutcome};
use config::CliConfig;
use input::{UserInput, View};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_env();
    let factory = ContentFactory::new(&config.data_dir);
    let mut setup = factory
        .load_setup(config.enemy.as_deref())
        .with_context(|| format!("loading content from {}", config.data_dir.display()))?;

    let seed = config
        .seed
        .or(setup.config.seed)
        .unwrap_or_else(clock_seed);
    setup.config.seed = Some(seed);
    tracing::info!(seed, "seeded random source");

    let mut controller = CombatController::seeded(setup).context("building combat")?;
    let mut stdout = io::stdout().lock();

    let outcome = controller.dispatch(CombatCommand::StartCombat)?;
    print_outcome(&mut stdout, &controller, &outcome)?;
    let setup = controller.setup();
    writeln!(
        stdout,
        "Facing {} with a {}-card deck. Type 'help' for commands.",
        setup.enemy.name,
        setup.player.deck.len()
    )?;

    for line in io::stdin().lock().lines() {
        let line = line.context("reading input")?;
        let input = match input::parse_line(&line) {
            Ok(Some(input)) => input,
            Ok(None) => continue,
            Err(error) => {
                writeln!(stdout, "{error}")?;
                continue;
            }
        };

        match input {
            UserInput::Quit => break,
            UserInput::Help => writeln!(stdout, "{}", input::HELP)?,
            UserInput::Show(view) => match controller.session() {
                Some(session) => write!(stdout, "{}", show(session, view))?,
                None => writeln!(stdout, "No combat in progress.")?,
            },
            UserInput::Dispatch(command) => match controller.dispatch(command) {
                Ok(outcome) => print_outcome(&mut stdout, &controller, &outcome)?,
                Err(error) => writeln!(stdout, "Rejected: {error}")?,
            },
        }
    }

    Ok(())
}

fn show(session: &CombatSession, view: View) -> String {
    match view {
        View::Hand => render::hand(&session.hand_summary()),
        View::Enemy => render::enemy(&session.enemy_status_summary()),
        View::Deck => render::deck(&session.deck_counts()),
        View::Targets => render::targets(&session.targetable_parts()),
    }
}

fn print_outcome(
    out: &mut impl Write,
    controller: &CombatController,
    outcome: &CommandOutcome,
) -> Result<()> {
    let Some(session) = controller.session() else {
        return Ok(());
    };

    for event in &outcome.events {
        if let Some(line) = render::event(session, event) {
            writeln!(out, "{line}")?;
        }
    }

    if outcome.is_terminal() {
        writeln!(out, "Combat over. Type 'start' for a rematch or 'quit'.")?;
    } else if outcome.phase == CombatPhase::PlayerTurn {
        write!(out, "{}", render::enemy(&session.enemy_status_summary()))?;
        write!(out, "{}", render::hand(&session.hand_summary()))?;
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
