//! Headless Build & Match runner (default binary).
//!
//! Plays a few moves from a seed by taking the first available swap, and
//! prints every cascade step. Rendering is left to whoever consumes the
//! `--json` output or the journal.

use anyhow::{anyhow, Result};

use build_match::cli::{parse_args, CliArgs, USAGE};
use build_match::core::{find_valid_swap, CascadePhase, CascadeStep};
use build_match::engine::{Selection, Session};
use build_match::observe::{observe_session, observe_step, to_json_line, Journal, Observation};
use build_match::types::GameConfig;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = parse_args(&args)?;
    if cli.help {
        println!("{}", USAGE);
        return Ok(());
    }
    run(&cli)
}

fn run(cli: &CliArgs) -> Result<()> {
    let config = GameConfig::from_env();
    config.validate().map_err(|e| anyhow!("config: {}", e))?;

    let mut session = Session::new(config, cli.seed)?;
    let mut journal = match cli.log_path_or_env() {
        Some(path) => {
            eprintln!("[build-match] journal -> {}", path);
            Some(Journal::open(&path)?)
        }
        None => None,
    };

    eprintln!(
        "[build-match] seed {} board {}x{} ({} kinds)",
        session.seed(),
        session.board().rows(),
        session.board().cols(),
        session.config().kinds.len()
    );
    emit(cli, &mut journal, &observe_session(&session), || {
        session.board().to_string()
    })?;

    for _ in 0..cli.moves {
        let min_match = session.config().min_match;
        let Some((a, b)) = find_valid_swap(session.board(), min_match) else {
            eprintln!("[build-match] no valid move left");
            break;
        };

        session.select(a)?;
        match session.select(b)? {
            Selection::Swapped { from, to } => {
                eprintln!(
                    "[build-match] move {}: ({}, {}) <-> ({}, {})",
                    session.moves(),
                    from.row,
                    from.col,
                    to.row,
                    to.col
                );
            }
            other => {
                return Err(anyhow!("hinted swap {:?} <-> {:?} gave {}", a, b, other.code()));
            }
        }

        while let Some(step) = session.step()? {
            emit(cli, &mut journal, &observe_step(&session, &step), || {
                describe(&step)
            })?;
        }
    }

    if let Some(j) = &journal {
        eprintln!("[build-match] journal lines: {}", j.lines());
    }
    println!("final score: {} after {} moves", session.score(), session.moves());
    Ok(())
}

fn emit(
    cli: &CliArgs,
    journal: &mut Option<Journal>,
    obs: &Observation,
    text: impl FnOnce() -> String,
) -> Result<()> {
    if let Some(j) = journal.as_mut() {
        j.record(obs)?;
    }
    if cli.json {
        println!("{}", to_json_line(obs)?);
    } else {
        println!("{}\n", text());
    }
    Ok(())
}

fn describe(step: &CascadeStep) -> String {
    let header = match step.phase {
        CascadePhase::Removed => format!(
            "cycle {}: removed {} (+{})",
            step.cycle,
            step.removed.len(),
            step.score_delta
        ),
        CascadePhase::Stable => format!("cycle {}: stable", step.cycle),
        phase => format!("cycle {}: {}", step.cycle, phase.as_str()),
    };
    format!("{}\n{}", header, step.board)
}
