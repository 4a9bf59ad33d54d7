//! Headless command scripts.
//!
//! One command per line; blank lines and `#` comments are skipped:
//!
//! ```text
//! layout 1 2 1 2   # deal a fixed board
//! start
//! select 0
//! select 2
//! wait 1000
//! show             # print a JSON snapshot line
//! ```

use std::io::Write;

use anyhow::{anyhow, bail, Context, Result};
use log::{debug, info};

use crate::core::{Board, GameState};
use crate::types::GameAction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    Action(GameAction),
    /// Advance the game clock by this many milliseconds
    Wait(u32),
    /// Deal a fresh board with this grid side
    Level(u8),
    /// Install a fixed board, row-major
    Layout(Vec<u32>),
    /// Write the current snapshot
    Show,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let step = parse_line(line)
            .with_context(|| format!("line {}: `{}`", index + 1, line.trim()))?;
        steps.extend(step);
    }
    Ok(steps)
}

/// Parse a single line; `Ok(None)` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<ScriptStep>> {
    let line = match line.find('#') {
        Some(at) => &line[..at],
        None => line,
    };
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let step = match command.to_ascii_lowercase().as_str() {
        "select" => ScriptStep::Action(GameAction::SelectCard(single_arg(command, &args)?)),
        "wait" => ScriptStep::Wait(single_arg(command, &args)?),
        "level" => ScriptStep::Level(single_arg(command, &args)?),
        "layout" => {
            if args.is_empty() {
                bail!("`layout` needs at least one card value");
            }
            let values = args
                .iter()
                .map(|arg| {
                    arg.parse::<u32>()
                        .map_err(|_| anyhow!("`{arg}` is not a card value"))
                })
                .collect::<Result<Vec<_>>>()?;
            ScriptStep::Layout(values)
        }
        "show" => {
            no_args(command, &args)?;
            ScriptStep::Show
        }
        other => {
            let action = GameAction::from_str(other)
                .ok_or_else(|| anyhow!("unknown command `{command}`"))?;
            no_args(command, &args)?;
            ScriptStep::Action(action)
        }
    };
    Ok(Some(step))
}

fn single_arg<T: std::str::FromStr>(command: &str, args: &[&str]) -> Result<T> {
    match args {
        [arg] => arg
            .parse()
            .map_err(|_| anyhow!("`{arg}` is not a valid argument for `{command}`")),
        _ => bail!("`{command}` takes exactly one argument"),
    }
}

fn no_args(command: &str, args: &[&str]) -> Result<()> {
    if args.is_empty() {
        Ok(())
    } else {
        bail!("`{command}` takes no arguments")
    }
}

/// Play `steps` against `game`, writing one JSON snapshot line per `show`.
pub fn run_script<W: Write>(game: &mut GameState, steps: &[ScriptStep], out: &mut W) -> Result<()> {
    info!("running script with {} steps", steps.len());
    for step in steps {
        match step {
            ScriptStep::Action(action) => {
                if !game.apply_action(*action) {
                    debug!("script action {} ignored", action.as_str());
                }
            }
            ScriptStep::Wait(ms) => {
                game.tick(*ms);
            }
            ScriptStep::Level(level) => {
                game.set_level(*level)
                    .with_context(|| format!("cannot switch to level {level}"))?;
            }
            ScriptStep::Layout(values) => {
                let board = Board::from_values(values).context("invalid layout")?;
                game.replace_board(board);
            }
            ScriptStep::Show => {
                serde_json::to_writer(&mut *out, &game.snapshot())?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_and_comment_lines_are_skipped() {
        assert_eq!(parse_line("").unwrap(), None);
        assert_eq!(parse_line("   # just a note").unwrap(), None);
        assert_eq!(parse_line("show # trailing").unwrap(), Some(ScriptStep::Show));
    }

    #[test]
    fn parses_each_command() {
        let steps = parse_script(
            "start\nstop\nstart_stop\nreset\nselect 3\nwait 250\nlevel 6\nlayout 1 1\nshow\n",
        )
        .unwrap();
        assert_eq!(
            steps,
            vec![
                ScriptStep::Action(GameAction::StartStop),
                ScriptStep::Action(GameAction::StartStop),
                ScriptStep::Action(GameAction::StartStop),
                ScriptStep::Action(GameAction::Reset),
                ScriptStep::Action(GameAction::SelectCard(3)),
                ScriptStep::Wait(250),
                ScriptStep::Level(6),
                ScriptStep::Layout(vec![1, 1]),
                ScriptStep::Show,
            ]
        );
    }

    #[test]
    fn errors_name_the_line() {
        let err = parse_script("start\nselect\n").unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));

        let err = parse_script("jump 3").unwrap_err();
        assert!(format!("{err:#}").contains("unknown command"));

        assert!(parse_script("wait soon").is_err());
        assert!(parse_script("layout 1 x").is_err());
        assert!(parse_script("show 1").is_err());
    }

    #[test]
    fn show_writes_one_line_per_snapshot() {
        let mut game = GameState::with_board(Board::from_values(&[1, 2, 1, 2]).unwrap());
        let steps = parse_script("show\nstart\nselect 0\nshow\n").unwrap();
        let mut out = Vec::new();
        run_script(&mut game, &steps, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("\"isActive\":false"));
        assert!(lines[1].contains("\"flippedPositions\":[0]"));
    }

    #[test]
    fn bad_layout_fails_at_run_time() {
        let mut game = GameState::with_board(Board::from_values(&[1, 2, 1, 2]).unwrap());
        let steps = vec![ScriptStep::Layout(vec![1, 2, 3, 4])];
        assert!(run_script(&mut game, &steps, &mut Vec::new()).is_err());
    }
}
