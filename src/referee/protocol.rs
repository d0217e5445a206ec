//! Referee protocol implementation

use std::io::Write;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::engine::Engine;

use super::command::Command;

/// What the read loop should do after a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit(u8),
}

/// Exit status after the referee rejects one of our moves.
pub const ILLEGAL_MOVE_STATUS: u8 = 255;

/// Handle a referee message, writing any reply to `out`.
pub fn handle_command(cmd: &Command, engine: &mut Engine, out: &mut impl Write) -> Result<Flow> {
    match cmd {
        Command::Init { player, move_time } => {
            let layout = engine.init(*player, *move_time)?;
            writeln!(out, "{}", layout)?;
            out.flush()?;
        }
        Command::Go { player } => {
            if !engine.is_to_move(*player) {
                debug!(%player, "opponent to move");
                return Ok(Flow::Continue);
            }

            match engine.go() {
                Some((from, to)) => writeln!(out, "( {} {} )", from, to)?,
                None => {
                    info!("no legal move left, resigning");
                    writeln!(out, "(resign)")?;
                }
            }
            out.flush()?;
        }
        Command::Outcome { from, to, result } => {
            engine.outcome(*from, *to, *result);
        }
        Command::Flag { player, loc } => {
            engine.flag(*player, *loc);
        }
        Command::Illegal { from, to } => {
            warn!(%from, %to, "referee rejected move");
            return Ok(Flow::Exit(ILLEGAL_MOVE_STATUS));
        }
        Command::End { winner } => {
            match winner {
                Some(winner) => info!(%winner, won = engine.is_to_move(*winner), "match over"),
                None => info!("match drawn"),
            }
            return Ok(Flow::Exit(0));
        }
        Command::Unknown(keyword) => {
            debug!(%keyword, "ignoring message");
        }
    }

    Ok(Flow::Continue)
}
