//! Referee message parsing
//!
//! Messages are parenthesised and whitespace-insensitive, one per line:
//! `(init 1 time/move 2/3)`, `(go 1)`, `(outcome > (A6 A7))`, `(flag 2 B12)`,
//! `(illegal (A6 A7))` and `(end 0)`.

use std::{str::FromStr, time::Duration};

use anyhow::{bail, ensure, Context, Result};

use crate::core::{Loc, MoveResult, PlayerNumber};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Init { player: PlayerNumber, move_time: Duration },
    Go { player: PlayerNumber },
    Outcome { from: Loc, to: Loc, result: MoveResult },
    Flag { player: PlayerNumber, loc: Loc },
    Illegal { from: Loc, to: Loc },
    /// `None` when the match was drawn
    End { winner: Option<PlayerNumber> },
    /// A well-formed message with a keyword this agent does not handle
    Unknown(String),
}

/// Parse one line from the referee. Blank lines yield `None`.
pub fn parse_command(input: &str) -> Result<Option<Command>> {
    if input.trim().is_empty() {
        return Ok(None);
    }
    input.parse().map(Some)
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens = tokenize(s);
        let mut parts = Tokens::new(&tokens);

        parts.expect("(")?;
        let keyword = parts.next().context("missing message keyword")?;

        let command = match keyword {
            "init" => {
                let player = parts.next_parsed("player")?;
                parts.expect("time/move")?;
                let seconds = parts.take_until(")").concat();
                Command::Init { player, move_time: parse_seconds(&seconds)? }
            }
            "go" => Command::Go { player: parts.next_parsed("player")? },
            "outcome" => {
                let result = match parts.peek() {
                    Some(symbol @ (">" | "<" | "=")) => {
                        parts.next();
                        symbol.parse()?
                    }
                    _ => MoveResult::None,
                };
                let (from, to) = parts.next_move()?;
                Command::Outcome { from, to, result }
            }
            "flag" => Command::Flag {
                player: parts.next_parsed("player")?,
                loc: parts.next_parsed("position")?,
            },
            "illegal" => {
                let (from, to) = parts.next_move()?;
                Command::Illegal { from, to }
            }
            "end" => {
                let winner = match parts.next().context("missing winner")? {
                    "0" => None,
                    player => Some(player.parse()?),
                };
                Command::End { winner }
            }
            other => return Ok(Command::Unknown(other.to_string())),
        };

        parts.expect(")")?;
        ensure!(parts.peek().is_none(), "trailing input after message: {}", s.trim());
        Ok(command)
    }
}

/// Split around brackets and comparison symbols, which need not be
/// separated from their neighbours by whitespace.
fn tokenize(s: &str) -> Vec<String> {
    let mut padded = String::with_capacity(s.len() * 2);
    for c in s.chars() {
        if matches!(c, '(' | ')' | '<' | '>' | '=') {
            padded.push(' ');
            padded.push(c);
            padded.push(' ');
        } else {
            padded.push(c);
        }
    }
    padded.split_whitespace().map(str::to_string).collect()
}

struct Tokens<'a> {
    tokens: &'a [String],
    pos: usize,
}

impl<'a> Tokens<'a> {
    fn new(tokens: &'a [String]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.pos).map(String::as_str)
    }

    fn next(&mut self) -> Option<&'a str> {
        let token = self.peek();
        self.pos += 1;
        token
    }

    fn expect(&mut self, expected: &str) -> Result<()> {
        match self.next() {
            Some(token) if token == expected => Ok(()),
            Some(token) => bail!("expected '{}', found '{}'", expected, token),
            None => bail!("expected '{}', found end of message", expected),
        }
    }

    fn next_parsed<T>(&mut self, what: &str) -> Result<T>
    where
        T: FromStr<Err = anyhow::Error>,
    {
        let token = self.next().with_context(|| format!("missing {}", what))?;
        token.parse().with_context(|| format!("invalid {} '{}'", what, token))
    }

    /// `( FROM TO )`
    fn next_move(&mut self) -> Result<(Loc, Loc)> {
        self.expect("(")?;
        let from = self.next_parsed("position")?;
        let to = self.next_parsed("position")?;
        self.expect(")")?;
        Ok((from, to))
    }

    fn take_until(&mut self, end: &str) -> Vec<&'a str> {
        let mut taken = Vec::new();
        while let Some(token) = self.peek() {
            if token == end {
                break;
            }
            taken.push(token);
            self.pos += 1;
        }
        taken
    }
}

/// Seconds per move, written as an integer, a decimal or a fraction `a/b`.
fn parse_seconds(s: &str) -> Result<Duration> {
    let seconds = match s.split_once('/') {
        Some((numerator, denominator)) => {
            let numerator: f64 = numerator.parse()
                .with_context(|| format!("invalid time numerator '{}'", numerator))?;
            let denominator: f64 = denominator.parse()
                .with_context(|| format!("invalid time denominator '{}'", denominator))?;
            ensure!(denominator != 0.0, "time per move has a zero denominator");
            numerator / denominator
        }
        None => s.parse().with_context(|| format!("invalid time per move '{}'", s))?,
    };

    ensure!(seconds.is_finite() && seconds >= 0.0, "invalid time per move {}", s);
    Duration::try_from_secs_f64(seconds)
        .with_context(|| format!("time per move {} is out of range", s))
}
