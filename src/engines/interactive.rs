//! Terminal engine driven by a human.
//!
//! Before each move it prints the board and whose turn it is, then reads:
//!
//! 1. the move kind: `a`/`attack` or `s`/`split`
//! 2. for an attack, the attacking hand and the target hand (`l`/`r`)
//! 3. for a split, the new left and right counts (`0`..=`4`)
//!
//! Unrecognised input is reported and asked again. The resulting action is
//! not validated here; the game loop rejects illegal moves.

use std::io::{BufRead, Write};

use super::MoveEngine;
use crate::core::{Action, ActionKind, GameError, GameState, Hand, HandPair, MAX_STICKS};

/// Reads moves from `input`, writes prompts to `output`.
pub struct Interactive<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Interactive<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far goes here.
    pub fn output(&self) -> &W {
        &self.output
    }

    fn prompt<T>(&mut self, question: &str, parse: fn(&str) -> Option<T>) -> Result<T, GameError> {
        let mut line = String::new();
        loop {
            write!(self.output, "{question} ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Err(GameError::InputClosed);
            }

            let answer = line.trim();
            match parse(answer) {
                Some(value) => return Ok(value),
                None => {
                    tracing::warn!(input = answer, question, "unrecognised input");
                    writeln!(self.output, "Sorry, I didn't understand {answer:?}.")?;
                }
            }
        }
    }
}

impl<R: BufRead, W: Write> MoveEngine for Interactive<R, W> {
    fn name(&self) -> &'static str {
        "interactive"
    }

    fn choose_move(&mut self, state: &GameState) -> Result<Action, GameError> {
        writeln!(self.output, "{state}")?;
        writeln!(self.output, "{}'s turn:", state.active())?;

        match self.prompt("Attack or split? (a/s)", parse_kind)? {
            ActionKind::Attack => {
                let attacker = self.prompt("Which hand attacks? (l/r)", parse_hand)?;
                let target = self.prompt("Which hand is attacked? (l/r)", parse_hand)?;
                Ok(Action::attack(attacker, target))
            }
            ActionKind::Split => {
                let left = self.prompt("New left hand:", parse_count)?;
                let right = self.prompt("New right hand:", parse_count)?;
                Ok(Action::split(HandPair::new(left, right)?))
            }
        }
    }
}

fn parse_kind(answer: &str) -> Option<ActionKind> {
    match answer.to_ascii_lowercase().as_str() {
        "a" | "attack" => Some(ActionKind::Attack),
        "s" | "split" => Some(ActionKind::Split),
        _ => None,
    }
}

fn parse_hand(answer: &str) -> Option<Hand> {
    match answer.to_ascii_lowercase().as_str() {
        "l" | "left" => Some(Hand::Left),
        "r" | "right" => Some(Hand::Right),
        _ => None,
    }
}

fn parse_count(answer: &str) -> Option<u8> {
    answer.parse::<u8>().ok().filter(|&n| n <= MAX_STICKS)
}
