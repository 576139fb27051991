//! Console input: each stdin line becomes a batch of input events.
//!
//! `quit` closes the session. `esc` is the Escape key. Any other line
//! presses one key per character, and an empty line presses Enter.

use std::io::BufRead;
use std::sync::mpsc;

use tracing::debug;

use skirmish_core::commands::{InputEvent, Key};

use crate::state::GameLoopCommand;

/// Key code reported for a bare Enter.
const ENTER: u32 = 13;

pub fn parse_line(line: &str) -> Vec<InputEvent> {
    match line.trim() {
        "quit" => vec![InputEvent::Quit],
        "esc" => vec![InputEvent::KeyPress { key: Key::Escape }],
        "" => vec![InputEvent::KeyPress {
            key: Key::Other(ENTER),
        }],
        keys => keys
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| InputEvent::KeyPress { key: Key::Char(c) })
            .collect(),
    }
}

/// Forward input from `reader` until it ends or the game loop goes away.
pub fn forward_input<R: BufRead>(reader: R, cmd_tx: &mpsc::Sender<GameLoopCommand>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };
        for event in parse_line(&line) {
            debug!(?event, "console input");
            if cmd_tx.send(GameLoopCommand::Input(event)).is_err() {
                return;
            }
        }
    }
}
