//! Host input: quit requests and the destroy-a-random-ship key.

use rand::Rng;
use tracing::debug;

use skirmish_core::commands::InputEvent;
use skirmish_core::enums::DestructionCause;
use skirmish_core::events::SimEvent;

use crate::context::TickContext;
use crate::systems::ships;

/// Apply this frame's input. Returns true if the host asked to quit.
pub fn run(ctx: &mut TickContext<'_>, input: &[InputEvent]) -> bool {
    let mut quit = false;
    for event in input {
        match event {
            InputEvent::Quit => quit = true,
            InputEvent::KeyPress { key } if key.is_exit() => quit = true,
            InputEvent::KeyPress { key } => {
                debug!(?key, "key press destroys a random ship");
                destroy_random_ship(ctx);
            }
        }
    }
    if quit {
        ctx.events.push(SimEvent::QuitRequested);
    }
    quit
}

/// Destroy one uniformly chosen ship. No-op on an empty fleet.
pub fn destroy_random_ship(ctx: &mut TickContext<'_>) -> bool {
    let roster = ships::ship_roster(ctx.world);
    if roster.is_empty() {
        return false;
    }
    let victim = roster[ctx.rng.gen_range(0..roster.len())];
    ships::destroy_ship(ctx, victim, DestructionCause::Input)
}
