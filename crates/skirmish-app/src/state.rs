//! Messages and results shared between the host threads.

use skirmish_core::commands::InputEvent;
use skirmish_core::events::SimEvent;
use skirmish_core::state::FrameSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug)]
pub enum GameLoopCommand {
    /// Raw input to apply at the start of the next frame.
    Input(InputEvent),
    /// Stop the game loop after the current frame.
    Shutdown,
}

/// Running totals reported when the game loop ends.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub frames: u64,
    pub weapons_fired: u64,
    pub ships_destroyed: u64,
    pub draw_commands: u64,
    pub draw_failures: u64,
    pub quit_requested: bool,
}

impl RunSummary {
    /// Fold one frame's snapshot into the totals.
    pub fn record(&mut self, snapshot: &FrameSnapshot, draw_commands: usize) {
        self.frames += 1;
        self.draw_commands += draw_commands as u64;
        self.draw_failures += u64::from(snapshot.draw_failures);
        self.quit_requested |= snapshot.quit_requested;
        for event in &snapshot.events {
            match event {
                SimEvent::WeaponFired { .. } => self.weapons_fired += 1,
                SimEvent::ShipDestroyed { .. } => self.ships_destroyed += 1,
                _ => {}
            }
        }
    }
}
