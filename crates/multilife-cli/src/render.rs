//! Terminal presentation of intermediate generations.

use multilife_world::{GenerationObserver, Grid};
use std::io::{self, Write};
use tracing::warn;

/// Draws each generation in place: one digit per occupied cell, a dot
/// for empty, cursor moved home between frames so the board animates.
pub struct TerminalRenderer {
    out: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn draw(&mut self, generation: u64, grid: &Grid) -> io::Result<()> {
        let mut frame = String::from("\x1b[0;0H");
        let size = grid.size();

        for (pos, cell) in grid.iter() {
            match cell {
                Some(species) => frame.push_str(&format!("{species} ")),
                None => frame.push_str(". "),
            }
            if pos.x as usize == size - 1 {
                frame.push('\n');
            }
        }
        frame.push_str(&format!("\ngeneration {generation}\n"));

        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GenerationObserver for TerminalRenderer {
    fn on_generation(&mut self, generation: u64, grid: &Grid) {
        // Presentation failures never abort the run
        if let Err(err) = self.draw(generation, grid) {
            warn!("failed to render generation {}: {}", generation, err);
        }
    }
}
