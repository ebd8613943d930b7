use std::io;

use sketch_core::try_init_tracing;
use sketch_duck::demonstrate;

fn main() -> io::Result<()> {
    // Logs go to stderr, so stdout carries only the announcements.
    let _ = try_init_tracing();

    let stdout = io::stdout();
    let ducks = demonstrate(&mut stdout.lock())?;
    tracing::debug!(count = ducks.len(), "Flock complete");
    Ok(())
}
