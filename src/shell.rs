//! Line-oriented terminal loop around a [`MachineController`].

use crate::machine::MachineController;
use std::io::{self, BufRead, Write};

/// Drive `controller` from `input` until it exits or input runs out.
///
/// The initial prompt is written before the first line is read, and the
/// output is flushed after every line so prompts appear immediately.
pub fn run<R, W>(controller: &mut MachineController, input: R, mut output: W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    output.write_all(controller.start().as_bytes())?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        output.write_all(controller.handle(&line).as_bytes())?;
        output.flush()?;

        if !controller.is_active() {
            return Ok(());
        }
    }

    tracing::debug!("input closed before exit");
    Ok(())
}
