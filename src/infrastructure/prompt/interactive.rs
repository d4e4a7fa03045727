//! Interactive Confirmer
//!
//! Asks the user via stderr and reads the answer from stdin.

use crate::domain::ports::{is_affirmative, ConfirmationRequest, Confirmer};
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Interactive confirmer using stdin/stderr.
///
/// Reads a single line. EOF and read errors count as "no".
pub struct StdinConfirmer {
    input: Mutex<Box<dyn BufRead + Send>>,
    output: Mutex<Box<dyn Write + Send>>,
}

impl StdinConfirmer {
    pub fn new() -> Self {
        Self::with_io(io::BufReader::new(io::stdin()), io::stderr())
    }

    /// Create a confirmer over custom streams (for testing)
    pub fn with_io<R, W>(input: R, output: W) -> Self
    where
        R: BufRead + Send + 'static,
        W: Write + Send + 'static,
    {
        Self {
            input: Mutex::new(Box::new(input)),
            output: Mutex::new(Box::new(output)),
        }
    }

    fn write_prompt(&self, request: &ConfirmationRequest<'_>) {
        if let Ok(mut out) = self.output.lock() {
            let _ = writeln!(out);
            let _ = writeln!(
                out,
                "!!! WARNING: The following operations are DESTRUCTIVE !!!"
            );
            let _ = writeln!(
                out,
                "Remove the original directory '{}'",
                request.directory.display()
            );
            let _ = writeln!(
                out,
                "and the intermediate tar file '{}' now that '{}' has been written?",
                request.archive.display(),
                request.compressed.display()
            );
            let _ = write!(out, "Enter 'y' for yes, any other key to cancel: ");
            let _ = out.flush();
        }
    }

    fn read_answer(&self) -> Option<String> {
        let mut input = self.input.lock().ok()?;
        let mut line = String::new();
        match input.read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line),
        }
    }
}

impl Default for StdinConfirmer {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirmer for StdinConfirmer {
    fn confirm(&self, request: &ConfirmationRequest<'_>) -> bool {
        self.write_prompt(request);
        self.read_answer()
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false)
    }
}
