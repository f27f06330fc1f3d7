use ferrous_serial_application::ports::StatusReporter;
use ferrous_serial_domain::StatusLine;
use std::io::Write;

/// Writes status lines to stdout, flushing after each so they appear
/// while the survey is still running.
#[derive(Default)]
pub struct StdoutStatusReporter;

impl StdoutStatusReporter {
    pub fn new() -> Self {
        Self
    }
}

impl StatusReporter for StdoutStatusReporter {
    fn report(&self, line: &StatusLine) {
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line).and_then(|_| stdout.flush()) {
            tracing::error!(error = %e, "Failed to write status line");
        }
    }
}
