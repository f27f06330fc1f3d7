use std::io;
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;
use tracing::Level;

/// Collects WARN and ERROR events emitted on the current thread while the
/// returned guard is alive.
#[derive(Clone, Default)]
pub struct CapturedLogs {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedLogs {
    pub fn install() -> (Self, DefaultGuard) {
        let logs = Self::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_max_level(Level::WARN)
            .with_ansi(false)
            .without_time()
            .with_target(false)
            .finish();
        let guard = tracing::subscriber::set_default(subscriber);
        (logs, guard)
    }

    /// Captured events rendered as `LEVEL: message`.
    pub fn lines(&self) -> Vec<String> {
        let raw = String::from_utf8_lossy(&self.buffer.lock().unwrap()).into_owned();
        raw.lines()
            .filter_map(|line| line.trim_start().split_once(' '))
            .map(|(level, message)| format!("{}: {}", level, message.trim_start()))
            .collect()
    }

    pub fn count_at(&self, level: &str) -> usize {
        let prefix = format!("{}: ", level);
        self.lines().iter().filter(|line| line.starts_with(&prefix)).count()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
