use ferrous_serial_domain::StatusLine;

pub trait StatusReporter: Send + Sync {
    fn report(&self, line: &StatusLine);
}
