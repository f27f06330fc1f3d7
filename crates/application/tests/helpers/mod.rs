pub mod log_capture;
pub mod mock_ports;

pub use log_capture::CapturedLogs;
pub use mock_ports::{
    MockAddressResolver, MockNameserverSource, MockSoaExchange, RecordingReporter, ResponseBuilder,
};
