//! Ferrous Serial Application Layer
pub mod errors;
pub mod ports;
pub mod use_cases;

pub use errors::SurveyError;
