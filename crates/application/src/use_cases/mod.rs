mod probe_server;
mod run_survey;

pub use probe_server::ProbeServerUseCase;
pub use run_survey::RunSurveyUseCase;
