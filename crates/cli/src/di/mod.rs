use ferrous_serial_application::ports::SoaQuery;
use ferrous_serial_application::use_cases::{ProbeServerUseCase, RunSurveyUseCase};
use ferrous_serial_domain::{Config, Zone};
use ferrous_serial_infrastructure::dns::WireSoaExchange;
use ferrous_serial_infrastructure::output::StdoutStatusReporter;
use ferrous_serial_infrastructure::system::{HickoryNameserverSource, SystemAddressResolver};
use std::sync::Arc;

pub struct SurveyServices {
    pub run_survey: Arc<RunSurveyUseCase>,
}

impl SurveyServices {
    pub fn new(config: &Config, zone: Zone) -> Self {
        let prober = Arc::new(ProbeServerUseCase::new(
            Arc::new(WireSoaExchange::new()),
            SoaQuery::new(zone, &config.query),
            config.query.transport,
        ));

        let run_survey = Arc::new(RunSurveyUseCase::new(
            prober,
            Arc::new(SystemAddressResolver::new(config.query.timeout())),
            Arc::new(HickoryNameserverSource::new()),
            Arc::new(StdoutStatusReporter::new()),
            config.survey.clone(),
        ));

        Self { run_survey }
    }
}
