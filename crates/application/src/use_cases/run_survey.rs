use super::ProbeServerUseCase;
use crate::errors::SurveyError;
use crate::ports::{AddressResolver, NameserverSource, StatusReporter};
use ferrous_serial_domain::{
    MasterReference, NameserverSet, ProbeOutcome, StatusLine, Survey, SurveyConfig,
};
use futures::stream::{self, StreamExt};
use std::net::IpAddr;
use std::sync::Arc;
use tracing::{debug, error, info};

enum ProbeTarget {
    Address { name: Arc<str>, address: IpAddr },
    Unresolvable { name: Arc<str> },
}

/// Collects the candidate servers, probes the master first when one is
/// configured, then probes every candidate address and prints a line per
/// successful answer as soon as it is known.
pub struct RunSurveyUseCase {
    prober: Arc<ProbeServerUseCase>,
    resolver: Arc<dyn AddressResolver>,
    nameservers: Arc<dyn NameserverSource>,
    reporter: Arc<dyn StatusReporter>,
    config: SurveyConfig,
}

impl RunSurveyUseCase {
    pub fn new(
        prober: Arc<ProbeServerUseCase>,
        resolver: Arc<dyn AddressResolver>,
        nameservers: Arc<dyn NameserverSource>,
        reporter: Arc<dyn StatusReporter>,
        config: SurveyConfig,
    ) -> Self {
        Self {
            prober,
            resolver,
            nameservers,
            reporter,
            config,
        }
    }

    pub async fn execute(&self) -> Result<Survey, SurveyError> {
        let candidates = self.candidate_names().await?;
        debug!(
            zone = %self.prober.zone(),
            candidates = candidates.len(),
            "Starting serial survey"
        );

        let mut survey = Survey::new();
        if let Some(master) = &self.config.master {
            self.probe_master(master, &mut survey).await?;
        }

        let family = self.config.address_family;
        let outcomes = stream::iter(candidates)
            .then(|name| async move {
                let addresses = self.resolver.resolve(&name, family).await;
                (name, addresses)
            })
            .flat_map(|(name, addresses)| stream::iter(Self::targets(name, addresses)))
            .map(|target| self.probe_target(target))
            .buffered(self.config.jobs.max(1));
        let mut outcomes = std::pin::pin!(outcomes);

        while let Some(outcome) = outcomes.next().await {
            self.emit(&outcome, survey.master());
            survey.record(outcome);
        }

        info!(
            attempted = survey.attempted(),
            successful = survey.successful(),
            "Serial survey complete"
        );

        Ok(survey)
    }

    async fn candidate_names(&self) -> Result<NameserverSet, SurveyError> {
        if self.config.skip_ns_set {
            return Ok(NameserverSet::from_names(&self.config.additional));
        }

        let published = self
            .nameservers
            .nameservers(self.prober.zone())
            .await
            .map_err(|e| {
                error!("{}", e);
                SurveyError::NameserverLookup(e)
            })?;

        Ok(NameserverSet::merged(&published, &self.config.additional))
    }

    /// Only the master's first address is queried.
    async fn probe_master(&self, master: &str, survey: &mut Survey) -> Result<(), SurveyError> {
        let unavailable = || {
            error!("failed to obtain master serial");
            SurveyError::MasterUnavailable {
                master: master.to_string(),
            }
        };

        let addresses = self
            .resolver
            .resolve(master, self.config.address_family)
            .await;
        let Some(address) = addresses.into_iter().next() else {
            return Err(unavailable());
        };

        let name: Arc<str> = Arc::from(master);
        let outcome = self.prober.execute(name.clone(), address).await;
        let Some(serial) = outcome.serial() else {
            return Err(unavailable());
        };

        survey.set_master(MasterReference {
            name,
            address,
            serial,
        });
        self.emit(&outcome, survey.master());
        survey.record(outcome);
        Ok(())
    }

    fn targets(name: Arc<str>, addresses: Vec<IpAddr>) -> Vec<ProbeTarget> {
        if addresses.is_empty() {
            return vec![ProbeTarget::Unresolvable { name }];
        }
        addresses
            .into_iter()
            .map(|address| ProbeTarget::Address {
                name: name.clone(),
                address,
            })
            .collect()
    }

    async fn probe_target(&self, target: ProbeTarget) -> ProbeOutcome {
        match target {
            ProbeTarget::Address { name, address } => self.prober.execute(name, address).await,
            ProbeTarget::Unresolvable { name } => {
                let outcome = ProbeOutcome::unresolvable(name, self.config.address_family);
                if let Some(failure) = outcome.failure_kind() {
                    error!("{}", failure.report(&outcome.name, None));
                }
                outcome
            }
        }
    }

    fn emit(&self, outcome: &ProbeOutcome, master: Option<&MasterReference>) {
        if let Some(line) = StatusLine::for_outcome(outcome, master, self.prober.nsid_requested()) {
            self.reporter.report(&line);
        }
    }
}
