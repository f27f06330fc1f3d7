use clap::Parser;
use ferrous_serial_domain::{
    AddressFamily, CliOverrides, ConfigError, DomainError, LoggingConfig, Verdict, Zone,
};
use std::process::ExitCode;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser, Debug)]
#[command(name = "ferrous-serial")]
#[command(version)]
#[command(about = "Check that every nameserver of a zone serves the same SOA serial")]
struct Cli {
    /// Zone to check
    zone: String,

    /// Query over IPv4 only
    #[arg(short = '4', conflicts_with = "ipv6")]
    ipv4: bool,

    /// Query over IPv6 only
    #[arg(short = '6')]
    ipv6: bool,

    /// Use TCP for queries (default: UDP, TCP when truncated)
    #[arg(short = 'c')]
    tcp: bool,

    /// Per-attempt timeout in seconds
    #[arg(short = 't', value_name = "SECS")]
    timeout: Option<u64>,

    /// Maximum UDP attempts per server
    #[arg(short = 'r', value_name = "N")]
    retries: Option<u32>,

    /// Allowed serial drift between servers
    #[arg(short = 'd', value_name = "N")]
    allowed_drift: Option<u32>,

    /// Master server name or address
    #[arg(short = 'm', value_name = "NS")]
    master: Option<String>,

    /// Additional nameservers to check
    #[arg(short = 'a', value_name = "NS1,NS2,..", value_delimiter = ',')]
    additional: Vec<String>,

    /// Set the DNSSEC-OK bit in queries
    #[arg(short = 'z')]
    dnssec_ok: bool,

    /// Don't query the zone's published NS set (requires -a)
    #[arg(short = 'n')]
    skip_ns_set: bool,

    /// Request and print each server's NSID
    #[arg(short = 'i')]
    nsid: bool,

    /// Servers probed concurrently
    #[arg(short = 'j', value_name = "N")]
    jobs: Option<usize>,

    /// Configuration file path
    #[arg(long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl Cli {
    fn overrides(&self) -> CliOverrides {
        let address_family = match (self.ipv4, self.ipv6) {
            (true, _) => Some(AddressFamily::Ipv4),
            (_, true) => Some(AddressFamily::Ipv6),
            _ => None,
        };

        CliOverrides {
            address_family,
            use_tcp: self.tcp,
            timeout_secs: self.timeout,
            max_attempts: self.retries,
            allowed_drift: self.allowed_drift,
            master: self.master.clone(),
            additional: self.additional.clone(),
            skip_ns_set: self.skip_ns_set,
            dnssec_ok: self.dnssec_ok,
            request_nsid: self.nsid,
            jobs: self.jobs,
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(Verdict::Usage.exit_code())
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let verdict = match run(cli).await {
        Ok(verdict) => verdict,
        Err(e) => {
            error!("{:#}", e);
            failure_verdict(&e)
        }
    };

    ExitCode::from(verdict.exit_code())
}

async fn run(cli: Cli) -> anyhow::Result<Verdict> {
    let config = match bootstrap::load_config(cli.config.as_deref(), cli.overrides()) {
        Ok(config) => config,
        Err(e) => {
            bootstrap::init_logging(fallback_log_level(cli.log_level.as_deref()))?;
            return Err(e);
        }
    };
    bootstrap::init_logging(&config.logging.level)?;

    let zone = Zone::parse(&cli.zone)?;
    info!(zone = %zone, "Checking SOA serials");

    let services = di::SurveyServices::new(&config, zone);
    let verdict = match services.run_survey.execute().await {
        Ok(survey) => survey.verdict(config.survey.allowed_drift),
        Err(e) => e.verdict(),
    };

    info!(verdict = verdict.as_str(), "Done");
    Ok(verdict)
}

/// Level used to report a configuration that could not be loaded.
fn fallback_log_level(requested: Option<&str>) -> &str {
    requested
        .filter(|level| LoggingConfig::is_known_level(level))
        .unwrap_or("warn")
}

/// Bad input is a usage error; anything else means the check could not run.
fn failure_verdict(error: &anyhow::Error) -> Verdict {
    if error.downcast_ref::<ConfigError>().is_some() || error.downcast_ref::<DomainError>().is_some()
    {
        Verdict::Usage
    } else {
        Verdict::PartialFailure
    }
}
