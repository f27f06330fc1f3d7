use ferrous_serial_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(path: Option<&str>, cli_overrides: CliOverrides) -> anyhow::Result<Config> {
    let config = Config::load(path, cli_overrides)?;

    debug!(
        config_file = path.unwrap_or("<none>"),
        timeout_secs = config.query.timeout_secs,
        max_attempts = config.query.max_attempts,
        transport = config.query.transport.as_str(),
        jobs = config.survey.jobs,
        "Configuration loaded"
    );

    Ok(config)
}
