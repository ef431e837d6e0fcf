use ferrous_doh_domain::{CliOverrides, Config, ConfigError};

/// Loads the configuration file (if any), applies command-line overrides and
/// validates the result.
pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> Result<Config, ConfigError> {
    let config = Config::load(path, overrides)?;
    config.validate()?;
    Ok(config)
}
