use crate::{
    cli_options::CliOptions,
    config::{
        Config,
        Severity,
    },
};
use anyhow::{
    ensure,
    Context,
};

/// Load a config, apply CLI overrides, and validate it.
///
/// This prints to the stderr directly.
/// It is intended to be called BEFORE the loggers are set up.
pub(crate) fn load_config(cli_options: &CliOptions) -> anyhow::Result<Config> {
    let path = cli_options.config.as_path();
    let mut config = if cli_options.uses_default_config() && !path.exists() {
        eprintln!("`{path}` does not exist, using the default config...");
        Config::default()
    } else {
        eprintln!("loading `{path}`...");
        Config::load_from_path(path).with_context(|| format!("failed to load `{path}`"))?
    };

    if let Some(ai_delay_ms) = cli_options.ai_delay_ms {
        config.ai_delay_ms = ai_delay_ms;
    }

    if let Some(log_dir) = cli_options.log_dir.clone() {
        config.log_dir = Some(log_dir);
    }

    eprintln!("validating config...");
    let errors = config.validate();
    let mut error_count = 0;
    for e in errors {
        match e.severity() {
            Severity::Warn => {
                eprintln!("validation warning: {}", e.error());
            }
            Severity::Error => {
                eprintln!("validation error: {}", e.error());
                error_count += 1;
            }
        }
    }

    ensure!(
        error_count == 0,
        "validation failed with {error_count} errors."
    );

    Ok(config)
}
