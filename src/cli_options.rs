use camino::Utf8PathBuf;

/// The default config path.
///
/// It is fine for nothing to exist here.
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";

/// CLI Options
#[derive(Debug, argh::FromArgs)]
#[argh(description = "Play Tic-Tac-Toe against a computer that never loses")]
pub struct CliOptions {
    #[argh(
        option,
        description = "the path to the config",
        default = "Utf8PathBuf::from(DEFAULT_CONFIG_PATH)"
    )]
    pub config: Utf8PathBuf,

    #[argh(
        option,
        description = "how long the computer pretends to think, in milliseconds"
    )]
    pub ai_delay_ms: Option<u64>,

    #[argh(option, description = "a directory to write log files to")]
    pub log_dir: Option<Utf8PathBuf>,
}

impl CliOptions {
    /// Returns true if the config path was not changed from the default.
    pub fn uses_default_config(&self) -> bool {
        self.config == DEFAULT_CONFIG_PATH
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use argh::FromArgs;
    use camino::Utf8Path;

    #[test]
    fn defaults() {
        let options = CliOptions::from_args(&["tic-tac-toe-game"], &[]).expect("valid args");
        assert!(options.uses_default_config());
        assert!(options.ai_delay_ms.is_none());
        assert!(options.log_dir.is_none());
    }

    #[test]
    fn overrides() {
        let options = CliOptions::from_args(
            &["tic-tac-toe-game"],
            &["--config", "game.toml", "--ai-delay-ms", "0", "--log-dir", "logs"],
        )
        .expect("valid args");
        assert!(!options.uses_default_config());
        assert_eq!(options.config, "game.toml");
        assert_eq!(options.ai_delay_ms, Some(0));
        assert_eq!(options.log_dir.as_deref(), Some(Utf8Path::new("logs")));
    }
}
