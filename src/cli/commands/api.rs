use crate::common::{
    AppConfig,
    config::{DEFAULT_API_BASE_URL, DEFAULT_MESSAGE_TTL, normalize_value},
};
use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::time::Duration;

pub const ARG_API_URL: &str = "api-url";
pub const ARG_STORAGE: &str = "storage";
pub const ARG_MESSAGE_SECONDS: &str = "message-seconds";
pub const ARG_TIMEOUT_SECONDS: &str = "timeout-seconds";
pub const ARG_EPHEMERAL: &str = "ephemeral";

#[must_use]
pub fn with_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(ARG_API_URL)
                .long(ARG_API_URL)
                .help("Base URL of the activities API")
                .env("MERGINGTON_API_URL")
                .default_value(DEFAULT_API_BASE_URL)
                .global(true),
        )
        .arg(
            Arg::new(ARG_STORAGE)
                .long(ARG_STORAGE)
                .help("File holding the persisted session token (default: user config dir)")
                .env("MERGINGTON_STORAGE")
                .global(true),
        )
        .arg(
            Arg::new(ARG_MESSAGE_SECONDS)
                .long(ARG_MESSAGE_SECONDS)
                .help("Seconds a success or error message stays visible")
                .env("MERGINGTON_MESSAGE_SECONDS")
                .default_value("5")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_SECONDS)
                .long(ARG_TIMEOUT_SECONDS)
                .help("Per-request timeout in seconds (default: none)")
                .env("MERGINGTON_TIMEOUT_SECONDS")
                .value_parser(clap::value_parser!(u64).range(1..))
                .global(true),
        )
        .arg(
            Arg::new(ARG_EPHEMERAL)
                .long(ARG_EPHEMERAL)
                .help("Keep the session token in memory only")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}

pub struct Options {
    pub config: AppConfig,
    pub ephemeral: bool,
}

impl Options {
    /// # Errors
    /// Returns an error if the API URL is invalid.
    pub fn parse(matches: &clap::ArgMatches) -> Result<Self> {
        let api_url = matches
            .get_one::<String>(ARG_API_URL)
            .map_or(DEFAULT_API_BASE_URL, String::as_str);

        let mut config = AppConfig::new(api_url).context("invalid MERGINGTON_API_URL")?;

        if let Some(path) = matches
            .get_one::<String>(ARG_STORAGE)
            .and_then(|value| normalize_value(value))
        {
            config = config.with_storage_path(path);
        }

        let message_ttl = matches
            .get_one::<u64>(ARG_MESSAGE_SECONDS)
            .copied()
            .map_or(DEFAULT_MESSAGE_TTL, Duration::from_secs);
        let request_timeout = matches
            .get_one::<u64>(ARG_TIMEOUT_SECONDS)
            .copied()
            .map(Duration::from_secs);

        Ok(Self {
            config: config
                .with_message_ttl(message_ttl)
                .with_request_timeout(request_timeout),
            ephemeral: matches.get_flag(ARG_EPHEMERAL),
        })
    }
}
