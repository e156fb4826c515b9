use crate::common::AppConfig;

#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub config: AppConfig,
    /// Keep the bearer token in memory only.
    pub ephemeral: bool,
    /// Answer yes to confirmation prompts.
    pub assume_yes: bool,
}

impl GlobalArgs {
    #[must_use]
    pub const fn new(config: AppConfig) -> Self {
        Self {
            config,
            ephemeral: false,
            assume_yes: false,
        }
    }
}
