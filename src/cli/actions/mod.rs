pub mod activities;
pub mod auth;
pub mod shell;

// Internal "interpreter" for `Action`.
// We keep the match in a separate module so `mod.rs` stays small as more actions are added.
mod run;

use crate::cli::globals::GlobalArgs;
use crate::common::{FileStorage, LocalStorage, MemoryStorage};
use crate::components::TerminalPrompt;
use crate::controller::Controller;
use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug)]
pub enum Action {
    Activities(GlobalArgs),
    Signup(activities::SignupArgs),
    Unregister(activities::UnregisterArgs),
    Login(auth::LoginArgs),
    Logout(GlobalArgs),
    Whoami(GlobalArgs),
    Shell(GlobalArgs),
}

impl Action {
    /// Execute the action.
    /// # Errors
    /// Returns an error if the page cannot be opened or the requested operation fails.
    pub async fn execute(self) -> Result<()> {
        run::execute(self).await
    }
}

/// Builds the controller for `globals` and bootstraps the page
/// (session restore, then the first render).
///
/// # Errors
/// Returns an error if the HTTP client cannot be built.
pub async fn open_page(globals: &GlobalArgs) -> Result<Controller> {
    let storage: Arc<dyn LocalStorage> = if globals.ephemeral {
        Arc::new(MemoryStorage::new())
    } else {
        debug!("session storage: {}", globals.config.storage_path.display());
        Arc::new(FileStorage::new(&globals.config.storage_path))
    };
    let prompt = Arc::new(TerminalPrompt::new(globals.assume_yes));

    let controller =
        Controller::new(&globals.config, storage, prompt).context("failed to open page")?;
    controller.bootstrap().await;

    Ok(controller)
}

/// Prints the current page to stdout.
pub fn print_page(controller: &Controller) {
    println!("{}", controller.page());
}
