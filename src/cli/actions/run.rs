use crate::cli::actions::{Action, activities, auth, shell};
use anyhow::Result;

/// Execute the provided action.
// This is the single dispatch point for all CLI actions.
// To add a new action, add a new `Action::*` variant and a corresponding `*::execute` call here.
/// # Errors
/// Returns an error if the action fails.
pub async fn execute(action: Action) -> Result<()> {
    match action {
        Action::Activities(globals) => activities::list(&globals).await,
        Action::Signup(args) => activities::signup(args).await,
        Action::Unregister(args) => activities::unregister(args).await,
        Action::Login(args) => auth::login(args).await,
        Action::Logout(globals) => auth::logout(&globals).await,
        Action::Whoami(globals) => auth::whoami(&globals).await,
        Action::Shell(globals) => shell::execute(&globals).await,
    }
}
