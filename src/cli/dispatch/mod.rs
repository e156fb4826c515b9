//! Maps validated CLI matches to an action carrying the shared page settings.

use crate::cli::actions::{
    Action,
    activities::{SignupArgs, UnregisterArgs},
    auth::LoginArgs,
};
use crate::cli::commands::{api, auth, page};
use crate::cli::globals::GlobalArgs;
use anyhow::{Context, Result, anyhow};
use clap::ArgMatches;
use secrecy::SecretString;

/// # Errors
/// Returns an error if required arguments are missing or inconsistent.
pub fn handler(matches: &ArgMatches) -> Result<Action> {
    let options = api::Options::parse(matches)?;
    let mut globals = GlobalArgs::new(options.config);
    globals.ephemeral = options.ephemeral;
    globals.assume_yes = matches.get_flag(page::ARG_YES);

    match matches.subcommand() {
        Some((page::CMD_ACTIVITIES, _)) => Ok(Action::Activities(globals)),
        Some((page::CMD_SIGNUP, sub)) => Ok(Action::Signup(SignupArgs {
            activity: required(sub, page::ARG_ACTIVITY)?,
            email: required(sub, page::ARG_EMAIL)?,
            globals,
        })),
        Some((page::CMD_UNREGISTER, sub)) => Ok(Action::Unregister(UnregisterArgs {
            activity: required(sub, page::ARG_ACTIVITY)?,
            email: required(sub, page::ARG_EMAIL)?,
            globals,
        })),
        Some((page::CMD_SHELL, _)) => Ok(Action::Shell(globals)),
        Some((auth::CMD_LOGIN, sub)) => Ok(Action::Login(LoginArgs {
            email: optional(sub, auth::ARG_TEACHER_EMAIL),
            password: SecretString::from(optional(sub, auth::ARG_TEACHER_PASSWORD)),
            globals,
        })),
        Some((auth::CMD_LOGOUT, _)) => Ok(Action::Logout(globals)),
        Some((auth::CMD_WHOAMI, _)) => Ok(Action::Whoami(globals)),
        Some((name, _)) => Err(anyhow!("unknown command: {name}")),
        None => Err(anyhow!("missing command")),
    }
}

fn required(matches: &ArgMatches, id: &str) -> Result<String> {
    matches
        .get_one::<String>(id)
        .cloned()
        .with_context(|| format!("missing required argument: --{id}"))
}

/// Missing values become empty strings; login validates them later.
fn optional(matches: &ArgMatches, id: &str) -> String {
    matches.get_one::<String>(id).cloned().unwrap_or_default()
}
