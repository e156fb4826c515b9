//! Interactive page. Each line is one user interaction; the page is printed
//! after every interaction that changes it.

use super::{open_page, print_page};
use crate::cli::globals::GlobalArgs;
use crate::controller::Controller;
use anyhow::{Context, Result};
use secrecy::SecretString;
use std::io::{self, BufRead, Write};
use tracing::debug;

const HELP: &str = "\
Commands:
  list                          reload the activities
  signup <email> <activity>     sign up for an activity
  remove <email> <activity>     remove a participant (teachers only)
  icon                          click the user icon (login form or logout)
  login                         open the login form
  email <email>                 type into the login email field
  password <password>           type into the login password field
  submit                        submit the login form
  cancel                        close the login form
  logout                        log out
  help                          show this help
  quit                          leave the page";

#[derive(Debug, PartialEq, Eq)]
pub enum ShellCommand {
    List,
    Signup { email: String, activity: String },
    Remove { email: String, activity: String },
    Icon,
    Login,
    Email(String),
    Password(String),
    Submit,
    Cancel,
    Logout,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

impl ShellCommand {
    /// Activity names may contain spaces, so they take the rest of the line.
    /// A password is kept verbatim after the first separator.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        let raw = line
            .trim_end_matches(|c: char| c == '\r' || c == '\n')
            .trim_start();
        let (word, raw_rest) = raw.split_once(char::is_whitespace).unwrap_or((raw, ""));
        let rest = raw_rest.trim();
        let line = raw.trim_end();

        match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "list" | "ls" => Self::List,
            "signup" => email_and_activity(rest).map_or_else(
                || Self::Unknown(line.to_string()),
                |(email, activity)| Self::Signup { email, activity },
            ),
            "remove" | "rm" => email_and_activity(rest).map_or_else(
                || Self::Unknown(line.to_string()),
                |(email, activity)| Self::Remove { email, activity },
            ),
            "icon" => Self::Icon,
            "login" => Self::Login,
            "email" => Self::Email(rest.to_string()),
            "password" => Self::Password(raw_rest.to_string()),
            "submit" => Self::Submit,
            "cancel" => Self::Cancel,
            "logout" => Self::Logout,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            _ => Self::Unknown(line.to_string()),
        }
    }
}

fn email_and_activity(rest: &str) -> Option<(String, String)> {
    let (email, activity) = rest.split_once(char::is_whitespace)?;
    let activity = activity.trim();
    if activity.is_empty() {
        return None;
    }
    Some((email.to_string(), activity.to_string()))
}

/// # Errors
/// Returns an error if stdin cannot be read.
pub async fn execute(globals: &GlobalArgs) -> Result<()> {
    let controller = open_page(globals).await?;
    print_page(&controller);
    println!("Type `help` for commands.");

    loop {
        print!("> ");
        io::stdout().flush().context("failed to flush stdout")?;

        let line = tokio::task::spawn_blocking(read_line)
            .await
            .context("stdin reader failed")??;
        let Some(line) = line else {
            break;
        };

        // Only the command word; arguments may carry a password.
        debug!("shell command: {}", line.split_whitespace().next().unwrap_or(""));
        if !apply(&controller, ShellCommand::parse(&line)).await {
            break;
        }
    }

    Ok(())
}

fn read_line() -> Result<Option<String>> {
    let mut line = String::new();
    let read = io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read stdin")?;
    Ok((read > 0).then_some(line))
}

/// Applies one command. Returns `false` when the shell should exit.
async fn apply(controller: &Controller, command: ShellCommand) -> bool {
    match command {
        ShellCommand::Empty => return true,
        ShellCommand::Quit => return false,
        ShellCommand::Help => {
            println!("{HELP}");
            return true;
        }
        ShellCommand::Unknown(line) => {
            println!("Unknown command: {line} (try `help`)");
            return true;
        }
        ShellCommand::List => {
            controller.render_activities().await;
        }
        ShellCommand::Signup { email, activity } => {
            controller.set_signup_email(&email);
            if controller.select_activity(&activity) {
                controller.submit_signup_form().await;
            } else {
                println!("Unknown activity: {activity}");
                return true;
            }
        }
        ShellCommand::Remove { email, activity } => {
            let control = controller.page().activities.card(&activity).and_then(|card| {
                card.remove_controls()
                    .find(|control| control.email == email)
                    .cloned()
            });
            match control {
                Some(control) => {
                    controller.click_remove(&control).await;
                }
                None => {
                    controller.unregister(&activity, &email).await;
                }
            }
        }
        ShellCommand::Icon => controller.click_user_icon().await,
        ShellCommand::Login => controller.show_login_form(),
        ShellCommand::Email(email) => controller.set_login_email(&email),
        ShellCommand::Password(password) => {
            controller.set_login_password(SecretString::from(password));
        }
        ShellCommand::Submit => {
            controller.submit_login_form().await;
        }
        ShellCommand::Cancel => controller.hide_login_form(),
        ShellCommand::Logout => controller.logout().await,
    }

    print_page(controller);
    true
}
