use clap::{Arg, ArgAction, Command};

pub const CMD_ACTIVITIES: &str = "activities";
pub const CMD_SIGNUP: &str = "signup";
pub const CMD_UNREGISTER: &str = "unregister";
pub const CMD_SHELL: &str = "shell";

pub const ARG_ACTIVITY: &str = "activity";
pub const ARG_EMAIL: &str = "email";
pub const ARG_YES: &str = "yes";

fn activity_arg() -> Arg {
    Arg::new(ARG_ACTIVITY)
        .short('a')
        .long(ARG_ACTIVITY)
        .help("Activity name, for example \"Chess Club\"")
        .required(true)
}

fn email_arg(help: &'static str) -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long(ARG_EMAIL)
        .help(help)
        .required(true)
}

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(Command::new(CMD_ACTIVITIES).about("Show the activities page"))
        .subcommand(
            Command::new(CMD_SIGNUP)
                .about("Sign a student up for an activity")
                .arg(activity_arg())
                .arg(email_arg("Student email")),
        )
        .subcommand(
            Command::new(CMD_UNREGISTER)
                .about("Remove a student from an activity (teachers only)")
                .arg(activity_arg())
                .arg(email_arg("Student email to remove")),
        )
        .subcommand(Command::new(CMD_SHELL).about("Interactive activities page"))
        .arg(
            Arg::new(ARG_YES)
                .short('y')
                .long(ARG_YES)
                .help("Answer yes to confirmation prompts")
                .action(ArgAction::SetTrue)
                .global(true),
        )
}
