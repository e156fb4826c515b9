use clap::{Arg, Command};

pub const CMD_LOGIN: &str = "login";
pub const CMD_LOGOUT: &str = "logout";
pub const CMD_WHOAMI: &str = "whoami";

pub const ARG_TEACHER_EMAIL: &str = "email";
pub const ARG_TEACHER_PASSWORD: &str = "password";

#[must_use]
pub fn with_subcommands(command: Command) -> Command {
    command
        .subcommand(
            Command::new(CMD_LOGIN)
                .about("Log in as a teacher")
                .arg(
                    Arg::new(ARG_TEACHER_EMAIL)
                        .short('e')
                        .long(ARG_TEACHER_EMAIL)
                        .help("Teacher email")
                        .env("MERGINGTON_TEACHER_EMAIL"),
                )
                .arg(
                    Arg::new(ARG_TEACHER_PASSWORD)
                        .short('p')
                        .long(ARG_TEACHER_PASSWORD)
                        .help("Teacher password")
                        .env("MERGINGTON_TEACHER_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(Command::new(CMD_LOGOUT).about("Forget the teacher session"))
        .subcommand(Command::new(CMD_WHOAMI).about("Show the signed-in teacher"))
}
