use super::{open_page, print_page};
use crate::cli::globals::GlobalArgs;
use anyhow::{Result, bail};
use secrecy::SecretString;

pub struct LoginArgs {
    pub globals: GlobalArgs,
    pub email: String,
    pub password: SecretString,
}

impl std::fmt::Debug for LoginArgs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginArgs")
            .field("globals", &self.globals)
            .field("email", &self.email)
            .field("password", &"***")
            .finish()
    }
}

/// # Errors
/// Returns an error if the login was rejected.
pub async fn login(args: LoginArgs) -> Result<()> {
    let controller = open_page(&args.globals).await?;
    controller.show_login_form();
    controller.set_login_email(&args.email);
    controller.set_login_password(args.password);

    let logged_in = controller.submit_login_form().await;
    print_page(&controller);

    if !logged_in {
        bail!("login failed");
    }
    Ok(())
}

/// # Errors
/// Returns an error if the page cannot be opened.
pub async fn logout(globals: &GlobalArgs) -> Result<()> {
    let controller = open_page(globals).await?;
    controller.logout().await;
    print_page(&controller);
    Ok(())
}

/// # Errors
/// Returns an error if the page cannot be opened.
pub async fn whoami(globals: &GlobalArgs) -> Result<()> {
    let controller = open_page(globals).await?;
    match controller.auth().teacher() {
        Some(teacher) => match teacher.role {
            Some(role) => println!("{} <{}> ({role})", teacher.name, teacher.email),
            None => println!("{} <{}>", teacher.name, teacher.email),
        },
        None => println!("anonymous"),
    }
    Ok(())
}
