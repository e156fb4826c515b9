use super::{open_page, print_page};
use crate::cli::globals::GlobalArgs;
use crate::components::ActivityList;
use anyhow::{Result, bail};

#[derive(Debug)]
pub struct SignupArgs {
    pub globals: GlobalArgs,
    pub activity: String,
    pub email: String,
}

#[derive(Debug)]
pub struct UnregisterArgs {
    pub globals: GlobalArgs,
    pub activity: String,
    pub email: String,
}

/// # Errors
/// Returns an error if the activities could not be loaded.
pub async fn list(globals: &GlobalArgs) -> Result<()> {
    let controller = open_page(globals).await?;
    print_page(&controller);

    if matches!(controller.page().activities, ActivityList::Failed(_)) {
        bail!("activities could not be loaded");
    }
    Ok(())
}

/// # Errors
/// Returns an error if the signup was not accepted.
pub async fn signup(args: SignupArgs) -> Result<()> {
    let controller = open_page(&args.globals).await?;
    let signed_up = controller.signup(&args.activity, &args.email).await;
    print_page(&controller);

    if !signed_up {
        bail!("signup for {} failed", args.activity);
    }
    Ok(())
}

/// # Errors
/// Returns an error if the participant was not removed.
pub async fn unregister(args: UnregisterArgs) -> Result<()> {
    let controller = open_page(&args.globals).await?;
    let removed = controller.unregister(&args.activity, &args.email).await;
    print_page(&controller);

    if !removed {
        bail!("unregister from {} did not happen", args.activity);
    }
    Ok(())
}
