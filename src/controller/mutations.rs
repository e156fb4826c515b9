use super::Controller;
use crate::components::RemoveControl;
use crate::features::activities::client;
use regex::Regex;
use tracing::{error, info};

pub const GENERIC_ERROR: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister. Please try again.";
pub const TEACHERS_ONLY: &str = "Only teachers can remove students from activities";
pub const ACTIVITY_REQUIRED: &str = "Please select an activity";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";

/// The shape an `<input type="email">` accepts.
fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|regex| regex.is_match(email))
}

impl Controller {
    /// Signs `email` up for `activity`. Returns `true` on success.
    pub async fn signup(&self, activity: &str, email: &str) -> bool {
        let email = email.trim();
        if activity.trim().is_empty() {
            self.messages.error(ACTIVITY_REQUIRED);
            return false;
        }
        if !valid_email(email) {
            self.messages.error(INVALID_EMAIL);
            return false;
        }

        match client::signup(&self.api, activity, email).await {
            Ok(response) => {
                info!("signed up for {activity}");
                self.messages.success(response.message);
                self.view.update(|page| page.signup_form.reset());
                self.render_activities().await;
                true
            }
            Err(err) if err.is_transport() => {
                error!("Error signing up: {err}");
                self.messages.error(SIGNUP_FAILED);
                false
            }
            Err(err) => {
                self.messages.error(err.user_message(GENERIC_ERROR));
                false
            }
        }
    }

    /// Removes `email` from `activity`. Needs a teacher session and an explicit
    /// confirmation; without either no request is sent.
    pub async fn unregister(&self, activity: &str, email: &str) -> bool {
        let Some(token) = self.auth.bearer_token() else {
            self.prompt.alert(TEACHERS_ONLY);
            return false;
        };

        if !self.prompt.confirm(&format!("Remove {email} from {activity}?")) {
            return false;
        }

        match client::unregister(&self.api, activity, email, &token).await {
            Ok(response) => {
                info!("unregistered a participant from {activity}");
                self.messages.success(response.message);
                self.render_activities().await;
                true
            }
            Err(err) if err.is_transport() => {
                error!("Error unregistering: {err}");
                self.messages.error(UNREGISTER_FAILED);
                false
            }
            Err(err) => {
                self.messages.error(err.user_message(GENERIC_ERROR));
                false
            }
        }
    }

    /// Clicks a participant's removal control.
    pub async fn click_remove(&self, control: &RemoveControl) -> bool {
        self.unregister(&control.activity, &control.email).await
    }

    pub fn set_signup_email(&self, email: &str) {
        self.view.update(|page| page.signup_form.email = email.to_string());
    }

    /// Selects an activity in the signup form. Unknown names are ignored.
    pub fn select_activity(&self, activity: &str) -> bool {
        self.view.update(|page| {
            let known = page
                .activity_select
                .iter()
                .any(|option| option.value == activity);
            if known {
                page.signup_form.activity = Some(activity.to_string());
            }
            known
        })
    }

    /// Submits the signup form's current field values.
    pub async fn submit_signup_form(&self) -> bool {
        let (activity, email) = self.view.update(|page| {
            (
                page.signup_form.activity.clone().unwrap_or_default(),
                page.signup_form.email.clone(),
            )
        });
        self.signup(&activity, &email).await
    }
}
