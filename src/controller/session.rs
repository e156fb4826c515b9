use super::Controller;
use crate::components::AuthBar;
use crate::features::auth::{client, token};
use secrecy::{ExposeSecret, SecretString};
use tracing::{error, info, warn};

pub const LOGIN_REQUIRED: &str = "Please enter both email and password";
pub const LOGIN_FAILED: &str = "Login failed";
pub const LOGIN_RETRY: &str = "Login failed. Please try again.";

impl Controller {
    /// Validates the persisted token, if any. Every failure ends anonymous
    /// with the token removed from storage.
    pub async fn restore_session(&self) {
        let Some(token) = token::load_token(self.storage.as_ref()) else {
            self.refresh_auth_bar();
            return;
        };

        match client::fetch_current_teacher(&self.api, &token).await {
            Ok(teacher) => {
                info!("session restored for {}", teacher.email);
                self.auth.set_session(token, teacher);
            }
            Err(err) if err.is_transport() => {
                error!("Auth check failed: {err}");
                self.forget_session();
            }
            Err(err) => {
                warn!("persisted token rejected: {err}");
                self.forget_session();
            }
        }

        self.refresh_auth_bar();
    }

    /// Exchanges credentials for a session. Returns `true` when signed in.
    pub async fn login(&self, email: &str, password: &SecretString) -> bool {
        let email = email.trim();
        if email.is_empty() || password.expose_secret().is_empty() {
            self.prompt.alert(LOGIN_REQUIRED);
            return false;
        }

        match client::login(&self.api, email, password).await {
            Ok(response) => {
                if let Err(err) = token::persist_token(self.storage.as_ref(), &response.access_token)
                {
                    warn!("Failed to persist token: {err}");
                }
                info!("teacher {} logged in", response.teacher.email);
                self.auth.set_session(response.access_token, response.teacher);
                self.refresh_auth_bar();
                self.hide_login_form();
                // Reveals the removal controls.
                self.render_activities().await;
                true
            }
            Err(err) if err.is_transport() => {
                error!("Login error: {err}");
                self.prompt.alert(LOGIN_RETRY);
                false
            }
            Err(err) => {
                self.prompt.alert(&err.user_message(LOGIN_FAILED));
                false
            }
        }
    }

    /// Drops the session locally; the server is not told.
    pub async fn logout(&self) {
        self.forget_session();
        self.refresh_auth_bar();
        // Hides the removal controls.
        self.render_activities().await;
    }

    /// Logs out a teacher, otherwise opens the login form.
    pub async fn click_user_icon(&self) {
        if self.auth.is_authenticated() {
            self.logout().await;
        } else {
            self.show_login_form();
        }
    }

    pub fn show_login_form(&self) {
        self.view.update(|page| page.login_form.open());
    }

    pub fn hide_login_form(&self) {
        self.view.update(|page| page.login_form.close());
    }

    pub fn set_login_email(&self, email: &str) {
        self.view.update(|page| page.login_form.email = email.to_string());
    }

    pub fn set_login_password(&self, password: SecretString) {
        self.view.update(|page| page.login_form.password = password);
    }

    /// Submits the login form's current field values.
    pub async fn submit_login_form(&self) -> bool {
        let (email, password) = self.view.update(|page| {
            (
                page.login_form.email.clone(),
                page.login_form.password.clone(),
            )
        });
        self.login(&email, &password).await
    }

    fn forget_session(&self) {
        self.auth.clear_session();
        if let Err(err) = token::forget_token(self.storage.as_ref()) {
            warn!("Failed to remove persisted token: {err}");
        }
    }

    fn refresh_auth_bar(&self) {
        let teacher = self.auth.teacher();
        self.view
            .update(|page| page.auth_bar = AuthBar::for_teacher(teacher.as_ref()));
    }
}
