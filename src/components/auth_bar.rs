//! Auth bar (user icon and greeting) and the teacher login form.

use crate::features::auth::Teacher;
use secrecy::SecretString;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserIcon {
    /// Anonymous; clicking opens the login form.
    #[default]
    Login,
    /// Teacher signed in; clicking logs out.
    Logout,
}

impl UserIcon {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            UserIcon::Login => "👤",
            UserIcon::Logout => "🔓",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthBar {
    /// `None` while the user info is hidden.
    pub user_info: Option<String>,
    pub icon: UserIcon,
}

impl AuthBar {
    #[must_use]
    pub fn for_teacher(teacher: Option<&Teacher>) -> Self {
        match teacher {
            Some(teacher) => Self {
                user_info: Some(format!("Welcome, {}", teacher.name)),
                icon: UserIcon::Logout,
            },
            None => Self::default(),
        }
    }
}

impl fmt::Display for AuthBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.user_info {
            Some(info) => write!(f, "{info} [{}]", self.icon.symbol()),
            None => write!(f, "[{}]", self.icon.symbol()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Debug, Default)]
pub struct LoginForm {
    pub visible: bool,
    pub email: String,
    pub password: SecretString,
    pub focus: Option<LoginField>,
}

impl LoginForm {
    /// Shows the form with the email field focused.
    pub fn open(&mut self) {
        self.visible = true;
        self.focus = Some(LoginField::Email);
    }

    /// Hides the form and clears both fields.
    pub fn close(&mut self) {
        self.visible = false;
        self.email.clear();
        self.password = SecretString::default();
        self.focus = None;
    }
}

impl fmt::Display for LoginForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use secrecy::ExposeSecret;

        let cursor = |field: LoginField| if self.focus == Some(field) { ">" } else { " " };
        let masked = "*".repeat(self.password.expose_secret().chars().count());

        writeln!(f, "Teacher Login")?;
        writeln!(f, "{} Email: {}", cursor(LoginField::Email), self.email)?;
        writeln!(f, "{} Password: {masked}", cursor(LoginField::Password))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    #[test]
    fn auth_bar_reflects_teacher() {
        let teacher = Teacher {
            email: "hughes@mergington.edu".to_string(),
            name: "Ms. Hughes".to_string(),
            role: None,
        };
        let bar = AuthBar::for_teacher(Some(&teacher));
        assert_eq!(bar.user_info.as_deref(), Some("Welcome, Ms. Hughes"));
        assert_eq!(bar.icon, UserIcon::Logout);
        assert_eq!(bar.to_string(), "Welcome, Ms. Hughes [🔓]");

        let bar = AuthBar::for_teacher(None);
        assert_eq!(bar.user_info, None);
        assert_eq!(bar.icon, UserIcon::Login);
        assert_eq!(bar.to_string(), "[👤]");
    }

    #[test]
    fn login_form_close_clears_fields() {
        let mut form = LoginForm::default();
        form.open();
        assert!(form.visible);
        assert_eq!(form.focus, Some(LoginField::Email));

        form.email = "hughes@mergington.edu".to_string();
        form.password = SecretString::from("secret".to_string());
        assert!(form.to_string().contains("Password: ******"));
        assert!(!form.to_string().contains("secret"));

        form.close();
        assert!(!form.visible);
        assert!(form.email.is_empty());
        assert!(form.password.expose_secret().is_empty());
        assert_eq!(form.focus, None);
    }
}
