//! The page model: everything the visitor sees, rendered as text.

use super::{
    activity_card::{ActivityCard, SelectOption},
    alert::Message,
    auth_bar::{AuthBar, LoginForm},
};
use parking_lot::Mutex;
use std::{fmt, sync::Arc};

pub const LOAD_FAILED: &str = "Failed to load activities. Please try again later.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ActivityList {
    #[default]
    Loading,
    Ready(Vec<ActivityCard>),
    Failed(String),
}

impl ActivityList {
    #[must_use]
    pub fn cards(&self) -> &[ActivityCard] {
        match self {
            ActivityList::Ready(cards) => cards,
            ActivityList::Loading | ActivityList::Failed(_) => &[],
        }
    }

    #[must_use]
    pub fn card(&self, name: &str) -> Option<&ActivityCard> {
        self.cards().iter().find(|card| card.name == name)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub activity: Option<String>,
}

impl SignupForm {
    pub fn reset(&mut self) {
        self.email.clear();
        self.activity = None;
    }
}

#[derive(Clone, Debug, Default)]
pub struct Page {
    pub auth_bar: AuthBar,
    pub login_form: LoginForm,
    pub activities: ActivityList,
    pub activity_select: Vec<SelectOption>,
    pub signup_form: SignupForm,
    /// `None` while the message area is hidden.
    pub message: Option<Message>,
}

impl Page {
    /// Replaces the list and the select options wholesale.
    pub fn replace_activities(&mut self, cards: Vec<ActivityCard>, options: Vec<SelectOption>) {
        if let Some(selected) = &self.signup_form.activity {
            if !options.iter().any(|option| &option.value == selected) {
                self.signup_form.activity = None;
            }
        }
        self.activities = ActivityList::Ready(cards);
        self.activity_select = options;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Mergington High School  {}", self.auth_bar)?;
        writeln!(f, "Extracurricular Activities")?;

        if self.login_form.visible {
            writeln!(f)?;
            write!(f, "{}", self.login_form)?;
        }

        if let Some(message) = &self.message {
            writeln!(f)?;
            writeln!(f, "{message}")?;
        }

        writeln!(f)?;
        writeln!(f, "Available Activities")?;
        match &self.activities {
            ActivityList::Loading => writeln!(f, "Loading activities...")?,
            ActivityList::Failed(message) => writeln!(f, "{message}")?,
            ActivityList::Ready(cards) => {
                for card in cards {
                    writeln!(f)?;
                    write!(f, "{card}")?;
                }
            }
        }

        writeln!(f)?;
        writeln!(f, "Sign Up for an Activity")?;
        writeln!(f, "  -- Select an activity --")?;
        for option in &self.activity_select {
            let marker = if self.signup_form.activity.as_deref() == Some(option.value.as_str()) {
                "*"
            } else {
                " "
            };
            writeln!(f, " {marker} {}", option.label)?;
        }
        Ok(())
    }
}

/// Shared handle to the page. Locks are held only for the duration of a closure.
#[derive(Clone, Debug, Default)]
pub struct ViewState {
    page: Arc<Mutex<Page>>,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update<R>(&self, change: impl FnOnce(&mut Page) -> R) -> R {
        let mut page = self.page.lock();
        change(&mut *page)
    }

    #[must_use]
    pub fn snapshot(&self) -> Page {
        self.page.lock().clone()
    }
}
