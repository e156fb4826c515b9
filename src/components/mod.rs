//! Page building blocks: the page model, activity cards, the auth bar and
//! login form, the message area, and blocking prompts.

pub mod activity_card;
pub mod alert;
pub mod auth_bar;
pub mod page;
pub mod prompt;

pub use activity_card::{ActivityCard, ParticipantRow, RemoveControl, SelectOption};
pub use alert::{AlertKind, Message, MessageArea};
pub use auth_bar::{AuthBar, LoginField, LoginForm, UserIcon};
pub use page::{ActivityList, Page, SignupForm, ViewState};
pub use prompt::{Prompt, TerminalPrompt};
