//! Page controller. Owns the session context, the page model, and the API
//! client, and exposes the page's operations:
//!
//! - session: restore, login, logout, login form toggling
//! - render: fetch activities and rebuild the list and select
//! - mutations: signup and teacher-only unregister
//!
//! Operations take `&self` and may run concurrently. Locks on shared state are
//! never held across an await; the last render to be applied wins, and a render
//! older than the one on screen is discarded.

mod mutations;
mod render;
mod session;

use crate::common::{ApiClient, AppConfig, AppError, LocalStorage};
use crate::components::{MessageArea, Page, Prompt, ViewState};
use crate::features::auth::AuthContext;
use std::sync::{Arc, atomic::AtomicU64};

pub use mutations::{
    ACTIVITY_REQUIRED, GENERIC_ERROR, INVALID_EMAIL, SIGNUP_FAILED, TEACHERS_ONLY,
    UNREGISTER_FAILED,
};
pub use session::{LOGIN_FAILED, LOGIN_REQUIRED, LOGIN_RETRY};

pub struct Controller {
    api: ApiClient,
    storage: Arc<dyn LocalStorage>,
    prompt: Arc<dyn Prompt>,
    auth: AuthContext,
    view: ViewState,
    messages: MessageArea,
    renders_started: AtomicU64,
    render_applied: AtomicU64,
}

impl Controller {
    /// # Errors
    /// Returns `AppError::Config` if the HTTP client cannot be built.
    pub fn new(
        config: &AppConfig,
        storage: Arc<dyn LocalStorage>,
        prompt: Arc<dyn Prompt>,
    ) -> Result<Self, AppError> {
        let view = ViewState::new();
        Ok(Self {
            api: ApiClient::new(config)?,
            storage,
            prompt,
            auth: AuthContext::new(),
            messages: MessageArea::new(view.clone(), config.message_ttl),
            view,
            renders_started: AtomicU64::new(0),
            render_applied: AtomicU64::new(0),
        })
    }

    /// Restores any persisted session, then renders the activities.
    pub async fn bootstrap(&self) {
        self.restore_session().await;
        self.render_activities().await;
    }

    #[must_use]
    pub fn page(&self) -> Page {
        self.view.snapshot()
    }

    #[must_use]
    pub const fn auth(&self) -> &AuthContext {
        &self.auth
    }
}

impl std::fmt::Debug for Controller {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Controller")
            .field("api", &self.api.base_url().as_str())
            .field("auth", &self.auth)
            .finish_non_exhaustive()
    }
}
