//! Message area for success and error banners. A banner hides itself after the
//! configured time-to-live; showing a new banner supersedes the old banner's
//! timer, so a later message is never hidden early.

use super::page::ViewState;
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
    time::Duration,
};
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub kind: AlertKind,
    pub text: String,
    id: u64,
}

impl Message {
    #[must_use]
    pub fn new(kind: AlertKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            id: 0,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = match self.kind {
            AlertKind::Success => "✔",
            AlertKind::Error => "✖",
        };
        write!(f, "{marker} {}", self.text)
    }
}

#[derive(Clone, Debug)]
pub struct MessageArea {
    view: ViewState,
    next_id: Arc<AtomicU64>,
    ttl: Duration,
}

impl MessageArea {
    #[must_use]
    pub fn new(view: ViewState, ttl: Duration) -> Self {
        Self {
            view,
            next_id: Arc::new(AtomicU64::new(1)),
            ttl,
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(AlertKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(AlertKind::Error, text.into());
    }

    /// Shows a banner and schedules its dismissal. Must run inside a tokio runtime.
    pub fn show(&self, kind: AlertKind, text: String) {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.view.update(|page| {
            page.message = Some(Message { kind, text, id });
        });

        let view = self.view.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            view.update(|page| {
                if page.message.as_ref().is_some_and(|message| message.id == id) {
                    debug!("message {id} expired");
                    page.message = None;
                }
            });
        });
    }
}
