//! # Mergington (activities sign-up front-end)
//!
//! `mergington` drives the Mergington High School extracurricular activities
//! page. It fetches activities from the school API, renders them into a page
//! model, and lets visitors sign up by email. Teachers can log in to remove
//! participants.
//!
//! ## Session
//!
//! The only durable state is the teacher's bearer token, stored under the
//! `auth_token` key of a [`common::storage::LocalStorage`]. On start the
//! controller restores the token and validates it against `/auth/me`; an
//! invalid token is removed and the page falls back to the anonymous view.
//!
//! ## Rendering
//!
//! Every data change re-fetches `/activities` and rebuilds the activity cards
//! and the activity select from scratch. Removal controls are only rendered
//! while a teacher session is active.

pub mod cli;
pub mod common;
pub mod components;
pub mod controller;
pub mod features;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

pub use controller::Controller;
