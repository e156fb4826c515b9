//! Auth feature module covering teacher login, token persistence, and session
//! hydration. It keeps authentication logic out of the page controller and
//! must stay aligned with the API's bearer-token contract. This module touches
//! credentials; never log passwords or token material.

pub mod client;
pub mod state;
pub mod token;
pub mod types;

pub use state::{AuthContext, Session};
pub use types::Teacher;
