//! Command handler layer.
//!
//! This module owns CLI-oriented orchestration and output wiring.
//!
//! ## Files
//! - `view.rs` — show/pages/status/validate (read-only rendering).
//! - `session.rs` — nav/sidebar/theme (state-changing events).
//! - `contact.rs` — contact validate/format/email.
//!
//! ## Principles
//! - Parse/match CLI inputs here.
//! - Delegate business logic to `services/*`.
//! - Keep behavior and output schema stable.

pub mod contact;
pub mod session;
pub mod view;

pub use contact::handle_contact_commands;
pub use session::handle_session_commands;
pub use view::handle_view_commands;
