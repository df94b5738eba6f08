//! Shared data model layer (structs/constants only).
//!
//! ## Purpose
//! - Keep session state and report structs in one place.
//! - Make JSON output schema changes explicit and reviewable.
//!
//! ## Files
//! - `models.rs` — session state, output envelope, report structs.
//! - `constants.rs` — transcript template fragments and status messages.
//!
//! ## Rule of thumb
//! Domain types should be data-only: no filesystem/clipboard side effects.

pub mod constants;
pub mod models;
