//! Service layer containing business logic and side-effect helpers.
//!
//! ## Service map
//! - `intake.rs` — contact request validation, transcript rendering,
//!   submission lifecycle.
//! - `session.rs` — UI events and the single state-update function.
//! - `clipboard.rs` — clipboard capability seam + system implementation.
//! - `storage.rs` — session state persistence.
//! - `output.rs` — JSON/text output helpers.
//!
//! ## Conventions
//! - Prefer pure helpers where possible.
//! - Side effects should be explicit and localized.
//! - Keep command handlers thin; delegate to services.

pub mod clipboard;
pub mod intake;
pub mod output;
pub mod session;
pub mod storage;
