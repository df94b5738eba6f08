//! Fixed strings of the contact-intake contract. The transcript template
//! and user-visible status lines are part of the observable behavior, so
//! they live here rather than inline at the call sites.

/// Subject line used when the request carries none.
pub const DEFAULT_SUBJECT: &str = "Contact from Portfolio";

/// Trailing signature of every rendered transcript.
pub const TRANSCRIPT_SIGNATURE: &str = "Sent from Likhon's Portfolio Website";

pub const MSG_PROCESSING: &str = "Processing your message...";
pub const MSG_FORMATTED: &str =
    "Message formatted! Please copy the details below and send via your preferred method.";
pub const MSG_COPIED: &str =
    "Message copied to clipboard! You can now paste it in your email client.";
