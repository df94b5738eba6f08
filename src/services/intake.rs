//! Contact intake: validates a request and renders it into a fixed-format
//! transcript for manual copy. Pure functions over immutable input; no
//! network or disk I/O. The transcript is plain text, never markup, so no
//! escaping or truncation is applied.

use crate::domain::constants::{
    DEFAULT_SUBJECT, MSG_FORMATTED, MSG_PROCESSING, TRANSCRIPT_SIGNATURE,
};
use crate::domain::models::ContactRequest;
use serde::Serialize;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IntakeError {
    #[error("Please fill in all required fields.")]
    MissingRequiredField,
    #[error("Please enter a valid email address.")]
    InvalidEmailFormat,
}

impl IntakeError {
    pub fn code(&self) -> &'static str {
        match self {
            IntakeError::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            IntakeError::InvalidEmailFormat => "INVALID_EMAIL_FORMAT",
        }
    }
}

/// Checks run in a fixed order, short-circuiting on the first failure:
/// required fields first, email shape last.
pub fn validate(request: &ContactRequest) -> Result<(), IntakeError> {
    if request.name.is_empty() || request.email.is_empty() || request.message.is_empty() {
        return Err(IntakeError::MissingRequiredField);
    }
    if !email_shape_ok(&request.email) {
        return Err(IntakeError::InvalidEmailFormat);
    }
    Ok(())
}

/// Syntactic sanity check only, equivalent to `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
/// Says nothing about deliverability.
fn email_shape_ok(email: &str) -> bool {
    let mut parts = email.split('@');
    let local = parts.next().unwrap_or("");
    let domain = match parts.next() {
        Some(d) => d,
        None => return false,
    };
    if parts.next().is_some() {
        return false;
    }
    if local.is_empty() || local.chars().any(char::is_whitespace) {
        return false;
    }
    if domain.chars().any(char::is_whitespace) {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Deterministic transcript rendering. An empty subject falls back to the
/// fixed label; everything else is interpolated verbatim.
pub fn render(request: &ContactRequest) -> String {
    let subject = if request.subject.is_empty() {
        DEFAULT_SUBJECT
    } else {
        request.subject.as_str()
    };
    format!(
        "Subject: {}\n\nFrom: {}\nEmail: {}\n\nMessage:\n{}\n\n---\n{}",
        subject, request.name, request.email, request.message, TRANSCRIPT_SIGNATURE
    )
}

pub fn submit(request: &ContactRequest) -> Result<String, IntakeError> {
    validate(request)?;
    Ok(render(request))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionPhase {
    Idle,
    Processing,
    Success,
    Error,
}

/// One submission's lifecycle: `Idle -> Processing -> {Success, Error}`.
/// Success and Error are terminal; a new submission starts over at Idle.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub phase: SubmissionPhase,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcript: Option<String>,
    #[serde(skip)]
    pub error: Option<IntakeError>,
}

impl Submission {
    pub fn idle() -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            message: String::new(),
            transcript: None,
            error: None,
        }
    }

    pub fn start(self) -> Self {
        Self {
            phase: SubmissionPhase::Processing,
            message: MSG_PROCESSING.to_string(),
            transcript: None,
            error: None,
        }
    }

    pub fn settle(self, request: &ContactRequest) -> Self {
        match submit(request) {
            Ok(transcript) => Self {
                phase: SubmissionPhase::Success,
                message: MSG_FORMATTED.to_string(),
                transcript: Some(transcript),
                error: None,
            },
            Err(e) => Self {
                phase: SubmissionPhase::Error,
                message: e.to_string(),
                transcript: None,
                error: Some(e),
            },
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Success | SubmissionPhase::Error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{render, submit, validate, IntakeError, Submission, SubmissionPhase};
    use crate::domain::models::ContactRequest;

    fn request(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
        ContactRequest {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn valid_request_renders_exact_transcript() {
        let req = request("Jane Doe", "jane@example.com", "", "Hi there");
        assert_eq!(validate(&req), Ok(()));
        let transcript = submit(&req).expect("valid request");
        assert_eq!(
            transcript,
            "Subject: Contact from Portfolio\n\nFrom: Jane Doe\nEmail: jane@example.com\n\nMessage:\nHi there\n\n---\nSent from Likhon's Portfolio Website"
        );
    }

    #[test]
    fn render_is_deterministic() {
        let req = request("Jane", "jane@example.com", "Hello", "Hi");
        assert_eq!(render(&req), render(&req));
    }

    #[test]
    fn non_empty_subject_is_used_verbatim() {
        let req = request("Jane", "jane@example.com", "Hello", "Hi");
        assert!(render(&req).starts_with("Subject: Hello\n"));
    }

    #[test]
    fn empty_required_field_fails_regardless_of_the_rest() {
        let missing = [
            request("", "jane@example.com", "", "Hi"),
            request("Jane", "", "X", "Hi"),
            request("Jane", "jane@example.com", "X", ""),
            request("", "", "", ""),
        ];
        for req in missing {
            assert_eq!(validate(&req), Err(IntakeError::MissingRequiredField));
            assert_eq!(
                validate(&req).unwrap_err().to_string(),
                "Please fill in all required fields."
            );
        }
    }

    #[test]
    fn empty_fields_take_precedence_over_email_shape() {
        // name empty AND email malformed: the required-field check wins.
        let req = request("", "not-an-email", "", "Hi");
        assert_eq!(validate(&req), Err(IntakeError::MissingRequiredField));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        let bad = [
            "jane@@bad",
            "no-at-sign",
            "jane@nodot",
            "jane@.com",
            "jane@host.",
            "@host.com",
            "jane @host.com",
            "jane@ho st.com",
        ];
        for email in bad {
            let req = request("Jane", email, "X", "Hi");
            assert_eq!(
                validate(&req),
                Err(IntakeError::InvalidEmailFormat),
                "expected {email:?} to be rejected"
            );
            assert_eq!(
                validate(&req).unwrap_err().to_string(),
                "Please enter a valid email address."
            );
        }
    }

    #[test]
    fn plausible_emails_pass_the_shape_check() {
        for email in ["jane@example.com", "a@b.c", "x.y@sub.example.co"] {
            let req = request("Jane", email, "", "Hi");
            assert_eq!(validate(&req), Ok(()), "expected {email:?} to pass");
        }
    }

    #[test]
    fn submission_walks_idle_processing_success() {
        let req = request("Jane Doe", "jane@example.com", "", "Hi there");
        let sub = Submission::idle();
        assert_eq!(sub.phase, SubmissionPhase::Idle);
        assert!(!sub.is_terminal());

        let sub = sub.start();
        assert_eq!(sub.phase, SubmissionPhase::Processing);
        assert_eq!(sub.message, "Processing your message...");

        let sub = sub.settle(&req);
        assert_eq!(sub.phase, SubmissionPhase::Success);
        assert!(sub.is_terminal());
        assert!(sub.transcript.is_some());
        assert_eq!(
            sub.message,
            "Message formatted! Please copy the details below and send via your preferred method."
        );
    }

    #[test]
    fn submission_settles_to_error_on_invalid_input() {
        let req = request("Jane", "jane@@bad", "X", "Hi");
        let sub = Submission::idle().start().settle(&req);
        assert_eq!(sub.phase, SubmissionPhase::Error);
        assert!(sub.is_terminal());
        assert_eq!(sub.transcript, None);
        assert_eq!(sub.message, "Please enter a valid email address.");
    }
}
