use crate::cli::{Cli, Commands, ContactCommands};
use crate::domain::constants::{MSG_COPIED, MSG_FORMATTED};
use crate::domain::models::{ContactRequest, EmailReport, JsonOut, SubmitReport, UiState};
use crate::profile::Profile;
use crate::services::clipboard::Clipboard;
use crate::services::intake;
use crate::services::output::print_one;
use crate::services::session::{apply, Applied, Event};

pub fn handle_contact_commands(
    cli: &Cli,
    profile: &Profile,
    state: &mut UiState,
    clipboard: &mut dyn Clipboard,
) -> anyhow::Result<bool> {
    let Commands::Contact { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ContactCommands::Validate {
            name,
            email,
            subject,
            message,
        } => {
            let request = request_from(name, email, subject, message);
            intake::validate(&request).map_err(anyhow::Error::new)?;
            print_one(cli.json, "valid", |_| "contact request valid".to_string())?;
        }
        ContactCommands::Format {
            name,
            email,
            subject,
            message,
            copy,
        } => {
            let request = request_from(name, email, subject, message);
            let report = format_submission(state, request, *copy, clipboard)?;
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                // Keep stdout copy-paste clean; status goes to stderr.
                println!("{}", report.transcript);
                eprintln!("{}", report.message);
                if let Some(reason) = &report.copy_error {
                    eprintln!("warning: {}", reason);
                }
            }
        }
        ContactCommands::Email { copy } => {
            let report = email_report(profile, *copy, clipboard);
            if !cli.json {
                if let Some(reason) = &report.copy_error {
                    eprintln!("warning: {}", reason);
                }
            }
            print_one(cli.json, &report, |r| r.email.clone())?;
        }
    }

    Ok(true)
}

/// Runs one submission through the event pipeline and, on success,
/// optionally copies the transcript. A clipboard failure is never fatal:
/// the transcript is already in the report, so the failure is carried as
/// `copied:false` plus the host's reason.
fn format_submission(
    state: &mut UiState,
    request: ContactRequest,
    copy: bool,
    clipboard: &mut dyn Clipboard,
) -> anyhow::Result<SubmitReport> {
    let submission = match apply(state, Event::SubmitContact(request)) {
        Applied::Submission(submission) => submission,
        Applied::StateChanged => {
            anyhow::bail!("contact submission must not change session state")
        }
    };
    if let Some(err) = submission.error {
        return Err(err.into());
    }
    let transcript = submission.transcript.unwrap_or_default();

    let mut copied = false;
    let mut copy_error = None;
    if copy {
        match clipboard.write_text(&transcript) {
            Ok(()) => copied = true,
            Err(e) => copy_error = Some(e.to_string()),
        }
    }

    Ok(SubmitReport {
        status: "success".to_string(),
        message: if copied {
            MSG_COPIED.to_string()
        } else {
            MSG_FORMATTED.to_string()
        },
        transcript,
        copied,
        copy_error,
    })
}

fn email_report(profile: &Profile, copy: bool, clipboard: &mut dyn Clipboard) -> EmailReport {
    let mut copied = false;
    let mut copy_error = None;
    if copy {
        match clipboard.write_text(&profile.email) {
            Ok(()) => copied = true,
            Err(e) => copy_error = Some(e.to_string()),
        }
    }
    EmailReport {
        email: profile.email.clone(),
        copied,
        copy_error,
    }
}

fn request_from(name: &str, email: &str, subject: &str, message: &str) -> ContactRequest {
    ContactRequest {
        name: name.to_string(),
        email: email.to_string(),
        subject: subject.to_string(),
        message: message.to_string(),
    }
}
