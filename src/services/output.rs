use crate::domain::models::{ErrorBody, JsonErr, JsonOut};
use crate::profile::ProfileError;
use crate::services::clipboard::ClipboardError;
use crate::services::intake::IntakeError;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

pub fn print_one<T: Serialize>(
    json: bool,
    data: T,
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        println!("{}", row(&data));
    }
    Ok(())
}

/// Failure envelope. JSON mode prints `{ok:false, error:{code, message}}`
/// on stdout; text mode writes the user-visible message to stderr.
pub fn print_error(json: bool, err: &anyhow::Error) {
    if json {
        let body = JsonErr {
            ok: false,
            error: ErrorBody {
                code: error_code(err).to_string(),
                message: err.to_string(),
            },
        };
        if let Ok(rendered) = serde_json::to_string_pretty(&body) {
            println!("{}", rendered);
        }
    } else {
        eprintln!("error: {}", err);
    }
}

fn error_code(err: &anyhow::Error) -> &'static str {
    if let Some(e) = err.downcast_ref::<IntakeError>() {
        return e.code();
    }
    if err.downcast_ref::<ClipboardError>().is_some() {
        return "CLIPBOARD_WRITE_FAILED";
    }
    if err.downcast_ref::<ProfileError>().is_some() {
        return "INVALID_PROFILE";
    }
    "ERROR"
}
