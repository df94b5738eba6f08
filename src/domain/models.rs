use crate::cli::{Page, Theme};
use serde::{Deserialize, Serialize};

fn default_page() -> Page {
    Page::Home
}

fn default_theme() -> Theme {
    Theme::Light
}

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct JsonErr {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// Session state of the presentation layer. A plain value with a
/// caller-defined lifecycle: loaded on start, saved after a mutating
/// event, defaults when no state file exists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiState {
    #[serde(default = "default_page")]
    pub page: Page,
    #[serde(default)]
    pub sidebar_open: bool,
    #[serde(default)]
    pub sidebar_collapsed: bool,
    #[serde(default = "default_theme")]
    pub theme: Theme,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            page: default_page(),
            sidebar_open: false,
            sidebar_collapsed: false,
            theme: default_theme(),
        }
    }
}

/// One user-supplied contact request, held for the duration of a single
/// submission. `subject` empty means absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct SubmitReport {
    pub status: String,
    pub message: String,
    pub transcript: String,
    pub copied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_error: Option<String>,
}

#[derive(Serialize)]
pub struct EmailReport {
    pub email: String,
    pub copied: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub copy_error: Option<String>,
}
