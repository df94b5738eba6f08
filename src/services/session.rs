//! UI events and the single state-update function. Every interaction the
//! presentation layer offers (navigation, sidebar, theme, contact
//! submission) is one `Event` consumed by `apply`; no other code mutates
//! `UiState`.

use crate::cli::{Page, Theme};
use crate::domain::models::{ContactRequest, UiState};
use crate::services::intake::Submission;

#[derive(Debug, Clone)]
pub enum Event {
    NavigateTo(Page),
    ToggleSidebar,
    ToggleCollapse,
    ToggleTheme,
    SubmitContact(ContactRequest),
}

#[derive(Debug)]
pub enum Applied {
    StateChanged,
    /// Contact submissions never touch the session state; the settled
    /// submission is handed back to the caller instead.
    Submission(Submission),
}

pub fn apply(state: &mut UiState, event: Event) -> Applied {
    match event {
        Event::NavigateTo(page) => {
            state.page = page;
            Applied::StateChanged
        }
        Event::ToggleSidebar => {
            state.sidebar_open = !state.sidebar_open;
            Applied::StateChanged
        }
        Event::ToggleCollapse => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            Applied::StateChanged
        }
        Event::ToggleTheme => {
            state.theme = match state.theme {
                Theme::Light => Theme::Dark,
                Theme::Dark => Theme::Light,
            };
            Applied::StateChanged
        }
        Event::SubmitContact(request) => {
            Applied::Submission(Submission::idle().start().settle(&request))
        }
    }
}
