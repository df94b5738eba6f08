use crate::cli::{Cli, Commands, SidebarCommands, ThemeCommands};
use crate::domain::models::UiState;
use crate::services::output::print_one;
use crate::services::session::{apply, Event};
use crate::services::storage::save_state;

pub fn handle_session_commands(cli: &Cli, state: &mut UiState) -> anyhow::Result<bool> {
    let event = match &cli.command {
        Commands::Nav { page } => Event::NavigateTo(*page),
        Commands::Sidebar { command } => match command {
            SidebarCommands::Toggle => Event::ToggleSidebar,
            SidebarCommands::Collapse => Event::ToggleCollapse,
        },
        Commands::Theme { command } => match command {
            ThemeCommands::Toggle => Event::ToggleTheme,
        },
        _ => return Ok(false),
    };

    apply(state, event);
    save_state(state)?;
    print_one(cli.json, &*state, |s| {
        format!(
            "page={} sidebar={} collapsed={} theme={:?}",
            s.page.id(),
            if s.sidebar_open { "open" } else { "closed" },
            s.sidebar_collapsed,
            s.theme
        )
        .to_lowercase()
    })?;
    Ok(true)
}
