use clap::Parser;

mod cli;
mod commands;
mod domain;
mod profile;
mod services;

use cli::Cli;
use services::clipboard::SystemClipboard;
use services::output::print_error;
use services::storage::load_state;

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        print_error(cli.json, &e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let profile = profile::load(cli.profile.as_deref())?;
    let mut state = load_state()?;
    let mut clipboard = SystemClipboard;

    if commands::handle_session_commands(cli, &mut state)? {
        return Ok(());
    }
    if commands::handle_view_commands(cli, &profile, &state)? {
        return Ok(());
    }
    if commands::handle_contact_commands(cli, &profile, &mut state, &mut clipboard)? {
        return Ok(());
    }
    anyhow::bail!("unhandled command")
}
