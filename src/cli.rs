use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Parser, Debug)]
#[command(name = "folio", version, about = "Likhon's portfolio, rendered in the terminal")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        help = "Load profile content from a JSON file instead of the bundled profile"
    )]
    pub profile: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render a portfolio section (defaults to the session's current page).
    Show {
        section: Option<Page>,
    },
    /// List the navigation entries.
    Pages,
    /// Switch the current page.
    Nav {
        page: Page,
    },
    Sidebar {
        #[command(subcommand)]
        command: SidebarCommands,
    },
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Print the session state.
    Status,
    /// Check profile content integrity.
    Validate,
    Contact {
        #[command(subcommand)]
        command: ContactCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum SidebarCommands {
    /// Open or close the sidebar.
    Toggle,
    /// Collapse or expand the sidebar.
    Collapse,
}

#[derive(Subcommand, Debug)]
pub enum ThemeCommands {
    /// Flip between light and dark.
    Toggle,
}

#[derive(Subcommand, Debug)]
pub enum ContactCommands {
    /// Validate a contact request without rendering it.
    Validate {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
    },
    /// Validate a contact request and print the copy-ready transcript.
    Format {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, default_value = "")]
        subject: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value_t = false, help = "Copy the transcript to the clipboard")]
        copy: bool,
    },
    /// Print the owner's contact email address.
    Email {
        #[arg(long, default_value_t = false, help = "Copy the address to the clipboard")]
        copy: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Page {
    Home,
    About,
    Experience,
    Education,
    Skills,
    Projects,
    Contact,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Experience,
        Page::Education,
        Page::Skills,
        Page::Projects,
        Page::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::About => "about",
            Page::Experience => "experience",
            Page::Education => "education",
            Page::Skills => "skills",
            Page::Projects => "projects",
            Page::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About",
            Page::Experience => "Experience",
            Page::Education => "Education",
            Page::Skills => "Skills",
            Page::Projects => "Projects",
            Page::Contact => "Contact",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}
