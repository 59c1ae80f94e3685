use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use vopher_core::{Config, UiKind};

#[derive(Clone, Debug, Parser)]
#[command(
    name = "vopher",
    version = env!("CARGO_PKG_VERSION"),
    about = "acquire vim-plugins the gopher-way",
    long_about = None
)]
pub struct App {
    /// Path to the list of plugins
    #[arg(short = 'f', long = "file", env = "VOPHER_FILE", default_value = "vopher.list")]
    pub file: PathBuf,

    /// Directory to extract the plugins to
    #[arg(long, env = "VOPHER_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// If already present: refetch plugins. Required by `clean`
    #[arg(long)]
    pub force: bool,

    /// Progress display: oneline, simple or quiet
    #[arg(long, default_value_t = UiKind::OneLine)]
    pub ui: UiKind,

    /// Increase logging verbosity (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub action: Option<Action>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Subcommand)]
pub enum Action {
    /// Acquire the plugins from the list (default)
    #[command(visible_aliases = ["u", "up"])]
    Update,
    /// Remove the plugins of the list from the directory
    #[command(visible_aliases = ["c", "cl"])]
    Clean,
    /// Print a sample plugin list to stdout
    Sample,
}

impl App {
    pub fn action(&self) -> Action { self.action.unwrap_or(Action::Update) }

    pub fn config(&self) -> Config {
        Config {
            dir:   self.dir.clone(),
            force: self.force,
            ui:    self.ui,
        }
    }
}
