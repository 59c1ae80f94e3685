use std::path::PathBuf;

use crate::ui::UiKind;

/// Settings for one run, built once at startup and passed down.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Plugins are extracted to `<dir>/<name>`.
    pub dir:   PathBuf,
    /// Refetch plugins whose folder already exists; required by `clean`.
    pub force: bool,
    pub ui:    UiKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dir:   PathBuf::from("."),
            force: false,
            ui:    UiKind::default(),
        }
    }
}
