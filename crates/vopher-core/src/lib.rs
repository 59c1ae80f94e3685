//! The vopher driver: plugin lists in, extracted plugin folders out.
//!
//! - [`plugin`] parses the plugin list into [`Plugin`] descriptors
//! - [`pipeline`] fetches, classifies and extracts every plugin concurrently
//! - [`ui`] holds the [`JobUi`] observer contract and its renderers
//! - [`clean`] removes plugin folders again

pub mod clean;
pub mod config;
pub mod error;
pub mod pipeline;
pub mod plugin;
pub mod resolve;
pub mod ui;

pub use clean::{CleanEntry, CleanOutcome, clean};
pub use config::Config;
pub use error::{Error, ParseError, ParseErrorKind, PipelineError, Result};
pub use pipeline::{Pipeline, UpdateReport};
pub use plugin::{Plugin, parse_list, read_list};
pub use ui::{JobUi, UiKind, new_ui};
