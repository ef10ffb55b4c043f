//! Command handlers, one module per subcommand.

pub mod catalog;
pub mod completions;
pub mod config;
pub mod init;
pub mod quote;
pub mod room;
pub mod session;

use crate::{
    cli::{OutputFormat, ViewFormat},
    output::OutputManager,
};

/// An explicit `--format` wins; otherwise `--output-format json` selects JSON.
fn view_format(requested: Option<ViewFormat>, output: &OutputManager) -> ViewFormat {
    match requested {
        Some(format) => format,
        None if output.format() == OutputFormat::Json => ViewFormat::Json,
        None => ViewFormat::Table,
    }
}
