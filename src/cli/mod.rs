//! Interactive host shell that drives a [`crate::chart::PieChartView`] from the terminal.

pub mod commands;
pub mod context;
pub mod detail_view;
pub mod errors;
pub mod formatting;
pub mod output;
pub mod registry;
mod shell;

pub use context::{CliMode, ShellContext};
pub use errors::{CliError, CommandError};
pub use shell::{run_cli, SCRIPT_MODE_ENV};
