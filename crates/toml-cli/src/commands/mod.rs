//! Command handlers. One module per subcommand.
//!
//! Handlers translate arguments into service calls and print results. No
//! business logic lives here.

pub mod check;
pub mod completions;
pub mod config;
pub mod formula;
pub mod get;
pub mod set;
