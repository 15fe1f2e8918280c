//! kvsync command line
//!
//! Opens one named store over a SQLite file (or a throwaway in-memory
//! substrate) and runs a single command through the sync dispatcher.

pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod session;

pub use args::{Args, Command};
pub use config::{Backend, CliConfig};
pub use error::{CliError, Result};
pub use session::{Session, Substrate};
