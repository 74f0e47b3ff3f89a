//! # Command-Line Interface
//!
//! ## Commands
//!
//! | Command | Purpose |
//! |---------|---------|
//! | `scan [ROOT]` | Walk repositories and write the inventory JSON (default) |
//! | `validate [PATH]` | Read an inventory and exercise the standard queries |
//! | `config` | Show the effective configuration |
//!
//! Running `docinv` with no command performs a scan with configured settings.
//!
//! ## Output Formats
//!
//! All commands support `--format`:
//! - `text` (default) - Human-readable output
//! - `json` - Machine-parseable JSON
//!
//! Use `--verbose` (or `-v`) for per-file diagnostics on stderr.
//!
//! ## Exit Status
//!
//! Non-zero only when the scan root is missing, or the inventory given to
//! `validate` is missing or unparsable. Per-file problems are warnings.

mod app;
mod output;
mod scan_cmd;
mod validate_cmd;

pub use app::{run, Cli, Commands};
pub use output::{Output, OutputFormat};
pub use scan_cmd::ScanArgs;
pub use validate_cmd::ValidateArgs;
