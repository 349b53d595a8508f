/// CLI command handlers
///
/// One handler per subcommand. Each takes the registry built by main and
/// prints its report to stdout; errors propagate back to main, which prints
/// them to stderr and exits non-zero.

pub mod create;
pub mod complete;
pub mod list;
pub mod analytics;

// Re-export handler functions for easy access
pub use create::*;
pub use complete::*;
pub use list::*;
pub use analytics::*;
