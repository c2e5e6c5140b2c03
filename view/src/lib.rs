pub use toolrow_mcp as mcp;

pub mod locale;
pub mod row;
pub mod transport;

mod context;
mod notifier;
#[cfg(feature = "stdio")]
mod stdio;

pub use context::Context;
pub use locale::Locale;
pub use notifier::Notifier;
pub use row::{Row, render};
#[cfg(feature = "stdio")]
pub use stdio::Stdio;
pub use transport::Transport;
