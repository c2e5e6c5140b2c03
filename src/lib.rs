pub use toolrow_mcp as mcp;

#[cfg(feature = "view")]
pub use toolrow_view as view;

pub use mcp::{Message, Source, Tool};

#[cfg(feature = "view")]
pub use view::{Context, Row, render};
