pub mod message;
pub mod schema;
pub mod tool;

pub use message::{Address, Message};
pub use schema::Parameters;
pub use tool::{Setting, Source, Tool};

pub use bytes::Bytes;
pub use serde_json::Value;
