pub mod client;
pub mod events;
pub mod types;

pub use client::ApiClient;
pub use events::EventSink;
pub use types::*;
