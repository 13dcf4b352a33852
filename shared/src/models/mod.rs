//! Data models
//!
//! Shared between the floor engine and frontend (via the draft store API).
//! All wire forms are camelCase JSON; timestamps are Unix milliseconds (`i64`).

pub mod canvas;
pub mod layout;
pub mod table;
pub mod table_state;
pub mod zone;

// Re-exports
pub use canvas::*;
pub use layout::*;
pub use table::*;
pub use table_state::*;
pub use zone::*;
