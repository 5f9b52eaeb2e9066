//! Commands Layer
//!
//! Store Gateway operations, independent of the HTTP transport.

mod item_cmd;

pub use item_cmd::*;
