//! Domain-based type organization
//!
//! - connectivity: raw provider input
//! - view: derived view model
//! - notification: sink-facing notification types
//! - monitor: sequencer state machine and dedup gate

pub mod connectivity;
pub mod monitor;
pub mod notification;
pub mod view;

pub use connectivity::*;
pub use monitor::*;
pub use notification::*;
pub use view::*;
