//! Domain layer - Storage claim model, form inputs and port definitions
//!
//! The types here are independent of any wire format. Converters build them
//! from API objects or form values and turn them back into API payloads.

pub mod claim;
pub mod forms;
pub mod ports;

pub use claim::*;
pub use forms::*;
pub use ports::*;
