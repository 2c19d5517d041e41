//! # Application Layer
//!
//! Use cases and the ports they depend on. Adapters in the connector layer
//! implement the ports; the use cases never see HTTP or vendor details.

pub mod interfaces;
pub mod use_cases;

pub use interfaces::*;
pub use use_cases::*;
