//! State module - the bridge's one stateful component.
//!
//! - **Activation** - the inactive/active machine driving highlight tracking

mod activation;

pub use activation::*;
