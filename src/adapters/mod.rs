// Adapters layer: concrete implementations of the toolkit ports.

pub mod alloy_toolkit;
pub mod artifacts;
