//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod cooldown;
pub mod progress;
pub mod report_store;
pub mod tool_gateway;
