//! Tool domain module
//!
//! A **tool** is one named remote operation behind the JSON-RPC service.
//! Every tool is invoked through the same primitive (name plus
//! [`ToolArguments`] in, [`ToolResult`] out), so the client stays
//! tool-agnostic and the convenience operations in the application layer
//! only differ in which name and arguments they pass.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │ tool name    │───▶│ tools/call   │───▶│ ToolResult   │
//! │ + arguments  │    │ (JSON-RPC)   │    │ (JSON value) │
//! └──────────────┘    └──────────────┘    └──────────────┘
//! ```
//!
//! Tool names live in [`names`] and are protocol constants.

pub mod names;
pub mod value_objects;

pub use value_objects::{ToolArguments, ToolResult};
