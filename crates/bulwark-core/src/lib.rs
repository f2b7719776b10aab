//! Core types and definitions for the Bulwark combat simulation.
//!
//! This crate defines the vocabulary shared across the workspace:
//! components, route geometry, enums, events, snapshot views, and
//! constants. It has no dependency on any runtime framework.

pub mod components;
pub mod constants;
pub mod enums;
pub mod events;
pub mod route;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
