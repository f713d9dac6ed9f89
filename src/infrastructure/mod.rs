//! # Infrastructure Layer
//!
//! Adapters around the pricing core.
//!
//! - [`catalog`]: Catalog sources (in-memory, file)
//! - [`config`]: Layered settings
//! - [`logging`]: Subscriber setup

pub mod catalog;
pub mod config;
pub mod logging;
