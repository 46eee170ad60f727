//! Interactive terminal menu for browsing, installing and launching
//! security tools.
//!
//! The [`controller::Controller`] drives the menus over a fixed
//! [`registry::ToolRegistry`]; tool presence checks and actions go through a
//! pluggable [`backend::ToolBackend`].

pub mod app;
pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod menu;
pub mod progress;
pub mod registry;
pub mod render;
pub mod status;
pub mod terminal;
pub mod testing;

pub use backend::{BackendKind, ToolBackend};
pub use config::Config;
pub use controller::Controller;
pub use registry::ToolRegistry;
pub use status::ToolStatus;
