//! Backend and browser services.
//!
//! This module provides everything that talks to the outside world:
//!
//! # Services
//!
//! - [`api`] - Typed HTTP calls to the stamp wizard backend
//! - [`session`] - sessionStorage persistence for the API key
//! - [`dropfs`] - Drag-and-drop file collection with folder expansion

pub mod api;
pub mod dropfs;
pub mod session;

pub use api::*;
pub use dropfs::*;
pub use session::*;
