//! UI Components for the stamp wizard.
//!
//! This module contains all Leptos components organized by function:
//!
//! # Layout Components
//! - [`Header`] - Top bar with the API connection badge
//! - [`Hero`] - Main title and description
//! - [`Footer`] - Page footer
//!
//! # Wizard Steps
//! - [`CredentialSection`] - API key entry and connection verification
//! - [`ProposalSection`] - Character proposal request and selection
//! - [`GenerateSection`] - Grid image generation and result display
//! - [`RegistrationSection`] - Registration metadata editor with counters
//!
//! # Standalone
//! - [`ResizeSection`] - Drag-and-drop bulk resize of cropped stamps
//! - [`ToastHost`] - Transient notification stack

mod credential;
mod footer;
mod generate;
mod header;
mod hero;
mod propose;
mod registration;
mod resize;
mod toast;

pub use credential::*;
pub use footer::*;
pub use generate::*;
pub use header::*;
pub use hero::*;
pub use propose::*;
pub use registration::*;
pub use resize::*;
pub use toast::*;
