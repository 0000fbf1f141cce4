//! Common types used across the frontend application.
//!
//! This module centralizes type definitions to avoid duplication
//! and ensure consistency across components.
//!
//! # Categories
//!
//! - **Domain Types** - Character proposals, generated grids, registration info
//! - **Wizard State** - The single shared state structure for the step flow
//! - **Failure Types** - Outcome taxonomy for backend calls

use leptos::{create_rw_signal, RwSignal, SignalGetUntracked};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Domain Types
// =============================================================================

/// One AI-proposed stamp character.
///
/// Returned by `/api/propose-characters` and echoed back verbatim in the
/// `/api/generate-grid` request body.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CharacterProposal {
    /// Character name (Japanese)
    pub name: String,
    /// One-paragraph concept description
    pub concept: String,
}

/// Reference to the grid image produced by a generation cycle.
#[derive(Clone, Debug, PartialEq)]
pub struct GeneratedGrid {
    /// Server-side path of the saved PNG
    pub image_path: String,
    /// URL the browser can load the image from
    pub image_url: String,
}

/// LINE Creators Market registration metadata.
///
/// Seeded from the generation response (or a default template) and then
/// edited locally; never sent back to the backend.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    #[serde(default)]
    pub title_ja: String,
    #[serde(default)]
    pub title_en: String,
    #[serde(default)]
    pub description_ja: String,
    #[serde(default)]
    pub description_en: String,
    #[serde(default)]
    pub copyright: String,
}

impl RegistrationInfo {
    /// Default template used when the backend supplies no registration
    /// payload: the proposal name as Japanese title, everything else empty
    /// apart from a placeholder copyright line.
    pub fn seeded(character_name: &str) -> Self {
        Self {
            title_ja: character_name.to_string(),
            copyright: "© 2025 Your Name".to_string(),
            ..Self::default()
        }
    }
}

/// Per-file outcome of a resize batch.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StampOutcome {
    pub success: bool,
    #[serde(default)]
    pub filename: String,
}

// =============================================================================
// Wizard State
// =============================================================================

/// The single in-memory state of the wizard, shared through context.
///
/// Each handler owns its slice of this state for the duration of its async
/// sequence; there is no parallelism, so signals are the only coordination.
#[derive(Clone, Copy)]
pub struct WizardState {
    /// Raw API key as typed (may be empty)
    pub api_key: RwSignal<String>,
    /// Connected/disconnected badge state
    pub connected: RwSignal<bool>,
    /// Ordered proposals from the last successful proposal call
    pub characters: RwSignal<Vec<CharacterProposal>>,
    /// Index into `characters` of the selected proposal, if any
    pub selected: RwSignal<Option<usize>>,
    /// Grid image from the last successful generation call
    pub grid: RwSignal<Option<GeneratedGrid>>,
    /// Registration metadata editor contents
    pub registration: RwSignal<RegistrationInfo>,
}

impl WizardState {
    pub fn new() -> Self {
        Self {
            api_key: create_rw_signal(String::new()),
            connected: create_rw_signal(false),
            characters: create_rw_signal(Vec::new()),
            selected: create_rw_signal(None),
            grid: create_rw_signal(None),
            registration: create_rw_signal(RegistrationInfo::default()),
        }
    }

    /// The currently selected proposal, cloned out of the list.
    ///
    /// Untracked on purpose: callers are event handlers, not reactive scopes.
    pub fn selected_character(&self) -> Option<CharacterProposal> {
        let index = self.selected.get_untracked()?;
        self.characters.get_untracked().get(index).cloned()
    }
}

impl Default for WizardState {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Failure Types
// =============================================================================

/// Outcome of a failed backend call.
///
/// Keeps the two failure classes apart so the toast dispatch policy can pick
/// the server-supplied message for logical failures and a fixed generic
/// message for transport failures.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiFailure {
    /// The backend answered but reported `success: false`. Carries the
    /// server-supplied error message when one was present.
    Rejected(Option<String>),
    /// The request never produced a usable response (network error or
    /// malformed body). Carries the underlying error text.
    Transport(String),
}

impl ApiFailure {
    /// Server message for logical failures, `fallback` otherwise.
    pub fn message_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self {
            ApiFailure::Rejected(Some(msg)) if !msg.is_empty() => msg,
            _ => fallback,
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Rejected(Some(msg)) => write!(f, "rejected: {}", msg),
            ApiFailure::Rejected(None) => write!(f, "rejected"),
            ApiFailure::Transport(msg) => write!(f, "transport: {}", msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_registration_uses_name_and_placeholder_copyright() {
        let info = RegistrationInfo::seeded("もちうさぎ");
        assert_eq!(info.title_ja, "もちうさぎ");
        assert_eq!(info.title_en, "");
        assert_eq!(info.description_ja, "");
        assert_eq!(info.description_en, "");
        assert_eq!(info.copyright, "© 2025 Your Name");
    }

    #[test]
    fn failure_message_prefers_server_text() {
        let rejected = ApiFailure::Rejected(Some("APIキーが無効です".to_string()));
        assert_eq!(rejected.message_or("fallback"), "APIキーが無効です");

        let empty = ApiFailure::Rejected(Some(String::new()));
        assert_eq!(empty.message_or("fallback"), "fallback");

        let transport = ApiFailure::Transport("timeout".to_string());
        assert_eq!(transport.message_or("fallback"), "fallback");
    }
}
