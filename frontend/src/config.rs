//! Application configuration.
//!
//! Centralized constants for the stamp wizard frontend. The backend is
//! served from the same origin, so all paths are relative.

/// Backend API prefix.
pub const API_BASE: &str = "/api";

/// Prefix under which the backend exposes generated output files.
pub const OUTPUT_BASE: &str = "/output";

/// sessionStorage key holding the raw API key for the current tab session.
pub const SESSION_KEY: &str = "gemini_api_key";

/// Quiet period after the last keystroke before the API key is saved.
pub const SAVE_DEBOUNCE_MS: u32 = 800;

/// How long a toast stays on screen before its exit animation starts.
pub const TOAST_DURATION_MS: u32 = 4000;

/// Duration of the toast exit animation before the element is removed.
pub const TOAST_EXIT_MS: u32 = 300;

/// Delay between the progress bar reaching 100% and the result reveal.
pub const RESULT_REVEAL_DELAY_MS: u32 = 300;

/// Maximum number of thumbnails shown in the resize result gallery.
pub const MAX_PREVIEW_THUMBS: usize = 6;

/// LINE Creators Market stamp size (maximum, in pixels).
pub const STAMP_WIDTH: u32 = 370;
pub const STAMP_HEIGHT: u32 = 320;

/// Raw character budgets for the registration metadata fields.
///
/// LINE limits titles to 20 and descriptions to 80 display units, where a
/// full-width character occupies two units; the raw budgets below are those
/// limits doubled, which is what the live counters measure against.
pub const TITLE_BUDGET: usize = 40;
pub const DESCRIPTION_BUDGET: usize = 160;
pub const COPYRIGHT_BUDGET: usize = 50;
