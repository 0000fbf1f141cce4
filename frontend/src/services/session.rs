//! Session-scoped persistence for the API key.
//!
//! The key lives in `sessionStorage` only: it survives reloads within the
//! tab and disappears when the session ends. Storage access can fail (e.g.
//! blocked third-party context), in which case these helpers degrade to
//! no-ops — persistence is best-effort and never blocks the wizard.

use web_sys::Storage;

use crate::config::SESSION_KEY;

fn storage() -> Option<Storage> {
    web_sys::window()?.session_storage().ok().flatten()
}

/// Read the API key saved earlier in this session, if any.
pub fn load_api_key() -> Option<String> {
    storage()?
        .get_item(SESSION_KEY)
        .ok()
        .flatten()
        .filter(|key| !key.is_empty())
}

/// Persist the API key for this session.
///
/// Called synchronously before any network save so the key is never lost to
/// a failed request.
pub fn store_api_key(api_key: &str) {
    if let Some(storage) = storage() {
        if storage.set_item(SESSION_KEY, api_key).is_err() {
            log::warn!("sessionStorage write failed, API key not persisted");
        }
    }
}
