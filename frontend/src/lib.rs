//! LINEスタンプ丸投げちゃん - Frontend Rust/Leptos Application
//!
//! A WebAssembly frontend driving a five-step stamp creation wizard:
//! API key → character proposals → selection → grid generation →
//! registration metadata, plus a standalone bulk-resize drop zone.
//! All AI inference and image processing happen in the backend; this
//! crate only orchestrates UI state, validation, and network calls.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (connection badge)                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  MainContent                                                 │
//! │  ├── Hero (title, description)                              │
//! │  ├── CredentialSection (step 1)                             │
//! │  ├── ProposalSection (steps 2–3)                            │
//! │  ├── GenerateSection (steps 3–4, when a proposal is picked) │
//! │  ├── RegistrationSection (step 5, after generation)         │
//! │  └── ResizeSection (standalone drop zone)                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer • ToastHost (fixed overlay)                          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Domain types, wizard state, failure taxonomy
//! - [`text`] - Full-width counting and natural filename ordering
//! - [`components`] - UI components (steps, toasts, layout)
//! - [`services`] - Backend communication, session storage, drag-and-drop

use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod components;
pub mod config;
pub mod services;
pub mod text;
pub mod types;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    ApiFailure, CharacterProposal, GeneratedGrid, RegistrationInfo, StampOutcome, WizardState,
};

// Components
pub use components::*;

// Services
pub use services::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// WASM entry point - called automatically by trunk.
#[wasm_bindgen(start)]
pub fn main() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(log::Level::Debug);

    log::info!("🦀 LINEスタンプ丸投げちゃん - Starting Leptos App");

    // Mount the application
    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="LINEスタンプ丸投げちゃん"/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=MainContent/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn MainContent() -> impl IntoView {
    // Global state for the application
    let state = WizardState::new();
    let toasts = Toasts::new();
    provide_context(state);
    provide_context(toasts);

    // Restore the API key saved earlier in this session, then probe the
    // backend silently for the badge.
    if let Some(saved) = services::session::load_api_key() {
        state.api_key.set(saved);
        spawn_local(async move {
            components::check_connection(state).await;
        });
    }

    view! {
        <Header/>

        <div class="container">
            <Hero/>
            <CredentialSection/>
            <ProposalSection/>
            <GenerateSection/>
            <RegistrationSection/>
            <ResizeSection/>
        </div>

        <Footer/>
        <ToastHost/>
    }
}
