use leptos::*;

use crate::types::WizardState;

/// Top bar with the app title and the API connection badge.
///
/// The badge mirrors `WizardState::connected`; it is updated by the
/// credential store, never directly from here.
#[component]
pub fn Header() -> impl IntoView {
    let state = expect_context::<WizardState>();
    let connected = state.connected;

    view! {
        <header>
            <div class="header-left">
                <a href="#" class="logo">"LINEスタンプ丸投げちゃん"</a>
            </div>
            <div class="header-right">
                <span
                    id="apiStatus"
                    class=move || {
                        if connected.get() { "badge badge-success" } else { "badge badge-warning" }
                    }
                >
                    <span id="apiStatusIcon">
                        {move || if connected.get() { "✓" } else { "⚠" }}
                    </span>
                    <span id="apiStatusText">
                        {move || if connected.get() { "接続済み" } else { "未設定" }}
                    </span>
                </span>
            </div>
        </header>
    }
}
