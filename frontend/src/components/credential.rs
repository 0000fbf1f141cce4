//! Step 1: API key entry, debounced save, and connection verification.

use gloo_timers::future::TimeoutFuture;
use leptos::*;

use crate::components::{ToastKind, Toasts};
use crate::config::SAVE_DEBOUNCE_MS;
use crate::services::api::{self, ModelStatus};
use crate::services::session;
use crate::types::{ApiFailure, WizardState};

/// Persist the current API key: sessionStorage first (synchronous), then
/// the backend config endpoint. An empty key is a silent no-op.
///
/// Shared by the debounced input handler, the verify flow, and the proposal
/// step (which saves before calling the AI).
pub(crate) async fn save_api_key(state: WizardState, toasts: Toasts) {
    let api_key = state.api_key.get_untracked().trim().to_string();
    if api_key.is_empty() {
        return;
    }

    session::store_api_key(&api_key);

    match api::save_config(&api_key).await {
        Ok(()) => {
            state.connected.set(true);
            toasts.show(ToastKind::Success, "APIキーを保存しました");
        }
        Err(failure) => {
            state.connected.set(false);
            toasts.report(&failure, "APIキーの保存に失敗しました");
        }
    }
}

/// Silent startup probe: sets the badge from the backend's stored-key flag,
/// degrades to disconnected without any notification.
pub(crate) async fn check_connection(state: WizardState) {
    let connected = api::fetch_config_status().await.unwrap_or(false);
    state.connected.set(connected);
}

#[component]
pub fn CredentialSection() -> impl IntoView {
    let state = expect_context::<WizardState>();
    let toasts = expect_context::<Toasts>();

    let (checking, set_checking) = create_signal(false);
    let (models, set_models) = create_signal(None::<ModelStatus>);
    let (verify_error, set_verify_error) = create_signal(None::<String>);

    // Debounce generation counter: only the newest pending save fires.
    let save_generation = create_rw_signal(0u64);

    let on_key_input = move |ev: web_sys::Event| {
        state.api_key.set(event_target_value(&ev));
        let generation = save_generation.get_untracked() + 1;
        save_generation.set(generation);
        spawn_local(async move {
            TimeoutFuture::new(SAVE_DEBOUNCE_MS).await;
            if save_generation.get_untracked() == generation {
                save_api_key(state, toasts).await;
            }
        });
    };

    let on_verify = move |_| {
        if state.api_key.get_untracked().trim().is_empty() {
            toasts.show(ToastKind::Warning, "APIキーを入力してください");
            return;
        }

        spawn_local(async move {
            set_checking.set(true);
            set_models.set(None);
            set_verify_error.set(None);

            save_api_key(state, toasts).await;

            match api::verify_connection().await {
                Ok(status) => {
                    log::info!("API接続確認");
                    log::info!("  テキストモデル: {}", status.text_model);
                    log::info!("  画像モデル: {}", status.image_model);
                    log::info!(
                        "  モデルバージョン: {}",
                        status.text_model_version.as_deref().unwrap_or("unknown")
                    );
                    set_models.set(Some(status));
                    state.connected.set(true);
                    toasts.show(ToastKind::Success, "API接続OK！");
                }
                Err(failure) => {
                    let panel_text = match &failure {
                        ApiFailure::Rejected(_) => {
                            failure.message_or("接続に失敗しました").to_string()
                        }
                        ApiFailure::Transport(_) => "サーバーとの通信に失敗しました".to_string(),
                    };
                    set_verify_error.set(Some(panel_text));
                    state.connected.set(false);
                    toasts.report(&failure, "API接続に失敗しました");
                }
            }

            // Single re-enable point, reached on every exit path.
            set_checking.set(false);
        });
    };

    view! {
        <section class="step-section" id="step1">
            <h2>"ステップ1: APIキー設定"</h2>
            <p class="step-hint">"Gemini APIキーを入力してください（このタブのセッション内でのみ保持されます）"</p>
            <div class="api-key-row">
                <input
                    type="password"
                    id="apiKey"
                    class="api-key-input"
                    placeholder="AIza..."
                    prop:value=move || state.api_key.get()
                    on:input=on_key_input
                />
                <button
                    class="btn btn-secondary"
                    id="verifyBtn"
                    disabled=move || checking.get()
                    on:click=on_verify
                >
                    {move || if checking.get() { "確認中..." } else { "接続を確認" }}
                </button>
            </div>

            <Show when=move || models.get().is_some() fallback=|| view! {}>
                <div class="model-status" id="modelStatus">
                    <div>
                        "テキストモデル: "
                        <span id="textModelName">
                            {move || models.get().map(|m| m.text_model).unwrap_or_default()}
                        </span>
                    </div>
                    <div>
                        "画像モデル: "
                        <span id="imageModelName">
                            {move || models.get().map(|m| m.image_model).unwrap_or_default()}
                        </span>
                    </div>
                </div>
            </Show>

            <Show when=move || verify_error.get().is_some() fallback=|| view! {}>
                <div class="model-status-error" id="modelStatusError">
                    <span id="modelStatusErrorText">
                        {move || verify_error.get().unwrap_or_default()}
                    </span>
                </div>
            </Show>
        </section>
    }
}
