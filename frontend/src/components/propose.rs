//! Step 2/3: character proposal request and proposal selection.

use leptos::*;

use crate::components::credential::save_api_key;
use crate::components::{ToastKind, Toasts};
use crate::services::api;
use crate::types::WizardState;

#[component]
pub fn ProposalSection() -> impl IntoView {
    let state = expect_context::<WizardState>();
    let toasts = expect_context::<Toasts>();

    let (request_text, set_request_text) = create_signal(String::new());
    let (proposing, set_proposing) = create_signal(false);

    let on_propose = move |_| {
        if state.api_key.get_untracked().trim().is_empty() {
            toasts.show(ToastKind::Warning, "APIキーを入力してください");
            return;
        }

        spawn_local(async move {
            set_proposing.set(true);

            save_api_key(state, toasts).await;

            let request = request_text.get_untracked().trim().to_string();
            match api::propose_characters(&request).await {
                Ok(proposals) => {
                    if let Some(info) = &proposals.model_info {
                        let model = info
                            .model_version
                            .as_deref()
                            .or(info.requested_model.as_deref())
                            .unwrap_or("unknown");
                        log::info!("[キャラ提案] 使用モデル: {}", model);
                    }
                    state.characters.set(proposals.characters);
                    // New batch invalidates the previous pick.
                    state.selected.set(None);
                    toasts.show(ToastKind::Success, "キャラクター案を生成しました");
                }
                Err(failure) => {
                    toasts.report(&failure, "キャラクター提案に失敗しました");
                }
            }

            // Single re-enable point, reached on every exit path.
            set_proposing.set(false);
        });
    };

    view! {
        <section class="step-section" id="step2">
            <h2>"ステップ2: キャラクター提案"</h2>
            <p class="step-hint">"どんなスタンプにしたいか自由に書いてください（空欄でもOK）"</p>
            <textarea
                id="characterRequest"
                class="request-input"
                placeholder="例: ゆるいうさぎ、敬語多め、仕事で使える"
                prop:value=move || request_text.get()
                on:input=move |ev| set_request_text.set(event_target_value(&ev))
            ></textarea>
            <button
                class="btn btn-primary"
                id="proposeBtn"
                disabled=move || proposing.get()
                on:click=on_propose
            >
                {move || if proposing.get() { "生成中..." } else { "キャラクター案を見る" }}
            </button>

            <Show when=move || proposing.get() fallback=|| view! {}>
                <div class="loading" id="proposalLoading">
                    <div class="spinner"></div>
                    "キャラクター案を考えています..."
                </div>
            </Show>

            <Show when=move || !state.characters.get().is_empty() fallback=|| view! {}>
                <div class="character-options" id="characterOptions">
                    <For
                        each=move || state.characters.get().into_iter().enumerate()
                        key=|(index, character)| (*index, character.name.clone())
                        children=move |(index, character)| {
                            let is_selected = move || state.selected.get() == Some(index);
                            view! {
                                <div
                                    class="character-option"
                                    class:selected=is_selected
                                    on:click=move |_| select_character(state, toasts, index)
                                >
                                    <div class="character-number">{index + 1}</div>
                                    <div class="character-content">
                                        <div class="character-name">{character.name.clone()}</div>
                                        <div class="character-desc">{character.concept.clone()}</div>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>
        </section>
    }
}

/// Mark proposal `index` as the one selected proposal and reveal the
/// generation step. Re-selecting the same index is a harmless no-op apart
/// from the repeated toast.
fn select_character(state: WizardState, toasts: Toasts, index: usize) {
    let Some(character) = state.characters.get_untracked().get(index).cloned() else {
        return;
    };

    state.selected.set(Some(index));
    toasts.show(
        ToastKind::Info,
        format!("「{}」を選択しました", character.name),
    );
    scroll_to("step3");
}

/// Smooth-scroll the element with `id` into view, if it exists.
fn scroll_to(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if let Some(element) = document.get_element_by_id(id) {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
}
