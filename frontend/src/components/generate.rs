//! Step 3/4: grid image generation and result display.
//!
//! Hidden until a proposal is selected. A successful generation reveals the
//! result image and seeds the registration metadata editor (step 5).

use leptos::*;

use crate::components::{ToastKind, Toasts};
use crate::services::api;
use crate::types::{RegistrationInfo, WizardState};

#[component]
pub fn GenerateSection() -> impl IntoView {
    let state = expect_context::<WizardState>();
    let toasts = expect_context::<Toasts>();

    let (generating, set_generating) = create_signal(false);

    let on_generate = move |_| {
        let Some(character) = state.selected_character() else {
            toasts.show(ToastKind::Warning, "キャラクターを選択してください");
            return;
        };

        spawn_local(async move {
            set_generating.set(true);

            match api::generate_grid(&character).await {
                Ok(result) => {
                    if let Some(info) = &result.model_info {
                        log::info!("[画像生成完了]");
                        log::info!(
                            "  プロンプト生成モデル: {}",
                            info.prompt_model.as_deref().unwrap_or("unknown")
                        );
                        log::info!(
                            "  画像生成モデル: {}",
                            info.image_model.as_deref().unwrap_or("unknown")
                        );
                    }

                    let registration = result
                        .registration
                        .unwrap_or_else(|| RegistrationInfo::seeded(&character.name));
                    state.registration.set(registration);
                    state.grid.set(Some(result.grid));
                    toasts.show(ToastKind::Success, "画像を生成しました！");
                }
                Err(failure) => {
                    // No partial UI state is revealed on failure.
                    toasts.report(&failure, "画像生成に失敗しました");
                }
            }

            // Single re-enable point, reached on every exit path.
            set_generating.set(false);
        });
    };

    // Reactive view of the selected proposal for the summary card.
    let selected = move || {
        state
            .selected
            .get()
            .and_then(|index| state.characters.get().get(index).cloned())
    };

    view! {
        <Show when=move || state.selected.get().is_some() fallback=|| view! {}>
            <section class="step-section" id="step3">
                <h2>"ステップ3: 画像生成"</h2>
                <div class="selected-character" id="selectedCharacter">
                    {move || {
                        selected()
                            .map(|character| {
                                view! {
                                    <h4>{character.name}</h4>
                                    <p class="text-sm text-muted">{character.concept}</p>
                                }
                            })
                    }}
                </div>
                <button
                    class="btn btn-primary"
                    id="generateBtn"
                    disabled=move || generating.get()
                    on:click=on_generate
                >
                    {move || if generating.get() { "生成中..." } else { "スタンプ画像を生成" }}
                </button>

                <Show when=move || generating.get() fallback=|| view! {}>
                    <div class="loading" id="generateLoading">
                        <div class="spinner"></div>
                        "6x3グリッド画像を生成しています（1分ほどかかります）..."
                    </div>
                </Show>

                <Show when=move || state.grid.get().is_some() fallback=|| view! {}>
                    <div class="generated-result" id="generatedResult">
                        {move || {
                            state
                                .grid
                                .get()
                                .map(|grid| {
                                    view! {
                                        <a href=grid.image_url.clone() target="_blank">
                                            <img
                                                src=grid.image_url.clone()
                                                alt="Generated stamp grid"
                                                class="generated-image"
                                            />
                                        </a>
                                        <p class="text-sm text-muted">"クリックで拡大表示"</p>
                                        <a
                                            class="btn btn-secondary"
                                            href=grid.image_url
                                            download=""
                                        >
                                            "画像をダウンロード"
                                        </a>
                                    }
                                })
                        }}
                    </div>
                </Show>
            </section>

            <Show when=move || state.grid.get().is_some() fallback=|| view! {}>
                <section class="step-section" id="step4">
                    <h2>"ステップ4: 切り抜き"</h2>
                    <p class="step-hint">
                        "生成画像をダウンロードして、お好みのツールで1コマずつ切り抜いてください。"
                        "切り抜いた画像は下のリサイズ機能でLINE仕様に変換できます。"
                    </p>
                </section>
            </Show>
        </Show>
    }
}
