//! Bulk resize of cropped stamp images to the LINE pixel spec.
//!
//! Standalone page section, usable independently of the wizard steps.
//! Accepts files through the native picker or drag-and-drop (including
//! whole folders), uploads them as one multipart batch and renders a
//! result gallery with a ZIP download link.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use web_sys::{DragEvent, Event, File, HtmlInputElement};

use crate::components::{ToastKind, Toasts};
use crate::config::{
    MAX_PREVIEW_THUMBS, OUTPUT_BASE, RESULT_REVEAL_DELAY_MS, STAMP_HEIGHT, STAMP_WIDTH,
};
use crate::services::api::{self, ResizeSummary};
use crate::services::dropfs;
use crate::types::ApiFailure;

/// Render model of a finished batch.
#[derive(Clone, Debug, PartialEq)]
struct ResizeView {
    summary: String,
    download_url: String,
    /// (url, filename) pairs for up to [`MAX_PREVIEW_THUMBS`] thumbnails
    thumbs: Vec<(String, String)>,
    /// "+N" overflow indicator when more images succeeded than shown
    overflow: Option<usize>,
}

impl ResizeView {
    fn from_summary(summary: &ResizeSummary) -> Self {
        let thumbs = summary
            .results
            .iter()
            .filter(|outcome| outcome.success)
            .take(MAX_PREVIEW_THUMBS)
            .map(|outcome| {
                (
                    format!("{}/{}/{}", OUTPUT_BASE, summary.folder, outcome.filename),
                    outcome.filename.clone(),
                )
            })
            .collect();
        let overflow = summary
            .processed_count
            .checked_sub(MAX_PREVIEW_THUMBS)
            .filter(|extra| *extra > 0);

        Self {
            summary: format!(
                "{}/{}枚をLINE仕様（{}x{}px）にリサイズしました",
                summary.processed_count, summary.total_count, STAMP_WIDTH, STAMP_HEIGHT
            ),
            download_url: summary.download_url.clone(),
            thumbs,
            overflow,
        }
    }
}

#[component]
pub fn ResizeSection() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    let (drag_active, set_drag_active) = create_signal(false);
    // None = progress region hidden; Some(pct) = visible at that milestone.
    let (progress, set_progress) = create_signal(None::<u32>);
    let (status_text, set_status_text) = create_signal(String::new());
    let (result, set_result) = create_signal(None::<ResizeView>);
    let file_input = create_node_ref::<html::Input>();

    let run = move |files: Vec<File>| {
        spawn_local(async move {
            run_resize(files, toasts, set_progress, set_status_text, set_result).await;
            // Reset so the same file can be re-selected next time.
            if let Some(input) = file_input.get_untracked() {
                input.set_value("");
            }
        });
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        let Some(data) = ev.data_transfer() else {
            return;
        };
        // Entries go stale once this handler returns: snapshot now,
        // traverse asynchronously.
        let snapshot = dropfs::snapshot_drop(&data);
        spawn_local(async move {
            let files = snapshot.into_image_files().await;
            run(files);
        });
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let Some(list) = input.files() else {
            return;
        };
        let mut files = Vec::with_capacity(list.length() as usize);
        for index in 0..list.length() {
            if let Some(file) = list.get(index) {
                files.push(file);
            }
        }
        run(dropfs::finish_batch(files));
    };

    let open_picker = move |_| {
        if let Some(input) = file_input.get_untracked() {
            input.click();
        }
    };

    view! {
        <section class="resize-section" id="resizeSection">
            <h2>"切り抜き画像のリサイズ"</h2>
            <p class="step-hint">
                {format!("切り抜いたスタンプ画像をLINE仕様（{}x{}px）に一括変換します", STAMP_WIDTH, STAMP_HEIGHT)}
            </p>

            <div
                class="drop-zone"
                class=("drop-zone-active", move || drag_active.get())
                id="dropZone"
                on:click=open_picker
                on:dragenter=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragover=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(true);
                }
                on:dragleave=move |ev: DragEvent| {
                    ev.prevent_default();
                    set_drag_active.set(false);
                }
                on:drop=on_drop
            >
                <div class="upload-icon">"📁"</div>
                <div class="upload-text">"ここに画像やフォルダをドロップ"</div>
                <div class="upload-hint">"またはクリックでファイルを選択"</div>
                <input
                    node_ref=file_input
                    type="file"
                    id="fileInput"
                    accept="image/*"
                    multiple
                    style="display:none"
                    on:click=move |ev: web_sys::MouseEvent| ev.stop_propagation()
                    on:change=on_file_change
                />
            </div>

            <Show when=move || progress.get().is_some() fallback=|| view! {}>
                <div class="upload-status" id="uploadStatus">
                    <div class="progress-bar">
                        <div
                            class="progress-fill"
                            id="uploadProgressBar"
                            style=move || format!("width: {}%;", progress.get().unwrap_or(0))
                        ></div>
                    </div>
                    <div class="upload-status-text" id="uploadStatusText">
                        {move || status_text.get()}
                    </div>
                </div>
            </Show>

            <Show when=move || result.get().is_some() fallback=|| view! {}>
                <div class="resize-result" id="resizeResult">
                    {move || {
                        result
                            .get()
                            .map(|view_model| {
                                view! {
                                    <p id="resultText">{view_model.summary.clone()}</p>
                                    <div class="result-preview" id="resultPreview">
                                        {view_model
                                            .thumbs
                                            .iter()
                                            .map(|(url, name)| {
                                                view! {
                                                    <img
                                                        src=url.clone()
                                                        alt=name.clone()
                                                        class="preview-thumb"
                                                    />
                                                }
                                            })
                                            .collect_view()}
                                        {view_model
                                            .overflow
                                            .map(|extra| {
                                                view! {
                                                    <span class="preview-more">
                                                        {format!("+{}", extra)}
                                                    </span>
                                                }
                                            })}
                                    </div>
                                    <a
                                        class="btn btn-primary"
                                        id="downloadLink"
                                        href=view_model.download_url.clone()
                                    >
                                        "ZIPをダウンロード"
                                    </a>
                                }
                            })
                    }}
                </div>
            </Show>
        </section>
    }
}

/// One resize attempt: validate, upload, reveal the result.
///
/// The progress milestones are cosmetic (30% on submit, 80% on response,
/// 100% on completion) — the backend reports no transfer progress.
async fn run_resize(
    files: Vec<File>,
    toasts: Toasts,
    set_progress: WriteSignal<Option<u32>>,
    set_status_text: WriteSignal<String>,
    set_result: WriteSignal<Option<ResizeView>>,
) {
    if files.is_empty() {
        toasts.show(ToastKind::Error, "画像ファイルを選択してください");
        return;
    }

    set_result.set(None);
    set_status_text.set(format!("{}枚の画像をリサイズ中...", files.len()));
    set_progress.set(Some(0));
    set_progress.set(Some(30));

    match api::resize_stamps(&files).await {
        Ok(summary) => {
            set_progress.set(Some(80));
            set_progress.set(Some(100));
            TimeoutFuture::new(RESULT_REVEAL_DELAY_MS).await;
            set_progress.set(None);
            toasts.show(
                ToastKind::Success,
                format!("{}枚のリサイズ完了！", summary.processed_count),
            );
            set_result.set(Some(ResizeView::from_summary(&summary)));
        }
        Err(failure) => {
            set_progress.set(None);
            match &failure {
                ApiFailure::Rejected(_) => {
                    toasts.show(
                        ToastKind::Error,
                        failure.message_or("リサイズに失敗しました").to_string(),
                    );
                }
                ApiFailure::Transport(message) => {
                    toasts.show(
                        ToastKind::Error,
                        format!("エラーが発生しました: {}", message),
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::StampOutcome;

    fn summary(processed: usize, total: usize, outcomes: Vec<StampOutcome>) -> ResizeSummary {
        ResizeSummary {
            processed_count: processed,
            total_count: total,
            download_url: "/api/download/stamps_x".to_string(),
            folder: "stamps_x".to_string(),
            results: outcomes,
        }
    }

    fn ok_outcome(filename: &str) -> StampOutcome {
        StampOutcome {
            success: true,
            filename: filename.to_string(),
        }
    }

    #[test]
    fn eight_processed_shows_six_thumbs_plus_two_overflow() {
        let outcomes = (1..=8).map(|i| ok_outcome(&format!("{:02}.png", i))).collect();
        let view = ResizeView::from_summary(&summary(8, 8, outcomes));
        assert_eq!(view.thumbs.len(), 6);
        assert_eq!(view.overflow, Some(2));
        assert_eq!(view.thumbs[0].0, "/output/stamps_x/01.png");
    }

    #[test]
    fn no_overflow_at_or_below_the_thumb_limit() {
        let outcomes = (1..=6).map(|i| ok_outcome(&format!("{:02}.png", i))).collect();
        let view = ResizeView::from_summary(&summary(6, 6, outcomes));
        assert_eq!(view.thumbs.len(), 6);
        assert_eq!(view.overflow, None);
    }

    #[test]
    fn failed_outcomes_are_skipped_in_the_gallery() {
        let outcomes = vec![
            ok_outcome("01.png"),
            StampOutcome {
                success: false,
                filename: "02.png".to_string(),
            },
            ok_outcome("03.png"),
        ];
        let view = ResizeView::from_summary(&summary(2, 3, outcomes));
        assert_eq!(view.thumbs.len(), 2);
        assert_eq!(view.thumbs[1].1, "03.png");
        assert!(view.summary.contains("2/3"));
        assert!(view.summary.contains("370x320"));
    }
}
