//! Step 5: registration metadata editor with live character counters.
//!
//! Purely local editing surface; nothing here talks to the backend. The
//! Japanese fields count full-width characters as two units, matching the
//! LINE Creators Market display-width limits.

use leptos::*;

use crate::config::{COPYRIGHT_BUDGET, DESCRIPTION_BUDGET, TITLE_BUDGET};
use crate::text::{classify_count, display_count};
use crate::types::WizardState;

#[component]
pub fn RegistrationSection() -> impl IntoView {
    let state = expect_context::<WizardState>();
    let registration = state.registration;

    let (title_ja, set_title_ja) = create_slice(
        registration,
        |r| r.title_ja.clone(),
        |r, v| r.title_ja = v,
    );
    let (title_en, set_title_en) = create_slice(
        registration,
        |r| r.title_en.clone(),
        |r, v| r.title_en = v,
    );
    let (description_ja, set_description_ja) = create_slice(
        registration,
        |r| r.description_ja.clone(),
        |r, v| r.description_ja = v,
    );
    let (description_en, set_description_en) = create_slice(
        registration,
        |r| r.description_en.clone(),
        |r, v| r.description_en = v,
    );
    let (copyright, set_copyright) = create_slice(
        registration,
        |r| r.copyright.clone(),
        |r, v| r.copyright = v,
    );

    view! {
        <Show when=move || state.grid.get().is_some() fallback=|| view! {}>
            <section class="step-section" id="step5">
                <h2>"ステップ5: 登録情報"</h2>
                <p class="step-hint">"LINE Creators Market の申請フォームにそのまま貼り付けられます"</p>
                <div class="registration-info" id="registrationInfo">
                    <RegistrationField
                        label="タイトル（日本語）"
                        field_id="regTitleJa"
                        value=title_ja
                        set_value=set_title_ja
                        max=TITLE_BUDGET
                        fullwidth=true
                    />
                    <RegistrationField
                        label="タイトル（英語）"
                        field_id="regTitleEn"
                        value=title_en
                        set_value=set_title_en
                        max=TITLE_BUDGET
                    />
                    <RegistrationField
                        label="説明文（日本語）"
                        field_id="regDescJa"
                        value=description_ja
                        set_value=set_description_ja
                        max=DESCRIPTION_BUDGET
                        fullwidth=true
                    />
                    <RegistrationField
                        label="説明文（英語）"
                        field_id="regDescEn"
                        value=description_en
                        set_value=set_description_en
                        max=DESCRIPTION_BUDGET
                    />
                    <RegistrationField
                        label="コピーライト"
                        field_id="regCopyright"
                        value=copyright
                        set_value=set_copyright
                        max=COPYRIGHT_BUDGET
                    />
                </div>
            </section>
        </Show>
    }
}

/// One metadata field with a live counter.
///
/// The counter is advisory: typing past the budget flips it to "over" but
/// does not block input (the `maxlength` attribute is only a soft
/// browser-level cap on raw length).
#[component]
fn RegistrationField(
    label: &'static str,
    field_id: &'static str,
    value: Signal<String>,
    set_value: SignalSetter<String>,
    max: usize,
    #[prop(default = false)] fullwidth: bool,
) -> impl IntoView {
    let count = move || {
        let text = value.get();
        if fullwidth {
            display_count(&text)
        } else {
            text.chars().count()
        }
    };
    let counter_class = move || format!("char-counter {}", classify_count(count(), max).css_class());

    view! {
        <div class="field-row">
            <label for=field_id>{label}</label>
            <input
                type="text"
                id=field_id
                maxlength=max.to_string()
                prop:value=move || value.get()
                on:input=move |ev| set_value.set(event_target_value(&ev))
            />
            <span class=counter_class>{move || format!("{}/{}", count(), max)}</span>
        </div>
    }
}
