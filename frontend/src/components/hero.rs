//! Hero section component

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"LINEスタンプ丸投げちゃん"</h1>
            <p class="subtitle">
                "APIキーを入れてキャラクターを選ぶだけ。"
                "AIがスタンプ案と画像を作り、切り抜き後のリサイズまで面倒を見ます。"
            </p>
        </div>
    }
}
