//! Footer component

use leptos::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer>
            <div>"Copyright © 2025 株式会社CLAN • Powered by " <span class="rust-badge">"🦀 Rust + Leptos"</span></div>
            <div class="footer-links">
                <a
                    href="https://creator.line.me/ja/guideline/sticker/"
                    class="footer-link"
                    target="_blank"
                >
                    "LINEスタンプ ガイドライン"
                </a>
            </div>
        </footer>
    }
}
