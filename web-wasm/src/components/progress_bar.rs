//! 解析中インジケーター
//!
//! 進捗は分からないので不定プログレスバー（CSSアニメーション）

use leptos::prelude::*;

#[component]
pub fn ProgressBar() -> impl IntoView {
    view! {
        <div class="progress-container">
            <p class="progress-text">"⏳ Analyzing resume..."</p>
            <div class="progress-bar">
                <div class="progress-fill loading-bar" />
            </div>
        </div>
    }
}
