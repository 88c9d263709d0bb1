//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h2>"📄 Resume & Job Posting Analyzer"</h2>
        </header>
    }
}
