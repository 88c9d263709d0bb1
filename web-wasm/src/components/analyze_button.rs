//! 解析ボタンコンポーネント

use leptos::prelude::*;

#[component]
pub fn AnalyzeButton<F>(
    is_loading: Signal<bool, LocalStorage>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static,
{
    view! {
        <button
            class="btn btn-primary"
            disabled=move || is_loading.get()
            on:click=move |_| on_analyze(())
        >
            {move || if is_loading.get() { "Analyzing..." } else { "Analyze" }}
        </button>
    }
}
