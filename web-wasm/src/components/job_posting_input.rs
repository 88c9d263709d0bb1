//! 求人テキスト入力コンポーネント

use leptos::prelude::*;
use crate::file::WebForm;

#[component]
pub fn JobPostingInput<F>(
    form: ReadSignal<WebForm, LocalStorage>,
    on_input: F,
) -> impl IntoView
where
    F: Fn(String) + 'static,
{
    view! {
        <div class="form-group">
            <label for="job-posting">"Job Posting"</label>
            <textarea
                id="job-posting"
                placeholder="Paste job posting here..."
                prop:value=move || form.with(|f| f.job_posting().to_string())
                on:input=move |ev| on_input(event_target_value(&ev))
            ></textarea>
        </div>
    }
}
