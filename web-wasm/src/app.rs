//! メインアプリケーションコンポーネント
//!
//! フォームの状態（UploadForm）をここで1つだけ持ち、
//! 子コンポーネントには読み取りシグナルとコールバックを渡す。

use leptos::prelude::*;
use crate::api;
use crate::components::{
    analyze_button::AnalyzeButton,
    header::Header,
    job_posting_input::JobPostingInput,
    progress_bar::ProgressBar,
    result_view::ResultView,
    status_message::StatusMessage,
    upload_area::UploadArea,
};
use crate::file::{DroppedFile, WebForm};
use resume_analyzer_common::Submit;

#[component]
pub fn App() -> impl IntoView {
    // web_sys::FileはSendでないのでローカルシグナルで持つ
    let (form, set_form) = signal_local(WebForm::default());
    let is_loading = Signal::derive_local(move || form.with(|f| f.is_loading()));

    // ドロップ・選択されたファイルは先頭だけ使う
    let on_files = move |files: Vec<DroppedFile>| {
        set_form.update(|f| {
            f.select_files(files);
        });
    };

    // テキスト入力ハンドラ
    let on_input = move |text: String| {
        set_form.update(|f| f.set_job_posting(text));
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let submit = set_form
            .try_update(|f| f.begin_submit())
            .unwrap_or(Submit::Busy);

        let request = match submit {
            Submit::Started(request) => request,
            Submit::Busy | Submit::Rejected(_) => return,
        };

        wasm_bindgen_futures::spawn_local(async move {
            let outcome = api::analyze(&request).await;
            if let Err(e) = &outcome {
                gloo::console::error!("Error:", e.to_string());
            }
            set_form.update(|f| {
                f.complete(request.ticket, outcome);
            });
        });
    };

    view! {
        <div class="container">
            <Header />

            <UploadArea form=form on_files=on_files />

            <JobPostingInput form=form on_input=on_input />

            <AnalyzeButton is_loading=is_loading on_analyze=on_analyze />

            <StatusMessage form=form />

            <Show when=move || is_loading.get()>
                <ProgressBar />
            </Show>

            {move || {
                form.with(|f| f.visible_result().cloned())
                    .map(|result| view! { <ResultView result=result /> })
            }}
        </div>
    }
}
