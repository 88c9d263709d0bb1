//! 通知メッセージ（入力不足・通信エラー）

use leptos::prelude::*;
use crate::file::WebForm;

#[component]
pub fn StatusMessage(form: ReadSignal<WebForm, LocalStorage>) -> impl IntoView {
    move || {
        form.with(|f| f.notice().cloned()).map(|notice| {
            view! {
                <div class=format!("notice {}", notice.kind.as_str()) role="alert">
                    {notice.message}
                </div>
            }
        })
    }
}
