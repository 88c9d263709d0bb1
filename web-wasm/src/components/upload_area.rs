//! アップロードエリアコンポーネント（ドロップゾーン）

use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};
use crate::file::{collect_files, DroppedFile, WebForm};

#[component]
pub fn UploadArea<F>(
    form: ReadSignal<WebForm, LocalStorage>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<DroppedFile>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                on_files(collect_files(&files));
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    // ファイル選択ダイアログを開く
    let on_click = move |_| {
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files(collect_files(&files));
        }
        // 同じファイルを選び直せるようにする
        input.set_value("");
    };

    view! {
        <div
            class=move || {
                if is_dragover.get() { "upload-area dragover" } else { "upload-area" }
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <input
                type="file"
                class="file-input"
                node_ref=input_ref
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
            <p>{move || form.with(|f| f.drop_zone_label())}</p>
        </div>
    }
}
