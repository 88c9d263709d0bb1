//! 解析エンドポイント呼び出し
//!
//! 履歴書ファイルと求人テキストをmultipartでPOSTし、
//! レスポンス本文をAnalysisResultにパースする。
//! リトライ・タイムアウト・キャンセルはしない。

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};
use crate::file::DroppedFile;
use resume_analyzer_common::{
    parse_analysis_response, AnalysisResult, AnalyzeRequest, Error, Result,
    DEFAULT_ENDPOINT, JOB_POSTING_FIELD, RESUME_FIELD,
};

/// multipartボディを作成
///
/// * `resume` - 選択された`File`そのもの（元のファイル名とMIMEタイプ付き）
/// * `job_posting` - 求人テキスト
pub fn build_form_data(request: &AnalyzeRequest<DroppedFile>) -> std::result::Result<FormData, JsValue> {
    let file = &request.resume.0;
    let form = FormData::new()?;
    form.append_with_blob_and_filename(RESUME_FIELD, file, &file.name())?;
    form.append_with_str(JOB_POSTING_FIELD, &request.job_posting)?;
    Ok(form)
}

/// 固定エンドポイントへ解析リクエストを送る
pub async fn analyze(request: &AnalyzeRequest<DroppedFile>) -> Result<AnalysisResult> {
    analyze_at(DEFAULT_ENDPOINT, request).await
}

pub async fn analyze_at(
    endpoint: &str,
    request: &AnalyzeRequest<DroppedFile>,
) -> Result<AnalysisResult> {
    let form = build_form_data(request).map_err(js_error)?;
    let resp = post_form(endpoint, &form).await.map_err(js_error)?;

    if !resp.ok() {
        return Err(Error::Http { status: resp.status() });
    }

    let body = JsFuture::from(resp.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    let body = body
        .as_string()
        .ok_or_else(|| Error::Parse("response body is not text".into()))?;

    parse_analysis_response(&body)
}

async fn post_form(endpoint: &str, form: &FormData) -> std::result::Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    // Content-Type（boundary付き）はブラウザに任せる
    opts.set_body(form);

    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    resp_value.dyn_into()
}

fn js_error(e: JsValue) -> Error {
    Error::Network(format!("{:?}", e))
}
