//! 解析エンドポイントのHTTPクライアント
//!
//! Webコンポーネントと同じmultipart形式（`resume` + `job_posting`）でPOSTする。
//! リトライはしない。

use crate::config::Config;
use crate::error::Result;
use reqwest::multipart::{Form, Part};
use resume_analyzer_common::{
    parse_analysis_response, AnalysisResult, AnalyzeRequest, Error, Submit, UploadForm,
    JOB_POSTING_FIELD, RESUME_FIELD,
};
use std::time::Duration;

pub struct AnalyzerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl AnalyzerClient {
    pub fn new(endpoint: impl Into<String>, timeout_seconds: Option<u64>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn with_http(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config, endpoint: Option<&str>) -> Result<Self> {
        Self::new(config.resolve_endpoint(endpoint), config.timeout_seconds)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// 1回だけPOSTしてレスポンスをパースする
    pub async fn analyze(&self, request: &AnalyzeRequest) -> resume_analyzer_common::Result<AnalysisResult> {
        let form = build_form(request).map_err(network_error)?;

        let resp = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await
            .map_err(network_error)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Error::Http { status: status.as_u16() });
        }

        let body = resp.text().await.map_err(network_error)?;
        parse_analysis_response(&body)
    }
}

/// multipartボディを作成
pub fn build_form(request: &AnalyzeRequest) -> std::result::Result<Form, reqwest::Error> {
    let resume = Part::bytes(request.resume.bytes.clone())
        .file_name(request.resume.name.clone())
        .mime_str(&request.resume.mime_type)?;

    Ok(Form::new()
        .part(RESUME_FIELD, resume)
        .text(JOB_POSTING_FIELD, request.job_posting.clone()))
}

/// フォームの内容を送信し、結果をフォームに反映する
///
/// 表示はフォームの状態（`visible_result` / `notice`）から行う。
/// 失敗の詳細はstderrに出す。
pub async fn submit(form: &mut UploadForm, client: &AnalyzerClient, verbose: bool) {
    let request = match form.begin_submit() {
        Submit::Started(request) => request,
        Submit::Busy | Submit::Rejected(_) => return,
    };

    if verbose {
        println!(
            "  POST {} ({}, {} bytes)",
            client.endpoint(),
            request.resume.name,
            request.resume.len()
        );
    }

    let outcome = client.analyze(&request).await;
    if let Err(e) = &outcome {
        eprintln!("Error: {}", e);
        if let Error::Backend { raw_output: Some(raw), .. } = e {
            if verbose {
                eprintln!("Raw model output: {}", raw);
            }
        }
    }

    form.complete(request.ticket, outcome);
}

fn network_error(e: reqwest::Error) -> Error {
    Error::Network(e.to_string())
}
