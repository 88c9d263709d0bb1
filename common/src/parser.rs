//! 解析エンドポイントのレスポンスパーサー
//!
//! レスポンス本文全体をJSONとして読み、AnalysisResultにする。
//! 前後に余計なテキストがある本文（HTMLエラーページなど）は受け付けない。
//! バックエンドはモデル出力がJSONでない場合に200で
//! `{"error": ..., "raw_output": ...}` を返すので、それはエラーとして扱う。

use crate::error::{Error, Result};
use crate::types::AnalysisResult;
use serde::Deserialize;

/// バックエンドのエラーペイロード
#[derive(Debug, Deserialize)]
struct BackendError {
    error: serde_json::Value,
    #[serde(default)]
    raw_output: Option<String>,
}

/// 解析レスポンスをパース
///
/// # Returns
/// * `Ok(AnalysisResult)` - パース成功
/// * `Err(Error::Backend)` - バックエンドがエラーペイロードを返した
/// * `Err(Error::Parse)` - 本文がJSONでないかスキーマ不一致
///
/// # Examples
/// ```
/// use resume_analyzer_common::parse_analysis_response;
///
/// let result = parse_analysis_response(r#"{"fit_score": 10}"#).unwrap();
/// assert_eq!(result.fit_score, 10.0);
/// assert!(parse_analysis_response("<html>{\"fit_score\": 10}</html>").is_err());
/// ```
pub fn parse_analysis_response(body: &str) -> Result<AnalysisResult> {
    let value: serde_json::Value = serde_json::from_str(body)
        .map_err(|e| Error::Parse(format!("response is not valid JSON: {}", e)))?;

    if value.get("error").is_some() {
        let backend: BackendError = serde_json::from_value(value)?;
        let message = match backend.error {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        return Err(Error::Backend {
            message,
            raw_output: backend.raw_output,
        });
    }

    serde_json::from_value(value)
        .map_err(|e| Error::Parse(format!("unexpected response shape: {}", e)))
}
