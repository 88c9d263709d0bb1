//! 解析結果の型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - AnalysisResult: 解析エンドポイントのレスポンス
//! - ScoreTier: フィットスコアの色区分
//! - SkillTag: マッチ/不足スキルの表示単位
//! - ResumeFile: 選択された履歴書ファイル

use serde::{Deserialize, Serialize};

/// 近似マッチの区切り文字（"teamwork ≈ collaboration"）
pub const APPROX_SEPARATOR: char = '≈';

/// 解析結果
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// フィット率（0-100想定、検証はしない）
    pub fit_score: f64,

    #[serde(default)]
    pub matched: Vec<String>,

    #[serde(default)]
    pub missing: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hard_skills_resume: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hard_skills_job: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub soft_skills_resume: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub soft_skills_job: Vec<String>,
}

impl AnalysisResult {
    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.fit_score)
    }

    /// スコアバーの塗り幅（%）。描画用に0-100へ丸める
    pub fn fill_percent(&self) -> f64 {
        if self.fit_score.is_nan() {
            return 0.0;
        }
        self.fit_score.clamp(0.0, 100.0)
    }

    /// 表示用スコア文字列（"85%"）
    pub fn score_label(&self) -> String {
        format!("{}%", format_score(self.fit_score))
    }

    pub fn matched_tags(&self) -> Vec<SkillTag> {
        self.matched.iter().map(|s| SkillTag::parse(s)).collect()
    }

    pub fn missing_tags(&self) -> Vec<SkillTag> {
        self.missing.iter().map(|s| SkillTag::parse(s)).collect()
    }
}

/// 整数値なら小数点なしで出す（85.0 -> "85"）
pub fn format_score(score: f64) -> String {
    if score.fract() == 0.0 && score.is_finite() {
        format!("{}", score as i64)
    } else {
        format!("{:.1}", score)
    }
}

/// スコア色区分
///
/// 境界値は上側に含める（70 -> High, 40 -> Mid）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub const HIGH_THRESHOLD: f64 = 70.0;
    pub const MID_THRESHOLD: f64 = 40.0;

    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            ScoreTier::High
        } else if score >= Self::MID_THRESHOLD {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreTier::High => "high",
            ScoreTier::Mid => "mid",
            ScoreTier::Low => "low",
        }
    }

    /// スコアバーの背景色
    pub fn color(&self) -> &'static str {
        match self {
            ScoreTier::High => "green",
            ScoreTier::Mid => "orange",
            ScoreTier::Low => "red",
        }
    }
}

/// スキルタグ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkillTag {
    /// 完全一致（"Python"）
    Exact(String),
    /// 近似一致（履歴書側 ≈ 求人側）
    Approximate { resume: String, job: String },
}

impl SkillTag {
    /// "a ≈ b" を近似一致として分解する。両辺が同じなら完全一致に畳む
    pub fn parse(raw: &str) -> Self {
        if let Some((left, right)) = raw.split_once(APPROX_SEPARATOR) {
            let left = left.trim();
            let right = right.trim();
            if left == right || right.is_empty() {
                return SkillTag::Exact(left.to_string());
            }
            if left.is_empty() {
                return SkillTag::Exact(right.to_string());
            }
            return SkillTag::Approximate {
                resume: left.to_string(),
                job: right.to_string(),
            };
        }
        SkillTag::Exact(raw.trim().to_string())
    }

    pub fn label(&self) -> String {
        match self {
            SkillTag::Exact(name) => name.clone(),
            SkillTag::Approximate { resume, job } => {
                format!("{} {} {}", resume, APPROX_SEPARATOR, job)
            }
        }
    }

    pub fn is_approximate(&self) -> bool {
        matches!(self, SkillTag::Approximate { .. })
    }
}

/// 選択された履歴書ファイル
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeFile {
    pub name: String,
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

impl ResumeFile {
    /// MIMEタイプはファイル名の拡張子から決める
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_type_for(&name).to_string();
        Self { name, bytes, mime_type }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// 拡張子からMIMEタイプを推定
pub fn mime_type_for(file_name: &str) -> &'static str {
    let ext = file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "pdf" => "application/pdf",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "doc" => "application/msword",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
