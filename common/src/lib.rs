//! Resume Analyzer Common Library
//!
//! CLIとWeb(WASM)で共有される型とユーティリティ

pub mod types;
pub mod error;
pub mod form;
pub mod parser;

/// 解析エンドポイント（固定）
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/analyze";

/// multipartのフィールド名
pub const RESUME_FIELD: &str = "resume";
pub const JOB_POSTING_FIELD: &str = "job_posting";

pub use types::{AnalysisResult, ResumeFile, ScoreTier, SkillTag};
pub use error::{Error, Result, ValidationError};
pub use form::{AnalyzeRequest, NamedFile, Notice, NoticeKind, Phase, Submit, UploadForm};
pub use parser::parse_analysis_response;
