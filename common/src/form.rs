//! アップロードフォームの状態
//!
//! 入力（履歴書ファイル、求人テキスト）と表示フェーズを分けて持つ。
//! フェーズは `Idle | Loading | Loaded` のどれか一つなので、
//! 解析中に古い結果が表示されることはない。
//!
//! 状態遷移:
//! - Idle/Loaded -> Loading: 有効な送信（前の結果は破棄）
//! - Loading -> Loaded: 成功
//! - Loading -> Idle: 失敗（エラー通知を出す）

use crate::error::{Error, ValidationError};
use crate::types::{AnalysisResult, ResumeFile};

/// ドロップゾーンの初期表示
pub const DROP_ZONE_PROMPT: &str = "Drag & drop your resume here, or click to select";

/// 表示フェーズ
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading { ticket: u64 },
    Loaded(AnalysisResult),
}

/// 通知の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Validation,
    Error,
}

impl NoticeKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoticeKind::Validation => "validation",
            NoticeKind::Error => "error",
        }
    }
}

/// フォーム内に表示する通知（ブロッキングなアラートの代わり）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn from_error(error: &Error) -> Self {
        let kind = if error.is_request_error() {
            NoticeKind::Error
        } else {
            NoticeKind::Validation
        };
        Self {
            kind,
            message: error.user_message().to_string(),
        }
    }
}

/// 選択ファイルのハンドル
///
/// CLIはバイト列（`ResumeFile`）、ブラウザは`File`オブジェクトをそのまま持つ
pub trait NamedFile: Clone {
    fn file_name(&self) -> String;
}

impl NamedFile for ResumeFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }
}

/// 送信時点で確定したリクエスト内容
///
/// 送信後にテキストを編集してもこの値は変わらない
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzeRequest<F = ResumeFile> {
    pub ticket: u64,
    pub resume: F,
    pub job_posting: String,
}

/// 送信操作の結果
#[derive(Debug, Clone, PartialEq)]
pub enum Submit<F = ResumeFile> {
    /// リクエスト開始
    Started(AnalyzeRequest<F>),
    /// 解析中のため何もしない
    Busy,
    /// 入力不足
    Rejected(ValidationError),
}

/// アップロードフォームの状態
#[derive(Debug, Clone)]
pub struct UploadForm<F = ResumeFile> {
    file: Option<F>,
    job_posting: String,
    phase: Phase,
    notice: Option<Notice>,
    next_ticket: u64,
}

impl<F> Default for UploadForm<F> {
    fn default() -> Self {
        Self {
            file: None,
            job_posting: String::new(),
            phase: Phase::Idle,
            notice: None,
            next_ticket: 0,
        }
    }
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<F: NamedFile> UploadForm<F> {
    /// ファイルを選択（既存の選択は丸ごと置き換え）
    pub fn select_file(&mut self, file: F) {
        self.file = Some(file);
        self.clear_validation_notice();
    }

    /// ドロップされたファイル群から先頭だけを選択。空なら何もしない
    pub fn select_files(&mut self, files: impl IntoIterator<Item = F>) -> bool {
        match files.into_iter().next() {
            Some(file) => {
                self.select_file(file);
                true
            }
            None => false,
        }
    }

    pub fn set_job_posting(&mut self, text: impl Into<String>) {
        self.job_posting = text.into();
        self.clear_validation_notice();
    }

    pub fn file(&self) -> Option<&F> {
        self.file.as_ref()
    }

    pub fn job_posting(&self) -> &str {
        &self.job_posting
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// 表示すべき結果（解析中は常にNone）
    pub fn visible_result(&self) -> Option<&AnalysisResult> {
        match &self.phase {
            Phase::Loaded(result) => Some(result),
            _ => None,
        }
    }

    /// ドロップゾーンの表示文字列
    pub fn drop_zone_label(&self) -> String {
        self.file
            .as_ref()
            .map(|f| f.file_name())
            .unwrap_or_else(|| DROP_ZONE_PROMPT.to_string())
    }

    /// 入力チェック。空白のみのテキストは通す
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.file.is_none() {
            return Err(ValidationError::MissingResume);
        }
        if self.job_posting.is_empty() {
            return Err(ValidationError::MissingJobPosting);
        }
        Ok(())
    }

    /// 送信開始
    ///
    /// 解析中は何もしない。入力不足なら通知だけ出して状態は変えない。
    /// 開始時は前回の結果と通知を破棄してLoadingに入る。
    pub fn begin_submit(&mut self) -> Submit<F> {
        if self.is_loading() {
            return Submit::Busy;
        }

        if let Err(e) = self.validate() {
            self.notice = Some(Notice::from_error(&Error::Validation(e)));
            return Submit::Rejected(e);
        }

        let resume = match &self.file {
            Some(file) => file.clone(),
            None => return Submit::Rejected(ValidationError::MissingResume),
        };

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.phase = Phase::Loading { ticket };
        self.notice = None;

        Submit::Started(AnalyzeRequest {
            ticket,
            resume,
            job_posting: self.job_posting.clone(),
        })
    }

    /// リクエスト完了
    ///
    /// 成功ならLoaded、失敗ならIdleに戻してエラー通知を出す。
    /// 現在待っているリクエスト以外の完了は無視し、falseを返す。
    pub fn complete(&mut self, ticket: u64, outcome: Result<AnalysisResult, Error>) -> bool {
        match self.phase {
            Phase::Loading { ticket: pending } if pending == ticket => {}
            _ => return false,
        }

        match outcome {
            Ok(result) => {
                self.phase = Phase::Loaded(result);
            }
            Err(e) => {
                self.phase = Phase::Idle;
                self.notice = Some(Notice::from_error(&e));
            }
        }
        true
    }

    fn clear_validation_notice(&mut self) {
        if matches!(&self.notice, Some(n) if n.kind == NoticeKind::Validation) {
            self.notice = None;
        }
    }
}
