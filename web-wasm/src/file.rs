//! ブラウザで選択されたファイル
//!
//! 選択時には読み込まず、`File`オブジェクトのまま持って送信時にそのまま添付する。

use resume_analyzer_common::{NamedFile, UploadForm};
use web_sys::{File, FileList};

/// ドロップ・選択された`File`
#[derive(Debug, Clone, PartialEq)]
pub struct DroppedFile(pub File);

impl NamedFile for DroppedFile {
    fn file_name(&self) -> String {
        self.0.name()
    }
}

/// ブラウザ側のフォーム状態
pub type WebForm = UploadForm<DroppedFile>;

/// FileListを並び順のままVecにする
pub fn collect_files(files: &FileList) -> Vec<DroppedFile> {
    (0..files.length())
        .filter_map(|i| files.get(i))
        .map(DroppedFile)
        .collect()
}
