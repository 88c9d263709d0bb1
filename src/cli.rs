use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "resume-analyzer")]
#[command(about = "Resume & job posting fit analyzer client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 履歴書と求人テキストを解析エンドポイントに送信
    Analyze {
        /// 履歴書ファイル（PDF）
        #[arg(required = true)]
        resume: PathBuf,

        /// 求人テキスト
        #[arg(short = 'j', long, conflicts_with = "job_file")]
        job_posting: Option<String>,

        /// 求人テキストのファイル（"-" で標準入力）
        #[arg(short = 'f', long)]
        job_file: Option<PathBuf>,

        /// 解析エンドポイントURL（設定より優先）
        #[arg(short, long)]
        endpoint: Option<String>,

        /// 結果をJSONで出力
        #[arg(long)]
        json: bool,

        /// 色を付けない
        #[arg(long)]
        no_color: bool,
    },

    /// 設定の表示・変更
    Config {
        /// 解析エンドポイントURLを設定
        #[arg(long)]
        set_endpoint: Option<String>,

        /// 現在の設定を表示
        #[arg(long)]
        show: bool,
    },
}
