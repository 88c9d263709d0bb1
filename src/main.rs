use clap::Parser;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use resume_analyzer::{cli, client, config, error, report};
use resume_analyzer_common::{ResumeFile, UploadForm};
use cli::{Cli, Commands};
use config::Config;
use error::{AnalyzerError, Result};
use std::io::Read;
use std::path::Path;
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze { resume, job_posting, job_file, endpoint, json, no_color } => {
            let client = client::AnalyzerClient::from_config(&config, endpoint.as_deref())?;
            config::validate_endpoint(client.endpoint())?;
            if cli.verbose {
                println!("Endpoint: {}", client.endpoint());
            }

            let mut form = UploadForm::new();
            form.select_file(read_resume(&resume)?);
            form.set_job_posting(read_job_posting(job_posting, job_file.as_deref())?);

            let spinner = (!json).then(|| {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::with_template("{spinner} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb.set_message("⏳ Analyzing resume...");
                pb.enable_steady_tick(Duration::from_millis(100));
                pb
            });

            client::submit(&mut form, &client, cli.verbose).await;

            if let Some(pb) = spinner {
                pb.finish_and_clear();
            }

            if let Some(result) = form.visible_result() {
                if json {
                    println!("{}", serde_json::to_string_pretty(result)?);
                } else {
                    let report = report::ConsoleReport {
                        use_colors: !no_color,
                        verbose: cli.verbose,
                        ..Default::default()
                    };
                    println!("{}", report.render(result));
                }
            } else if let Some(notice) = form.notice() {
                eprintln!("{}", notice.message.as_str().red());
                std::process::exit(1);
            }
        }

        Commands::Config { set_endpoint, show } => {
            let mut config = config;

            if let Some(endpoint) = set_endpoint {
                config.set_endpoint(endpoint)?;
                println!("✔ Endpoint saved");
            }

            if show {
                println!("Settings:");
                println!("  Endpoint: {}", config.endpoint);
                println!("  Effective endpoint: {}", config.resolve_endpoint(None));
                println!(
                    "  Timeout: {}",
                    config
                        .timeout_seconds
                        .map(|s| format!("{}s", s))
                        .unwrap_or_else(|| "none".to_string())
                );
                println!("  Config file: {}", Config::config_path()?.display());
            }
        }
    }

    Ok(())
}

fn read_resume(path: &Path) -> Result<ResumeFile> {
    if !path.is_file() {
        return Err(AnalyzerError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "resume".to_string());
    Ok(ResumeFile::new(name, bytes))
}

/// 引数 > ファイル（"-" なら標準入力）。どちらもなければ空文字
fn read_job_posting(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    match file {
        Some(path) if path == Path::new("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => {
            if !path.is_file() {
                return Err(AnalyzerError::FileNotFound(path.display().to_string()));
            }
            Ok(std::fs::read_to_string(path)?)
        }
        None => Ok(String::new()),
    }
}
