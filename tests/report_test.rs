//! 端末レポート表示テスト

use colored::Color;
use resume_analyzer::report::ConsoleReport;
use resume_analyzer_common::{AnalysisResult, SkillTag};

fn plain(verbose: bool) -> ConsoleReport {
    ConsoleReport {
        use_colors: false,
        verbose,
        bar_width: 20,
    }
}

fn result(score: f64) -> AnalysisResult {
    AnalysisResult {
        fit_score: score,
        matched: vec!["SQL".into(), "Python".into()],
        missing: vec!["Go".into()],
        ..Default::default()
    }
}

#[test]
fn test_score_bar_fill() {
    let report = plain(false);
    assert_eq!(
        report.score_bar(&result(85.0)),
        format!("[{}{}] 85%", "█".repeat(17), "░".repeat(3))
    );
    assert_eq!(report.score_bar(&result(0.0)), format!("[{}] 0%", "░".repeat(20)));
}

#[test]
fn test_score_bar_out_of_range() {
    let report = plain(false);
    assert_eq!(
        report.score_bar(&result(120.0)),
        format!("[{}] 120%", "█".repeat(20))
    );
}

#[test]
fn test_render_lists_tags() {
    let text = plain(false).render(&result(85.0));

    assert!(text.contains("Results"));
    assert!(text.contains("🎯 Fit Score: 85%"));
    assert!(text.contains("[SQL] [Python]"));
    assert!(text.contains("[Go]"));
}

#[test]
fn test_empty_lists_render_empty_line() {
    let empty = AnalysisResult {
        fit_score: 0.0,
        ..Default::default()
    };
    let text = plain(false).render(&empty);
    let lines: Vec<&str> = text.lines().collect();

    let matched_idx = lines.iter().position(|l| *l == "✅ Matched Skills").unwrap();
    assert_eq!(lines[matched_idx + 1], "");
    assert!(text.ends_with("❌ Missing Skills\n"));
}

#[test]
fn test_approximate_tag_label() {
    let tags = vec![SkillTag::parse("teamwork ≈ collaboration")];
    let line = plain(false).tag_line(&tags, Color::Green);
    assert_eq!(line, "[teamwork ≈ collaboration]");
}

#[test]
fn test_verbose_shows_extended_skills() {
    let mut r = result(50.0);
    r.hard_skills_job = vec!["SQL".into(), "Go".into()];

    let quiet = plain(false).render(&r);
    let verbose = plain(true).render(&r);

    assert!(!quiet.contains("Job hard skills"));
    assert!(verbose.contains("Job hard skills: SQL, Go"));
    assert!(!verbose.contains("Resume soft skills"));
}
