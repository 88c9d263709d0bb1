//! 解析結果の端末表示

use colored::{Color, Colorize};
use resume_analyzer_common::{AnalysisResult, ScoreTier, SkillTag};

/// 端末向けレポート
pub struct ConsoleReport {
    pub use_colors: bool,
    pub verbose: bool,
    pub bar_width: usize,
}

impl Default for ConsoleReport {
    fn default() -> Self {
        Self {
            use_colors: true,
            verbose: false,
            bar_width: 40,
        }
    }
}

impl ConsoleReport {
    pub fn render(&self, result: &AnalysisResult) -> String {
        let mut lines = Vec::new();

        lines.push(self.paint("Results", None, true));
        lines.push(format!("🎯 Fit Score: {}", result.score_label()));
        lines.push(self.score_bar(result));
        lines.push(String::new());

        lines.push(self.paint("✅ Matched Skills", None, true));
        lines.push(self.tag_line(&result.matched_tags(), Color::Green));
        lines.push(String::new());

        lines.push(self.paint("❌ Missing Skills", None, true));
        lines.push(self.tag_line(&result.missing_tags(), Color::Red));

        if self.verbose {
            let details = [
                ("Resume hard skills", &result.hard_skills_resume),
                ("Job hard skills", &result.hard_skills_job),
                ("Resume soft skills", &result.soft_skills_resume),
                ("Job soft skills", &result.soft_skills_job),
            ];
            let details: Vec<_> = details.iter().filter(|(_, v)| !v.is_empty()).collect();
            if !details.is_empty() {
                lines.push(String::new());
                for (label, skills) in details {
                    lines.push(format!("  {}: {}", label, skills.join(", ")));
                }
            }
        }

        lines.join("\n")
    }

    /// `[██████░░░░] 85%` 形式のスコアバー
    pub fn score_bar(&self, result: &AnalysisResult) -> String {
        let filled = ((result.fill_percent() / 100.0) * self.bar_width as f64).round() as usize;
        let filled = filled.min(self.bar_width);
        let bar = format!(
            "{}{}",
            "█".repeat(filled),
            "░".repeat(self.bar_width - filled)
        );

        format!(
            "[{}] {}",
            self.paint(&bar, Some(tier_color(result.tier())), false),
            result.score_label()
        )
    }

    /// スキルタグを1行に並べる。空なら空行
    pub fn tag_line(&self, tags: &[SkillTag], color: Color) -> String {
        tags.iter()
            .map(|tag| {
                let text = format!("[{}]", tag.label());
                if tag.is_approximate() && self.use_colors {
                    text.color(color).italic().to_string()
                } else {
                    self.paint(&text, Some(color), false)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn paint(&self, text: &str, color: Option<Color>, bold: bool) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        let mut styled = text.normal();
        if let Some(color) = color {
            styled = styled.color(color);
        }
        if bold {
            styled = styled.bold();
        }
        styled.to_string()
    }
}

/// 色区分（Webのgreen/orange/redに合わせる）
pub fn tier_color(tier: ScoreTier) -> Color {
    match tier {
        ScoreTier::High => Color::Green,
        ScoreTier::Mid => Color::TrueColor { r: 255, g: 165, b: 0 },
        ScoreTier::Low => Color::Red,
    }
}
