//! 解析結果の表示
//!
//! スコアバー（色はScoreTierで決める）とスキルタグ一覧。
//! 空のリストは空のタグ一覧として描画する。

use leptos::prelude::*;
use resume_analyzer_common::{AnalysisResult, SkillTag};

#[component]
pub fn ResultView(result: AnalysisResult) -> impl IntoView {
    let matched = result.matched_tags();
    let missing = result.missing_tags();

    view! {
        <div class="results">
            <h3>"Results"</h3>
            <ScoreBar result=result />
            <SkillTags title="✅ Matched Skills" kind="matched" tags=matched />
            <SkillTags title="❌ Missing Skills" kind="missing" tags=missing />
        </div>
    }
}

#[component]
fn ScoreBar(result: AnalysisResult) -> impl IntoView {
    let tier = result.tier();
    let label = result.score_label();
    let style = format!(
        "width: {}%; background: {};",
        result.fill_percent(),
        tier.color()
    );

    view! {
        <p class="score-label">{format!("🎯 Fit Score: {}", label)}</p>
        <div class="score-bar">
            <div class=format!("score-fill {}", tier.as_str()) style=style>
                {label}
            </div>
        </div>
    }
}

#[component]
fn SkillTags(
    title: &'static str,
    kind: &'static str,
    tags: Vec<SkillTag>,
) -> impl IntoView {
    view! {
        <div class=format!("skills {}", kind)>
            <h4>{title}</h4>
            <div class="tag-list">
                {tags
                    .into_iter()
                    .map(|tag| {
                        let class = if tag.is_approximate() {
                            "skill-tag approx"
                        } else {
                            "skill-tag"
                        };
                        view! { <span class=class>{tag.label()}</span> }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
