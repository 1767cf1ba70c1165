use crate::domain::model::{SkillsData, SkillsDisplayMode};
use crate::render::escape::{escape_html, escape_opt};
use crate::render::icons::resolve_icon;
use crate::render::layout::{card_rows, section_heading};
use crate::render::theme::Theme;
use regex::Regex;
use std::sync::LazyLock;

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r?\n[ \t]*\r?\n").expect("paragraph break pattern is valid"));

/// 以空白行切分段落
pub fn split_paragraphs(text: &str) -> Vec<&str> {
    PARAGRAPH_BREAK
        .split(text)
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .collect()
}

/// 旋轉模式：依分類順序攤平，再重複三次以便無縫捲動
pub fn rotating_sequence(skills: &SkillsData) -> Vec<&str> {
    let flattened: Vec<&str> = skills
        .populated_categories()
        .into_iter()
        .flat_map(|(_, labels)| labels.iter().map(String::as_str))
        .collect();

    let mut repeated = Vec::with_capacity(flattened.len() * 3);
    for _ in 0..3 {
        repeated.extend_from_slice(&flattened);
    }
    repeated
}

fn skill_card(name: Option<&str>, icon: Option<&str>, labels: &[String], index: usize, theme: &Theme) -> String {
    let chips: Vec<String> = labels
        .iter()
        .map(|label| {
            format!(
                "<span class=\"px-3 py-1 rounded-full text-sm font-medium theme-accent-bg\">{}</span>",
                escape_html(label)
            )
        })
        .collect();

    format!(
        r#"<div class="skill-card bg-white rounded-xl shadow-md p-6 hover:shadow-lg transition-shadow">
<div class="flex items-center gap-3 mb-4" style="color: {primary};">
{icon}
<h3 class="text-xl font-semibold">{name}</h3>
</div>
<div class="flex flex-wrap gap-2">
{chips}
</div>
</div>"#,
        primary = theme.primary,
        icon = resolve_icon(icon, name, index),
        name = escape_opt(name),
        chips = chips.join("\n"),
    )
}

fn render_skill_cards(skills: &SkillsData, theme: &Theme) -> String {
    // 圖示的預設輪替使用過濾後的索引
    let cards: Vec<String> = skills
        .populated_categories()
        .into_iter()
        .enumerate()
        .map(|(index, (category, labels))| {
            skill_card(
                category.name.as_deref(),
                category.icon.as_deref(),
                labels,
                index,
                theme,
            )
        })
        .collect();

    if cards.is_empty() {
        return String::new();
    }

    format!(
        "<div class=\"skills-cards space-y-8\">\n{}\n</div>",
        card_rows(&cards)
    )
}

fn render_skill_marquee(skills: &SkillsData, theme: &Theme) -> String {
    let sequence = rotating_sequence(skills);
    if sequence.is_empty() {
        return String::new();
    }

    let items: Vec<String> = sequence
        .iter()
        .map(|label| {
            format!(
                "<span class=\"skill-pill inline-block mx-3 px-5 py-2 rounded-full text-white font-medium whitespace-nowrap\" style=\"background-color: {};\">{}</span>",
                theme.primary,
                escape_html(label)
            )
        })
        .collect();

    format!(
        r#"<style>
@keyframes skills-scroll {{ from {{ transform: translateX(0); }} to {{ transform: translateX(-33.333%); }} }}
.skills-track {{ animation: skills-scroll 40s linear infinite; }}
.skills-marquee:hover .skills-track {{ animation-play-state: paused; }}
</style>
<div class="skills-marquee overflow-hidden py-4">
<div class="skills-track flex w-max">
{items}
</div>
</div>"#,
        items = items.join("\n"),
    )
}

fn render_skills(skills: Option<&SkillsData>, mode: SkillsDisplayMode, theme: &Theme) -> String {
    let Some(skills) = skills else {
        return String::new();
    };

    let body = match mode {
        SkillsDisplayMode::Card => render_skill_cards(skills, theme),
        SkillsDisplayMode::Rotating => render_skill_marquee(skills, theme),
    };
    if body.is_empty() {
        return body;
    }

    format!(
        "<div id=\"skills\" class=\"mt-16\">\n<h3 class=\"text-2xl font-bold text-center mb-8\" style=\"color: {};\">Skills &amp; Expertise</h3>\n{}\n</div>",
        theme.primary, body
    )
}

/// About 區塊，技能內容內嵌其中
pub fn render_about(
    about_text: Option<&str>,
    skills: Option<&SkillsData>,
    mode: SkillsDisplayMode,
    theme: &Theme,
) -> String {
    let paragraphs: Vec<String> = about_text
        .map(split_paragraphs)
        .unwrap_or_default()
        .into_iter()
        .map(|p| format!("<p class=\"mb-4\">{}</p>", escape_html(p)))
        .collect();
    let skills_html = render_skills(skills, mode, theme);

    if paragraphs.is_empty() && skills_html.is_empty() {
        return String::new();
    }

    format!(
        r#"<section id="about" class="py-20">
<div class="max-w-6xl mx-auto px-6">
{heading}
<div class="max-w-3xl mx-auto text-lg leading-relaxed">
{paragraphs}
</div>
{skills}
</div>
</section>"#,
        heading = section_heading("About Me", theme),
        paragraphs = paragraphs.join("\n"),
        skills = skills_html,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::{GRID_ROW_CLASS, PARTIAL_ROW_CLASS};
    use serde_json::json;

    fn skills_with(categories: usize, empty_every: Option<usize>) -> SkillsData {
        let mut cats = Vec::new();
        let mut map = serde_json::Map::new();
        for i in 0..categories {
            cats.push(json!({"id": format!("c{}", i), "name": format!("Category {}", i)}));
            let labels = match empty_every {
                Some(n) if i % n == 0 => json!([]),
                _ => json!([format!("skill-{}", i)]),
            };
            map.insert(format!("c{}", i), labels);
        }
        serde_json::from_value(json!({"categories": cats, "skills": map})).unwrap()
    }

    #[test]
    fn test_split_paragraphs_on_blank_lines() {
        let text = "First line\nstill first.\n\nSecond.\n   \nThird.\n\n\n";
        assert_eq!(
            split_paragraphs(text),
            vec!["First line\nstill first.", "Second.", "Third."]
        );
    }

    #[test]
    fn test_paragraphs_are_escaped() {
        let html = render_about(Some("A & B\n\n<i>C</i>"), None, SkillsDisplayMode::Card, &Theme::default());
        assert!(html.contains("<p class=\"mb-4\">A &amp; B</p>"));
        assert!(html.contains("<p class=\"mb-4\">&lt;i&gt;C&lt;/i&gt;</p>"));
    }

    #[test]
    fn test_empty_about_without_skills_renders_nothing() {
        let html = render_about(None, None, SkillsDisplayMode::Card, &Theme::default());
        assert_eq!(html, "");
    }

    #[test]
    fn test_card_rows_for_filtered_categories() {
        // 7 categories, c0/c3/c6 empty -> 4 populated -> 1 full row + 1 partial
        let skills = skills_with(7, Some(3));
        let html = render_about(None, Some(&skills), SkillsDisplayMode::Card, &Theme::default());

        assert_eq!(html.matches("skill-card ").count(), 4);
        assert_eq!(html.matches(GRID_ROW_CLASS).count(), 1);
        assert_eq!(html.matches(PARTIAL_ROW_CLASS).count(), 1);
        assert!(!html.contains("Category 0"));
        assert!(!html.contains("Category 3"));

        let order: Vec<usize> = ["Category 1", "Category 2", "Category 4", "Category 5"]
            .iter()
            .map(|name| html.find(name).unwrap())
            .collect();
        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_exact_multiple_of_three_has_no_partial_row() {
        let skills = skills_with(6, None);
        let html = render_about(None, Some(&skills), SkillsDisplayMode::Card, &Theme::default());
        assert_eq!(html.matches(GRID_ROW_CLASS).count(), 2);
        assert_eq!(html.matches(PARTIAL_ROW_CLASS).count(), 0);
    }

    #[test]
    fn test_all_categories_empty_hides_skills() {
        let skills = skills_with(3, Some(1));
        let html = render_about(Some("Hi"), Some(&skills), SkillsDisplayMode::Card, &Theme::default());
        assert!(html.contains("Hi"));
        assert!(!html.contains("id=\"skills\""));
    }

    #[test]
    fn test_rotating_sequence_repeats_three_times() {
        let skills: SkillsData = serde_json::from_value(json!({
            "categories": [{"id": "x", "name": "X"}, {"id": "y", "name": "Y"}],
            "skills": {"x": ["a", "b"], "y": ["c"]}
        }))
        .unwrap();

        assert_eq!(
            rotating_sequence(&skills),
            vec!["a", "b", "c", "a", "b", "c", "a", "b", "c"]
        );

        let html = render_about(None, Some(&skills), SkillsDisplayMode::Rotating, &Theme::default());
        assert_eq!(html.matches("skill-pill ").count(), 9);
        assert!(!html.contains("skill-card "));
    }

    #[test]
    fn test_rotating_mode_with_no_skills_renders_nothing() {
        let skills = SkillsData::default();
        let html = render_about(None, Some(&skills), SkillsDisplayMode::Rotating, &Theme::default());
        assert_eq!(html, "");
    }
}
