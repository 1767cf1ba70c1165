use crate::domain::model::{ImageBackground, Project};
use crate::render::escape::{escape_html, escape_opt, safe_href};
use crate::render::layout::{card_rows, section_heading};
use crate::render::theme::Theme;

pub const MAX_CARD_SKILLS: usize = 3;

pub fn image_background_class(project: &Project) -> &'static str {
    match project.image_background() {
        ImageBackground::White => "bg-white",
        ImageBackground::Black => "bg-black",
        ImageBackground::Gray => "bg-gray-100",
    }
}

pub fn project_image(project: &Project, height_class: &str) -> String {
    match project.image.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(src) => format!(
            "<div class=\"{} {} overflow-hidden\"><img src=\"{}\" alt=\"{}\" class=\"w-full h-full {}\"></div>",
            height_class,
            image_background_class(project),
            escape_html(src),
            escape_opt(project.title.as_deref()),
            project.object_fit_class()
        ),
        _ => String::new(),
    }
}

pub fn project_links(project: &Project, theme: &Theme) -> String {
    let mut links = Vec::new();
    if let Some(href) = project.github_url.as_deref().and_then(safe_href) {
        links.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"text-sm font-semibold hover:underline\" style=\"color: {};\">GitHub</a>",
            href,
            theme.primary
        ));
    }
    if let Some(href) = project.live_url.as_deref().and_then(safe_href) {
        links.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"text-sm font-semibold hover:underline\" style=\"color: {};\">Live Demo</a>",
            href,
            theme.secondary
        ));
    }
    if links.is_empty() {
        return String::new();
    }
    format!("<div class=\"flex gap-4 mt-4\">\n{}\n</div>", links.join("\n"))
}

/// 最多顯示三個技能標籤，其餘以 "+N more" 表示
pub fn skill_tags(skills: &[String], limit: Option<usize>) -> String {
    let shown = limit.map_or(skills.len(), |l| l.min(skills.len()));
    let mut tags: Vec<String> = skills[..shown]
        .iter()
        .map(|skill| {
            format!(
                "<span class=\"px-2 py-1 text-xs font-medium rounded theme-accent-bg\">{}</span>",
                escape_html(skill)
            )
        })
        .collect();

    let hidden = skills.len() - shown;
    if hidden > 0 {
        tags.push(format!(
            "<span class=\"more-badge px-2 py-1 text-xs font-medium rounded bg-gray-200 text-gray-600\">+{} more</span>",
            hidden
        ));
    }

    if tags.is_empty() {
        return String::new();
    }
    format!("<div class=\"flex flex-wrap gap-2 mt-4\">\n{}\n</div>", tags.join("\n"))
}

fn project_card(project: &Project, theme: &Theme) -> String {
    format!(
        r#"<article class="project-card bg-white rounded-xl shadow-md overflow-hidden flex flex-col hover:shadow-xl transition-shadow">
{image}
<div class="p-6 flex flex-col flex-grow">
<h3 class="text-xl font-semibold mb-2" style="color: {primary};">{title}</h3>
<p class="text-gray-600 flex-grow">{summary}</p>
{tags}
{links}
</div>
</article>"#,
        image = project_image(project, "h-48"),
        primary = theme.primary,
        title = escape_opt(project.title.as_deref()),
        summary = escape_opt(project.summary_text()),
        tags = skill_tags(&project.skills, Some(MAX_CARD_SKILLS)),
        links = project_links(project, theme),
    )
}

pub fn render_projects(projects: &[Project], description: Option<&str>, theme: &Theme) -> String {
    if projects.is_empty() {
        return String::new();
    }

    let cards: Vec<String> = projects.iter().map(|p| project_card(p, theme)).collect();
    let intro = match description.filter(|v| !v.trim().is_empty()) {
        Some(text) => format!(
            "<p class=\"max-w-3xl mx-auto text-center text-lg mb-12\">{}</p>",
            escape_html(text)
        ),
        _ => String::new(),
    };

    format!(
        r#"<section id="projects" class="py-20 theme-accent-bg">
<div class="max-w-6xl mx-auto px-6">
{heading}
{intro}
<div class="space-y-8">
{rows}
</div>
<div class="text-center mt-12">
<a href="projects.html" class="inline-block px-6 py-3 rounded-lg font-semibold text-white shadow hover:opacity-90" style="background-color: {primary};">View All Projects</a>
</div>
</div>
</section>"#,
        heading = section_heading("Projects", theme),
        intro = intro,
        rows = card_rows(&cards),
        primary = theme.primary,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::layout::{GRID_ROW_CLASS, PARTIAL_ROW_CLASS};

    fn project(title: &str, skills: &[&str]) -> Project {
        Project {
            title: Some(title.to_string()),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_projects_renders_nothing() {
        assert_eq!(render_projects(&[], Some("intro"), &Theme::default()), "");
    }

    #[test]
    fn test_card_shows_three_skills_and_more_badge() {
        let projects = vec![project("Compiler", &["Rust", "LLVM", "Parsing", "SSA", "Codegen"])];
        let html = render_projects(&projects, None, &Theme::default());

        assert!(html.contains(">Rust<"));
        assert!(html.contains(">Parsing<"));
        assert!(!html.contains(">SSA<"));
        assert!(html.contains("+2 more"));
    }

    #[test]
    fn test_links_keep_web_urls_only() {
        let p = Project {
            github_url: Some("https://github.com/ada/engine".to_string()),
            live_url: Some("javascript:void(0)".to_string()),
            ..Default::default()
        };
        let html = project_links(&p, &Theme::default());

        assert!(html.contains("href=\"https://github.com/ada/engine\""));
        assert!(!html.contains("Live Demo"));
        assert!(!html.contains("javascript:"));
    }

    #[test]
    fn test_exactly_three_skills_has_no_badge() {
        let projects = vec![project("Tool", &["a", "b", "c"])];
        let html = render_projects(&projects, None, &Theme::default());
        assert!(!html.contains("more-badge"));
    }

    #[test]
    fn test_rows_of_three_with_partial_row() {
        let projects: Vec<Project> = (0..5).map(|i| project(&format!("P{}", i), &[])).collect();
        let html = render_projects(&projects, None, &Theme::default());

        assert_eq!(html.matches("project-card ").count(), 5);
        assert_eq!(html.matches(GRID_ROW_CLASS).count(), 1);
        assert_eq!(html.matches(PARTIAL_ROW_CLASS).count(), 1);
    }

    #[test]
    fn test_summary_preferred_over_description() {
        let p = Project {
            summary: Some("short".to_string()),
            description: Some("long form".to_string()),
            ..Default::default()
        };
        let html = render_projects(&[p], None, &Theme::default());
        assert!(html.contains(">short<"));
        assert!(!html.contains("long form"));
    }

    #[test]
    fn test_image_background_and_fit() {
        let p = Project {
            image: Some("shot.png".to_string()),
            image_bg: Some("black".to_string()),
            image_style: Some("contain".to_string()),
            ..Default::default()
        };
        let html = project_image(&p, "h-48");
        assert!(html.contains("bg-black"));
        assert!(html.contains("object-contain"));
    }
}
