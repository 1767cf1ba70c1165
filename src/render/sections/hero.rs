use crate::domain::model::{PortfolioDocument, SectionId};
use crate::render::escape::{escape_html, escape_or, safe_href};
use crate::render::icons::person_icon;
use crate::render::theme::Theme;

pub const PLACEHOLDER_NAME: &str = "Your Name";
pub const PLACEHOLDER_TITLE: &str = "Your Title";
pub const PLACEHOLDER_BIO: &str = "Welcome to my portfolio.";

fn headshot(doc: &PortfolioDocument, theme: &Theme) -> String {
    match doc.headshot_image.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(src) => format!(
            "<img src=\"{}\" alt=\"{}\" class=\"w-40 h-40 md:w-48 md:h-48 rounded-full object-cover shadow-xl border-4\" style=\"border-color: {};\">",
            escape_html(src),
            escape_or(doc.name.as_deref(), PLACEHOLDER_NAME),
            theme.secondary
        ),
        _ => format!(
            "<div class=\"w-40 h-40 md:w-48 md:h-48 rounded-full flex items-center justify-center shadow-xl theme-accent-bg\" style=\"color: {};\">{}</div>",
            theme.primary,
            person_icon("w-24 h-24")
        ),
    }
}

fn actions(doc: &PortfolioDocument, theme: &Theme) -> String {
    let mut buttons = Vec::new();

    if let Some(href) = doc.resume_url.as_deref().and_then(safe_href) {
        buttons.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"px-6 py-3 rounded-lg font-semibold text-white shadow hover:opacity-90\" style=\"background-color: {};\">Download Resume</a>",
            href,
            theme.secondary
        ));
    }

    // 只有 contact 區塊會被輸出時才連到 #contact
    if doc.shows_section(SectionId::Contact) {
        buttons.push(
            "<a href=\"#contact\" class=\"px-6 py-3 rounded-lg font-semibold bg-white shadow hover:bg-gray-100\" style=\"color: #1f2937;\">Get in Touch</a>"
                .to_string(),
        );
    }

    if doc.has_references_page() {
        buttons.push(
            "<a href=\"references.html\" class=\"px-6 py-3 rounded-lg font-semibold border-2 border-white text-white hover:bg-white/10\">References</a>"
                .to_string(),
        );
    }

    format!(
        "<div class=\"flex flex-wrap gap-4 justify-center md:justify-start\">\n{}\n</div>",
        buttons.join("\n")
    )
}

pub fn render_hero(doc: &PortfolioDocument, theme: &Theme) -> String {
    format!(
        r#"<section id="hero" class="min-h-[70vh] flex items-center text-white" style="background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);">
<div class="max-w-6xl mx-auto px-6 py-20 flex flex-col md:flex-row items-center gap-12">
<div class="flex-shrink-0">
{headshot}
</div>
<div class="text-center md:text-left">
<h1 class="text-4xl md:text-6xl font-bold mb-4">{name}</h1>
<p class="text-xl md:text-2xl mb-6 opacity-90">{title}</p>
<p class="text-lg mb-8 max-w-2xl opacity-80">{bio}</p>
{actions}
</div>
</div>
</section>"#,
        primary = theme.primary,
        secondary = theme.secondary,
        headshot = headshot(doc, theme),
        name = escape_or(doc.name.as_deref(), PLACEHOLDER_NAME),
        title = escape_or(doc.title.as_deref(), PLACEHOLDER_TITLE),
        bio = escape_or(doc.bio.as_deref(), PLACEHOLDER_BIO),
        actions = actions(doc, theme),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders_when_fields_missing() {
        let html = render_hero(&PortfolioDocument::default(), &Theme::default());
        assert!(html.contains(PLACEHOLDER_NAME));
        assert!(html.contains(PLACEHOLDER_TITLE));
        assert!(html.contains(PLACEHOLDER_BIO));
        assert!(html.contains("<svg"));
        assert!(!html.contains("<img"));
    }

    #[test]
    fn test_headshot_replaces_placeholder_icon() {
        let doc = PortfolioDocument {
            name: Some("Ada".to_string()),
            headshot_image: Some("images/ada.jpg".to_string()),
            ..Default::default()
        };
        let html = render_hero(&doc, &Theme::default());
        assert!(html.contains("<img src=\"images/ada.jpg\" alt=\"Ada\""));
        assert!(!html.contains("<svg"));
    }

    #[test]
    fn test_optional_buttons() {
        let mut doc = PortfolioDocument::default();
        let html = render_hero(&doc, &Theme::default());
        assert!(!html.contains("Download Resume"));
        assert!(!html.contains("references.html"));
        assert!(html.contains("href=\"#contact\""));

        doc.resume_url = Some("resume.pdf".to_string());
        doc.references_url = Some("refs.pdf".to_string());
        let html = render_hero(&doc, &Theme::default());
        assert!(html.contains("href=\"resume.pdf\""));
        assert!(html.contains("href=\"references.html\""));
    }

    #[test]
    fn test_contact_button_needs_contact_section() {
        let doc = PortfolioDocument {
            section_order: Some(vec!["hero".to_string(), "projects".to_string()]),
            ..Default::default()
        };
        let html = render_hero(&doc, &Theme::default());
        assert!(!html.contains("href=\"#contact\""));
        assert!(!html.contains("Get in Touch"));
    }

    #[test]
    fn test_script_resume_link_is_dropped() {
        let doc = PortfolioDocument {
            resume_url: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };
        let html = render_hero(&doc, &Theme::default());
        assert!(!html.contains("javascript:"));
        assert!(!html.contains("Download Resume"));
    }

    #[test]
    fn test_text_is_escaped() {
        let doc = PortfolioDocument {
            name: Some("<script>x</script>".to_string()),
            ..Default::default()
        };
        let html = render_hero(&doc, &Theme::default());
        assert!(html.contains("&lt;script&gt;x&lt;/script&gt;"));
        assert!(!html.contains("<script>x"));
    }
}
