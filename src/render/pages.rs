use crate::domain::model::{PortfolioDocument, Project, Reference, SectionId};
use crate::render::escape::{escape_html, escape_opt, escape_or, safe_href};
use crate::render::layout::{document_end, document_head, section_heading};
use crate::render::sections::footer::render_footer;
use crate::render::sections::hero::PLACEHOLDER_NAME;
use crate::render::sections::projects::{project_image, project_links, skill_tags};
use crate::render::sections::section_fragments;
use crate::render::theme::Theme;
use crate::render::RenderOptions;

fn nav_label(id: SectionId) -> Option<&'static str> {
    match id {
        SectionId::About => Some("About"),
        SectionId::Projects => Some("Projects"),
        SectionId::Timeline => Some("Journey"),
        SectionId::Contact => Some("Contact"),
        SectionId::Hero | SectionId::Skills => None,
    }
}

fn nav_bar(brand: &str, links: &[String], theme: &Theme) -> String {
    format!(
        r#"<nav class="sticky top-0 z-50 bg-white/95 backdrop-blur shadow-sm">
<div class="max-w-6xl mx-auto px-6 py-4 flex items-center justify-between">
<a href="index.html" class="text-xl font-bold" style="color: {primary};">{brand}</a>
<div class="flex flex-wrap gap-6 text-sm font-medium">
{links}
</div>
</div>
</nav>"#,
        primary = theme.primary,
        brand = brand,
        links = links.join("\n"),
    )
}

fn nav_link(href: &str, label: &str) -> String {
    format!(
        "<a href=\"{}\" class=\"text-gray-700 hover:opacity-70\">{}</a>",
        href, label
    )
}

fn page_banner(title: &str, subtitle: &str, theme: &Theme) -> String {
    format!(
        r#"<header class="py-20 text-white text-center" style="background: linear-gradient(135deg, {primary} 0%, {secondary} 100%);">
<div class="max-w-4xl mx-auto px-6">
<h1 class="text-4xl md:text-5xl font-bold mb-4">{title}</h1>
<p class="text-lg opacity-90">{subtitle}</p>
</div>
</header>"#,
        primary = theme.primary,
        secondary = theme.secondary,
        title = title,
        subtitle = subtitle,
    )
}

fn page_footer(doc: &PortfolioDocument, options: &RenderOptions, theme: &Theme) -> String {
    render_footer(
        doc.name.as_deref(),
        doc.title.as_deref(),
        &doc.footer_descriptors,
        options.year,
        theme,
    )
}

fn brand(doc: &PortfolioDocument) -> String {
    escape_or(doc.name.as_deref(), PLACEHOLDER_NAME)
}

fn page_title(doc: &PortfolioDocument, suffix: Option<&str>) -> String {
    let name = match doc.name.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(n) => n.trim(),
        _ => "Portfolio",
    };
    match suffix {
        Some(suffix) => format!("{} | {}", suffix, name),
        None => name.to_string(),
    }
}

/// `index.html`: sections in `sectionOrder`, then the footer.
pub fn render_main_page(doc: &PortfolioDocument, options: &RenderOptions) -> String {
    let theme = Theme::resolve(doc.theme_colors.as_ref());
    let fragments = section_fragments(doc, &theme);

    let mut seen = Vec::new();
    let mut links = Vec::new();
    for (id, fragment) in &fragments {
        let Some(id) = id else { continue };
        if fragment.is_empty() || seen.contains(id) {
            continue;
        }
        seen.push(*id);
        if let Some(label) = nav_label(*id) {
            links.push(nav_link(&format!("#{}", id.as_str()), label));
        }
    }
    if doc.has_references_page() {
        links.push(nav_link("references.html", "References"));
    }

    let body = fragments
        .into_iter()
        .map(|(_, fragment)| fragment)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{head}\n{nav}\n<main>\n{body}\n</main>\n{footer}\n{end}",
        head = document_head(&page_title(doc, None), &theme),
        nav = nav_bar(&brand(doc), &links, &theme),
        body = body,
        footer = page_footer(doc, options, &theme),
        end = document_end(),
    )
}

fn reference_card(reference: &Reference, theme: &Theme) -> String {
    let position = [reference.title.as_deref(), reference.company.as_deref()]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .map(escape_html)
        .collect::<Vec<_>>()
        .join(" at ");

    let relationship = match reference.relationship.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(text) => format!(
            "<p class=\"text-sm italic text-gray-500 mb-4\">{}</p>",
            escape_html(text)
        ),
        _ => String::new(),
    };

    let testimonial = match reference.testimonial_text().filter(|v| !v.trim().is_empty()) {
        Some(text) => format!(
            "<blockquote class=\"border-l-4 pl-4 text-gray-700 italic mb-4\" style=\"border-color: {};\">&ldquo;{}&rdquo;</blockquote>",
            theme.secondary,
            escape_html(text)
        ),
        _ => String::new(),
    };

    let mut contacts = Vec::new();
    if let Some(email) = reference.email.as_deref().filter(|v| !v.trim().is_empty()) {
        let email = escape_html(email);
        contacts.push(format!(
            "<a href=\"mailto:{}\" class=\"hover:underline\" style=\"color: {};\">{}</a>",
            email, theme.primary, email
        ));
    }
    if let Some(phone) = reference.phone.as_deref().filter(|v| !v.trim().is_empty()) {
        let phone = escape_html(phone);
        contacts.push(format!(
            "<a href=\"tel:{}\" class=\"hover:underline\" style=\"color: {};\">{}</a>",
            phone, theme.primary, phone
        ));
    }
    if let Some(href) = reference.linkedin.as_deref().and_then(safe_href) {
        contacts.push(format!(
            "<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"hover:underline\" style=\"color: {};\">LinkedIn</a>",
            href,
            theme.primary
        ));
    }
    let contacts = if contacts.is_empty() {
        String::new()
    } else {
        format!(
            "<div class=\"flex flex-wrap gap-4 text-sm font-medium\">\n{}\n</div>",
            contacts.join("\n")
        )
    };

    format!(
        r#"<article class="reference-card bg-white rounded-xl shadow-md p-8">
<h3 class="text-2xl font-semibold" style="color: {primary};">{name}</h3>
<p class="text-gray-600 mb-1">{position}</p>
{relationship}
{testimonial}
{contacts}
</article>"#,
        primary = theme.primary,
        name = escape_opt(reference.name.as_deref()),
        position = position,
        relationship = relationship,
        testimonial = testimonial,
        contacts = contacts,
    )
}

/// `references.html`; callers check [`PortfolioDocument::has_references_page`].
pub fn render_references_page(doc: &PortfolioDocument, options: &RenderOptions) -> String {
    let theme = Theme::resolve(doc.theme_colors.as_ref());

    let document_link = match doc.references_url.as_deref().and_then(safe_href) {
        Some(href) => format!(
            "<div class=\"text-center mb-12\">\n<a href=\"{}\" target=\"_blank\" rel=\"noopener\" class=\"inline-block px-6 py-3 rounded-lg font-semibold text-white shadow hover:opacity-90\" style=\"background-color: {};\">View Full References Document</a>\n</div>",
            href,
            theme.primary
        ),
        None => String::new(),
    };

    let cards = if doc.references.is_empty() {
        "<p class=\"text-center text-gray-600\">References are available in the document linked above.</p>".to_string()
    } else {
        let cards: Vec<String> = doc
            .references
            .iter()
            .map(|reference| reference_card(reference, &theme))
            .collect();
        format!(
            "<div class=\"grid grid-cols-1 md:grid-cols-2 gap-8\">\n{}\n</div>",
            cards.join("\n")
        )
    };

    format!(
        r#"{head}
{nav}
{banner}
<main class="py-16">
<div class="max-w-5xl mx-auto px-6">
{heading}
{document_link}
{cards}
</div>
</main>
{footer}
{end}"#,
        head = document_head(&page_title(doc, Some("References")), &theme),
        nav = nav_bar(&brand(doc), &[nav_link("index.html", "Back to Portfolio")], &theme),
        banner = page_banner(
            "Professional References",
            "What colleagues and mentors have to say",
            &theme
        ),
        heading = section_heading("References", &theme),
        document_link = document_link,
        cards = cards,
        footer = page_footer(doc, options, &theme),
        end = document_end(),
    )
}

fn project_detail(project: &Project, theme: &Theme) -> String {
    // 完整頁面優先顯示完整描述
    let description = project
        .description
        .as_deref()
        .filter(|d| !d.trim().is_empty())
        .or(project.summary_text());

    let technologies = if project.technologies.is_empty() {
        String::new()
    } else {
        format!(
            "<p class=\"text-sm text-gray-500 mt-4\"><span class=\"font-semibold\">Technologies:</span> {}</p>",
            project
                .technologies
                .iter()
                .map(|t| escape_html(t))
                .collect::<Vec<_>>()
                .join(", ")
        )
    };

    format!(
        r#"<article class="project-detail bg-white rounded-xl shadow-md overflow-hidden flex flex-col">
{image}
<div class="p-8 flex flex-col flex-grow">
<h2 class="text-2xl font-semibold mb-3" style="color: {primary};">{title}</h2>
<p class="text-gray-700 leading-relaxed flex-grow">{description}</p>
{technologies}
{tags}
{links}
</div>
</article>"#,
        image = project_image(project, "h-56"),
        primary = theme.primary,
        title = escape_opt(project.title.as_deref()),
        description = escape_opt(description),
        technologies = technologies,
        tags = skill_tags(&project.skills, None),
        links = project_links(project, theme),
    )
}

/// `projects.html`; callers check [`PortfolioDocument::has_projects_page`].
pub fn render_projects_page(doc: &PortfolioDocument, options: &RenderOptions) -> String {
    let theme = Theme::resolve(doc.theme_colors.as_ref());
    let details: Vec<String> = doc
        .projects
        .iter()
        .map(|project| project_detail(project, &theme))
        .collect();

    let subtitle = match doc.projects_description.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(text) => escape_html(text),
        _ => "A closer look at things I have built".to_string(),
    };

    format!(
        r#"{head}
{nav}
{banner}
<main class="py-16">
<div class="max-w-6xl mx-auto px-6">
<div class="grid grid-cols-1 md:grid-cols-2 gap-10">
{details}
</div>
</div>
</main>
{footer}
{end}"#,
        head = document_head(&page_title(doc, Some("Projects")), &theme),
        nav = nav_bar(&brand(doc), &[nav_link("index.html", "Back to Portfolio")], &theme),
        banner = page_banner("All Projects", &subtitle, &theme),
        details = details.join("\n"),
        footer = page_footer(doc, options, &theme),
        end = document_end(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const OPTIONS: RenderOptions = RenderOptions { year: 2030 };

    fn doc(value: serde_json::Value) -> PortfolioDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_main_page_is_complete_document() {
        let html = render_main_page(&doc(json!({"name": "Ada"})), &OPTIONS);
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.trim_end().ends_with("</html>"));
        assert_eq!(html.matches("<footer").count(), 1);
        assert!(html.contains("<title>Ada</title>"));
    }

    #[test]
    fn test_main_page_nav_only_lists_rendered_sections() {
        let html = render_main_page(
            &doc(json!({"aboutText": "Hi", "projects": []})),
            &OPTIONS,
        );
        assert!(html.contains("href=\"#about\""));
        assert!(html.contains("href=\"#contact\""));
        assert!(!html.contains("href=\"#projects\""));
        assert!(!html.contains("href=\"#timeline\""));
        assert!(!html.contains("href=\"references.html\""));
    }

    #[test]
    fn test_references_page_with_only_url() {
        let d = doc(json!({"referencesUrl": "https://example.com/refs.pdf"}));
        let html = render_references_page(&d, &OPTIONS);
        assert!(html.contains("href=\"https://example.com/refs.pdf\""));
        assert!(html.contains("available in the document linked above"));
        assert_eq!(html.matches("reference-card ").count(), 0);
    }

    #[test]
    fn test_reference_cards() {
        let d = doc(json!({
            "references": [
                {
                    "name": "Grace",
                    "title": "Rear Admiral",
                    "company": "US Navy",
                    "relationship": "Former manager",
                    "testimonial": "Ada is <great>",
                    "email": "grace@example.com"
                },
                {"name": "Alan", "description": "Sharp", "testimonial": "ignored"}
            ]
        }));
        let html = render_references_page(&d, &OPTIONS);

        assert_eq!(html.matches("reference-card ").count(), 2);
        assert!(html.contains("Rear Admiral at US Navy"));
        assert!(html.contains("Ada is &lt;great&gt;"));
        assert!(html.contains("mailto:grace@example.com"));
        assert!(html.contains("&ldquo;Sharp&rdquo;"));
        assert!(!html.contains("ignored"));
        assert!(!html.contains("View Full References Document"));
    }

    #[test]
    fn test_projects_page_lists_every_project_in_full() {
        let d = doc(json!({
            "projects": [{
                "title": "Parser",
                "summary": "short",
                "description": "the long story",
                "skills": ["a", "b", "c", "d", "e"],
                "technologies": ["Rust", "WASM"],
                "liveUrl": "https://demo.example.com"
            }]
        }));
        let html = render_projects_page(&d, &OPTIONS);

        assert_eq!(html.matches("project-detail ").count(), 1);
        assert!(html.contains("the long story"));
        assert!(html.contains(">e<"));
        assert!(!html.contains("more</span>"));
        assert!(html.contains("Rust, WASM"));
        assert!(html.contains("Live Demo"));
        assert!(html.contains("<title>Projects | Portfolio</title>"));
    }
}
