pub mod about;
pub mod contact;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod timeline;

use crate::domain::model::{PortfolioDocument, SectionId};
use crate::render::theme::Theme;

/// Fragment for one `sectionOrder` entry. `skills` and unknown ids produce
/// an empty fragment; skills are rendered inside `about`.
pub fn render_section(id: &str, doc: &PortfolioDocument, theme: &Theme) -> String {
    match SectionId::parse(id) {
        Some(SectionId::Hero) => hero::render_hero(doc, theme),
        Some(SectionId::About) => about::render_about(
            doc.about_text.as_deref(),
            doc.skills.as_ref(),
            doc.skills_display_mode(),
            theme,
        ),
        Some(SectionId::Projects) => projects::render_projects(
            &doc.projects,
            doc.projects_description.as_deref(),
            theme,
        ),
        Some(SectionId::Timeline) => timeline::render_timeline(&doc.timeline, theme),
        Some(SectionId::Contact) => contact::render_contact(
            doc.contact.as_ref(),
            doc.links.as_ref(),
            doc.contact_intro.as_deref(),
            theme,
        ),
        Some(SectionId::Skills) | None => String::new(),
    }
}

/// Every `sectionOrder` entry paired with its fragment, in order.
pub fn section_fragments(doc: &PortfolioDocument, theme: &Theme) -> Vec<(Option<SectionId>, String)> {
    doc.section_order()
        .iter()
        .map(|id| (SectionId::parse(id), render_section(id, doc, theme)))
        .collect()
}

/// Main-page body: every fragment in `sectionOrder`, joined by newlines.
pub fn render_sections(doc: &PortfolioDocument, theme: &Theme) -> String {
    section_fragments(doc, theme)
        .into_iter()
        .map(|(_, fragment)| fragment)
        .collect::<Vec<_>>()
        .join("\n")
}
