//! Pure HTML rendering of a [`PortfolioDocument`].
//!
//! Nothing in here performs IO or logs; the pipeline wraps it.

pub mod escape;
pub mod icons;
pub mod layout;
pub mod pages;
pub mod sections;
pub mod theme;

use crate::domain::model::{PortfolioDocument, RenderedPage, RenderedSite};
use chrono::Datelike;

pub const INDEX_PAGE: &str = "index.html";
pub const REFERENCES_PAGE: &str = "references.html";
pub const PROJECTS_PAGE: &str = "projects.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Year shown in the footer copyright line.
    pub year: i32,
}

impl RenderOptions {
    pub fn current() -> Self {
        Self {
            year: chrono::Local::now().year(),
        }
    }
}

/// Renders every page the document calls for: the main page always, the
/// references and projects pages only when they have content.
pub fn render_site(doc: &PortfolioDocument, options: &RenderOptions) -> RenderedSite {
    let mut pages = vec![RenderedPage {
        file_name: INDEX_PAGE.to_string(),
        html: pages::render_main_page(doc, options),
    }];

    if doc.has_references_page() {
        pages.push(RenderedPage {
            file_name: REFERENCES_PAGE.to_string(),
            html: pages::render_references_page(doc, options),
        });
    }

    if doc.has_projects_page() {
        pages.push(RenderedPage {
            file_name: PROJECTS_PAGE.to_string(),
            html: pages::render_projects_page(doc, options),
        });
    }

    RenderedSite { pages }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn file_names(site: &RenderedSite) -> Vec<&str> {
        site.pages.iter().map(|p| p.file_name.as_str()).collect()
    }

    #[test]
    fn test_minimal_document_renders_only_index() {
        let site = render_site(&PortfolioDocument::default(), &RenderOptions { year: 2024 });
        assert_eq!(file_names(&site), vec![INDEX_PAGE]);
    }

    #[test]
    fn test_optional_pages_follow_content() {
        let doc: PortfolioDocument = serde_json::from_value(json!({
            "projects": [{"title": "One"}],
            "references": [{"name": "Ref"}]
        }))
        .unwrap();
        let site = render_site(&doc, &RenderOptions { year: 2024 });
        assert_eq!(file_names(&site), vec![INDEX_PAGE, REFERENCES_PAGE, PROJECTS_PAGE]);
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let doc: PortfolioDocument = serde_json::from_value(json!({
            "name": "Ada",
            "skills": {
                "categories": [{"id": "a", "name": "A"}, {"id": "b", "name": "B"}],
                "skills": {"a": ["x"], "b": ["y"]}
            }
        }))
        .unwrap();
        let options = RenderOptions { year: 2024 };
        let first = render_site(&doc, &options);
        let second = render_site(&doc, &options);
        assert_eq!(first.pages[0].html, second.pages[0].html);
    }
}
