use crate::domain::model::{PortfolioDocument, SectionId};
use crate::utils::error::{PortfolioError, Result};
use std::fmt;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PortfolioError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PortfolioError::ConfigValidationError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// Non-fatal issue found in a portfolio document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentWarning {
    pub field: String,
    pub message: String,
}

impl DocumentWarning {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for DocumentWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// 外部連結必須是 http/https 絕對網址
pub fn check_external_url(field_name: &str, url_str: &str) -> Option<DocumentWarning> {
    if url_str.trim().is_empty() {
        return None;
    }

    match Url::parse(url_str.trim()) {
        Ok(url) => match url.scheme() {
            "http" | "https" => None,
            scheme => Some(DocumentWarning::new(
                field_name,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Some(DocumentWarning::new(
            field_name,
            format!("'{}' is not an absolute URL ({})", url_str, e),
        )),
    }
}

/// 檢查文件中不影響產生、但可能是筆誤的內容
pub fn lint_document(doc: &PortfolioDocument) -> Vec<DocumentWarning> {
    let mut warnings = Vec::new();

    if let Some(order) = &doc.section_order {
        for (i, id) in order.iter().enumerate() {
            if SectionId::parse(id).is_none() {
                warnings.push(DocumentWarning::new(
                    format!("sectionOrder[{}]", i),
                    format!("Unknown section '{}' is ignored", id),
                ));
            }
        }
    }

    if let Some(skills) = &doc.skills {
        for (i, category) in skills.categories.iter().enumerate() {
            let count = skills.skills.get(&category.id).map_or(0, Vec::len);
            if count == 0 {
                warnings.push(DocumentWarning::new(
                    format!("skills.categories[{}]", i),
                    format!("Category '{}' has no skills and is hidden", category.id),
                ));
            }
        }
    }

    let mut recognized = 0;
    for (i, entry) in doc.timeline.iter().enumerate() {
        if entry.kind().is_some() {
            recognized += 1;
        } else {
            warnings.push(DocumentWarning::new(
                format!("timeline[{}].type", i),
                format!(
                    "Unrecognized type '{}'; expected education, experience or research",
                    entry.kind.as_deref().unwrap_or("")
                ),
            ));
        }
    }
    if !doc.timeline.is_empty() && recognized == 0 {
        warnings.push(DocumentWarning::new(
            "timeline",
            "No entry has a recognized type; the heading falls back to 'Education, Experience & Research'",
        ));
    }

    let mut urls: Vec<(String, &str)> = Vec::new();
    if let Some(github) = doc.links.as_ref().and_then(|l| l.github.as_deref()) {
        urls.push(("links.github".to_string(), github));
    }
    if let Some(linkedin) = doc.contact.as_ref().and_then(|c| c.linkedin.as_deref()) {
        urls.push(("contact.linkedin".to_string(), linkedin));
    }
    for (i, project) in doc.projects.iter().enumerate() {
        if let Some(url) = project.github_url.as_deref() {
            urls.push((format!("projects[{}].githubUrl", i), url));
        }
        if let Some(url) = project.live_url.as_deref() {
            urls.push((format!("projects[{}].liveUrl", i), url));
        }
    }
    for (i, reference) in doc.references.iter().enumerate() {
        if let Some(url) = reference.linkedin.as_deref() {
            urls.push((format!("references[{}].linkedin", i), url));
        }
    }
    warnings.extend(
        urls.iter()
            .filter_map(|(field, url)| check_external_url(field, url)),
    );

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "portfolio.json").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "  ").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_check_external_url() {
        assert!(check_external_url("links.github", "https://github.com/x").is_none());
        assert!(check_external_url("links.github", "").is_none());
        assert!(check_external_url("links.github", "github.com/x").is_some());
        assert!(check_external_url("links.github", "ftp://example.com").is_some());
    }

    #[test]
    fn test_clean_document_has_no_warnings() {
        let doc: PortfolioDocument = serde_json::from_value(json!({
            "sectionOrder": ["hero", "about"],
            "timeline": [{"type": "education"}],
            "links": {"github": "https://github.com/someone"}
        }))
        .unwrap();
        assert!(lint_document(&doc).is_empty());
    }

    #[test]
    fn test_lint_reports_each_issue() {
        let doc: PortfolioDocument = serde_json::from_value(json!({
            "sectionOrder": ["hero", "blog"],
            "skills": {"categories": [{"id": "empty"}], "skills": {}},
            "timeline": [{"type": "hobby"}],
            "projects": [{"liveUrl": "javascript:alert(1)"}]
        }))
        .unwrap();

        let fields: Vec<String> = lint_document(&doc).into_iter().map(|w| w.field).collect();
        assert_eq!(
            fields,
            vec![
                "sectionOrder[1]",
                "skills.categories[0]",
                "timeline[0].type",
                "timeline",
                "projects[0].liveUrl",
            ]
        );
    }
}
