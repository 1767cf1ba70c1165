use crate::domain::model::ThemeColors;
use crate::render::escape::escape_html;

pub const DEFAULT_PRIMARY: &str = "#0B3D91";
pub const DEFAULT_SECONDARY: &str = "#17A2B8";
pub const DEFAULT_ACCENT: &str = "#F3F4F6";
pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_TEXT: &str = "#1f2937";

/// Concrete colors for one render pass. Values are already escaped for use
/// inside `style` attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub primary: String,
    pub secondary: String,
    pub accent: String,
    pub background: String,
    pub text: String,
}

impl Theme {
    pub fn resolve(colors: Option<&ThemeColors>) -> Self {
        let pick = |value: Option<&String>, fallback: &str| match value {
            Some(v) if !v.trim().is_empty() => escape_html(v.trim()),
            _ => fallback.to_string(),
        };

        Self {
            primary: pick(colors.and_then(|c| c.primary.as_ref()), DEFAULT_PRIMARY),
            secondary: pick(colors.and_then(|c| c.secondary.as_ref()), DEFAULT_SECONDARY),
            accent: pick(colors.and_then(|c| c.accent.as_ref()), DEFAULT_ACCENT),
            background: pick(colors.and_then(|c| c.background.as_ref()), DEFAULT_BACKGROUND),
            text: pick(colors.and_then(|c| c.text.as_ref()), DEFAULT_TEXT),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::resolve(None)
    }
}
