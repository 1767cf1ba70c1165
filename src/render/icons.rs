//! Skill-category icon lookup.
//!
//! Icons are resolved from a static table keyed by normalized identifiers.
//! Unknown identifiers rotate through [`DEFAULT_ICONS`] by category position,
//! so the same document always renders the same icons.

const STAR: &str = "M11.48 3.5a.56.56 0 0 1 1.04 0l2.13 5.11a.56.56 0 0 0 .47.35l5.52.44c.5.04.7.66.32.99l-4.2 3.6a.56.56 0 0 0-.18.56l1.28 5.39a.56.56 0 0 1-.84.61l-4.72-2.89a.56.56 0 0 0-.59 0l-4.72 2.89a.56.56 0 0 1-.84-.61l1.28-5.39a.56.56 0 0 0-.18-.56l-4.2-3.6a.56.56 0 0 1 .32-.99l5.52-.44a.56.56 0 0 0 .47-.35L11.48 3.5Z";
const CHECK: &str = "M9 12.75 11.25 15 15 9.75M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z";
const PEOPLE: &str = "M15 19.13a9.38 9.38 0 0 0 6.75-.58 4.13 4.13 0 0 0-7.53-2.49M15 19.13v-.01c0-1.11-.29-2.16-.79-3.07M15 19.13A12.32 12.32 0 0 1 2.25 19.23a6.38 6.38 0 0 1 11.96-3.18M12 6.38a3.38 3.38 0 1 1-6.75 0 3.38 3.38 0 0 1 6.75 0Zm8.25 2.25a2.63 2.63 0 1 1-5.25 0 2.63 2.63 0 0 1 5.25 0Z";
const CODE: &str = "M17.25 6.75 22.5 12l-5.25 5.25m-10.5 0L1.5 12l5.25-5.25m7.5-3-4.5 16.5";
const TOOL: &str = "M11.42 15.17 17.25 21A2.65 2.65 0 0 0 21 17.25l-5.88-5.88M11.42 15.17l2.5-3.03c.32-.38.74-.63 1.2-.77M11.42 15.17l-4.66 5.65a2.55 2.55 0 1 1-3.58-3.58l6.84-5.63m5.1-.23a4.5 4.5 0 0 0 6.23-6.2l-3.28 3.28a3 3 0 0 1-2.25-2.25l3.28-3.28a4.5 4.5 0 0 0-6.34 4.49c.1 1.08-.07 2.26-.9 2.95l-.1.09";
const DESIGN: &str = "M9.53 16.12a3 3 0 0 0-5.78 1.13 2.25 2.25 0 0 1-2.4 2.25 4.5 4.5 0 0 0 8.4-2.25c0-.4-.08-.78-.22-1.13Zm0 0a15.99 15.99 0 0 0 3.39-1.62m-5.04-.03a16 16 0 0 1 1.62-3.39m3.42 3.42a15.99 15.99 0 0 0 4.76-4.65l3.88-5.81a1.15 1.15 0 0 0-1.6-1.6l-5.81 3.88a16 16 0 0 0-4.65 4.76m3.42 3.42a6.78 6.78 0 0 0-3.42-3.42";
const LANGUAGE: &str = "m10.5 21 5.25-11.25L21 21m-9-3h7.5M3 5.62a48.47 48.47 0 0 1 6-.37m0 0c1.12 0 2.23.04 3.32.11M9 5.25V3m3.33 2.36C11.18 10.62 7.7 15 3.42 17.3m8.91-11.94c.9.07 1.79.17 2.67.3m-6.26 2.3a15.1 15.1 0 0 0 5.6 5.15";
const HEART: &str = "M21 8.25c0-2.49-2.1-4.5-4.69-4.5-1.93 0-3.6 1.13-4.31 2.73-.72-1.6-2.38-2.73-4.31-2.73C5.1 3.75 3 5.76 3 8.25c0 7.22 9 12 9 12s9-4.78 9-12Z";
const CERTIFICATE: &str = "M9 12.75 11.25 15 15 9.75M21 12c0 1.27-.63 2.39-1.59 3.07a3.75 3.75 0 0 1-4.34 4.34A3.74 3.74 0 0 1 12 21a3.74 3.74 0 0 1-3.07-1.59 3.75 3.75 0 0 1-4.34-4.34A3.74 3.74 0 0 1 3 12c0-1.27.63-2.39 1.59-3.07a3.75 3.75 0 0 1 4.34-4.34A3.74 3.74 0 0 1 12 3c1.27 0 2.39.63 3.07 1.59a3.75 3.75 0 0 1 4.34 4.34A3.74 3.74 0 0 1 21 12Z";
const FRAMEWORK: &str = "M6.43 9.75 2.25 12l4.18 2.25m0-4.5 5.57 3 5.57-3m-11.14 0L2.25 7.5 12 2.25l9.75 5.25-4.18 2.25m0 0L21.75 12l-4.18 2.25m0 0 4.18 2.25L12 21.75 2.25 16.5l4.18-2.25m11.14 0-5.57 3-5.57-3";
const DATABASE: &str = "M20.25 6.38c0 2.28-3.69 4.12-8.25 4.12S3.75 8.66 3.75 6.38m16.5 0c0-2.28-3.69-4.13-8.25-4.13S3.75 4.1 3.75 6.38m16.5 0v11.24c0 2.28-3.69 4.13-8.25 4.13s-8.25-1.85-8.25-4.13V6.38m16.5 5.62c0 2.28-3.69 4.13-8.25 4.13S3.75 14.28 3.75 12";
const CLOUD: &str = "M2.25 15a4.5 4.5 0 0 0 4.5 4.5H18a3.75 3.75 0 0 0 1.33-7.26 3 3 0 0 0-3.76-3.95A5.25 5.25 0 0 0 5.4 10.12 4.5 4.5 0 0 0 2.25 15Z";
const MOBILE: &str = "M10.5 1.5H8.25A2.25 2.25 0 0 0 6 3.75v16.5a2.25 2.25 0 0 0 2.25 2.25h7.5A2.25 2.25 0 0 0 18 20.25V3.75a2.25 2.25 0 0 0-2.25-2.25H13.5m-3 0V3h3V1.5m-3 0h3m-3 18.75h3";
const CHART: &str = "M3 13.13C3 12.5 3.5 12 4.13 12h2.25c.62 0 1.12.5 1.12 1.13v6.75c0 .62-.5 1.12-1.12 1.12H4.13C3.5 21 3 20.5 3 19.88v-6.75ZM9.75 8.63c0-.63.5-1.13 1.13-1.13h2.25c.62 0 1.12.5 1.12 1.13v11.25c0 .62-.5 1.12-1.12 1.12h-2.25c-.63 0-1.13-.5-1.13-1.12V8.63ZM16.5 4.13c0-.63.5-1.13 1.13-1.13h2.25C20.5 3 21 3.5 21 4.13v15.75c0 .62-.5 1.12-1.12 1.12h-2.25c-.63 0-1.13-.5-1.13-1.12V4.13Z";
const RESEARCH: &str = "M9.75 3.1v5.71a2.25 2.25 0 0 1-.66 1.59L5 14.5M9.75 3.1a24.3 24.3 0 0 1 4.5 0m0 0v5.71c0 .6.24 1.17.66 1.59L19.8 15.3M14.25 3.1c.25.02.5.05.75.08M19.8 15.3l-1.57.39a9.07 9.07 0 0 1-6.23-.69 9.07 9.07 0 0 0-6.23-.69L5 14.5m14.8.8 1.4 1.4c1.23 1.23.65 3.33-1.07 3.62A48.3 48.3 0 0 1 12 21a48.3 48.3 0 0 1-8.13-.69c-1.72-.29-2.3-2.39-1.07-3.62L5 14.5";
const CHAT: &str = "M8.63 12a.38.38 0 1 1-.75 0 .38.38 0 0 1 .75 0Zm4.12 0a.38.38 0 1 1-.75 0 .38.38 0 0 1 .75 0Zm4.13 0a.38.38 0 1 1-.76 0 .38.38 0 0 1 .76 0ZM21 12c0 4.56-4.03 8.25-9 8.25a9.76 9.76 0 0 1-2.56-.34 5.97 5.97 0 0 1-5.28 1.5 6 6 0 0 0 1.28-2.61C3.93 17.3 3 15.24 3 12c0-4.56 4.03-8.25 9-8.25s9 3.69 9 8.25Z";
const ROCKET: &str = "M15.59 14.37a6 6 0 0 1-5.84 7.38v-4.8m5.84-2.58a14.98 14.98 0 0 0 6.16-12.12A14.98 14.98 0 0 0 9.63 8.41m5.96 5.96a14.93 14.93 0 0 1-5.84 2.58m-.12-8.54a6 6 0 0 0-7.38 5.84h4.8m2.58-5.84a14.93 14.93 0 0 0-2.58 5.84m2.7 2.7-.26.01a14.96 14.96 0 0 1-2.44-2.45l.01-.26m12.17-6.03a1.5 1.5 0 1 1-3 0 1.5 1.5 0 0 1 3 0Z";
const SHIELD: &str = "M9 12.75 11.25 15 15 9.75m-3-7.04A11.96 11.96 0 0 1 3.6 6 12 12 0 0 0 3 9.75c0 5.59 3.82 10.29 9 11.62 5.18-1.33 9-6.03 9-11.62 0-1.31-.21-2.57-.6-3.75h-.15c-3.2 0-6.1-1.25-8.25-3.29Z";
const CHAIN: &str = "M13.19 8.69a4.5 4.5 0 0 1 1.24 7.24l-4.5 4.5a4.5 4.5 0 0 1-6.36-6.36l1.76-1.76m13.35-.62 1.76-1.76a4.5 4.5 0 0 0-6.36-6.36l-4.5 4.5a4.5 4.5 0 0 0 1.24 7.24";
const GAMING: &str = "M14.25 6.09c0-.36.19-.68.4-.97.22-.3.35-.67.35-1.07 0-1.03-1.01-1.88-2.25-1.88s-2.25.84-2.25 1.88c0 .4.13.77.35 1.07.21.29.4.61.4.97a.64.64 0 0 1-.66.64 48.4 48.4 0 0 1-4.16-.3c.19 1.61.3 3.25.33 4.91a.66.66 0 0 1-.66.67c-.36 0-.68-.19-.96-.4a1.75 1.75 0 0 0-1.07-.35c-1.04 0-1.88 1.01-1.88 2.25s.84 2.25 1.88 2.25c.4 0 .77-.13 1.07-.35.28-.21.6-.4.96-.4.37 0 .67.31.65.68a48.4 48.4 0 0 1-.53 4.83 48.8 48.8 0 0 0 4.83-.53.62.62 0 0 0 .68-.65c0-.36-.19-.68-.4-.96a1.75 1.75 0 0 1-.35-1.07c0-1.04 1.01-1.88 2.25-1.88s2.25.84 2.25 1.88c0 .4-.13.77-.35 1.07-.21.28-.4.6-.4.96 0 .34.28.61.63.6a48.7 48.7 0 0 0 4.66-.52 48.8 48.8 0 0 0-.51-4.82.58.58 0 0 1 .59-.63c.36 0 .68.19.97.4.3.22.67.35 1.07.35 1.04 0 1.88-1.01 1.88-2.25s-.84-2.25-1.88-2.25c-.4 0-.77.13-1.07.35-.29.21-.61.4-.97.4a.6.6 0 0 1-.6-.64 48.6 48.6 0 0 1 .52-4.6 48.4 48.4 0 0 1-4.16.3.64.64 0 0 1-.66-.64Z";
const FINANCE: &str = "M12 6v12m-3-2.82.88.66c1.17.88 3.07.88 4.24 0 1.17-.88 1.17-2.3 0-3.18C13.54 12.22 12.77 12 12 12c-.72 0-1.45-.22-2-.66-1.1-.88-1.1-2.3 0-3.18s2.9-.88 4 0l.41.33M21 12a9 9 0 1 1-18 0 9 9 0 0 1 18 0Z";
const EDUCATION: &str = "M4.26 10.15A50.6 50.6 0 0 0 3.5 14.75 50 50 0 0 1 12 19.28a50 50 0 0 1 8.5-4.53 50.6 50.6 0 0 0-.76-4.6m-15.48 0a60.4 60.4 0 0 0-2.52-.9A59.9 59.9 0 0 1 12 3.49a59.9 59.9 0 0 1 10.4 5.72c-.86.27-1.7.57-2.52.9m-15.48 0A50.7 50.7 0 0 1 12 13.49a50.7 50.7 0 0 1 7.74-3.34M6.75 15a.75.75 0 1 0 0-1.5.75.75 0 0 0 0 1.5Zm0 0v-3.68A55.4 55.4 0 0 1 12 8.44m-7.01 11.31a5.98 5.98 0 0 0 1.76-4.25v-1.5";
const MEGAPHONE: &str = "M10.34 15.84c-.69-.05-1.39-.08-2.09-.08H7.5a4.5 4.5 0 1 1 0-9h.75c.7 0 1.4-.03 2.09-.08m0 9.16c.25.95.58 1.87.98 2.75.25.54.06 1.2-.47 1.5l-.66.38c-.55.32-1.26.11-1.53-.46a20.8 20.8 0 0 1-1.44-4.28m3.12.11a18.2 18.2 0 0 1 0-9.16m0 9.16a23.9 23.9 0 0 1 8.83 2.54M10.34 6.68a23.9 23.9 0 0 0 8.83-2.54m0 0-.35-1.2m.35 1.2a24 24 0 0 1 1.83 7.86 24 24 0 0 1-1.83 7.86m0 0-.35 1.2";
const SALES: &str = "M2.25 18 9 11.25l4.31 4.31a11.95 11.95 0 0 1 5.81-5.52l2.74-1.22m0 0-5.94-2.28m5.94 2.28-2.28 5.94";
const CONSULTING: &str = "M20.25 14.15v4.25c0 1.09-.79 2.04-1.87 2.18-2.08.28-4.2.42-6.38.42-2.17 0-4.3-.14-6.38-.42-1.08-.14-1.87-1.09-1.87-2.18v-4.25m16.5 0a2.18 2.18 0 0 0 .75-1.66V9.03c0-1.07-.76-2-1.82-2.16a48.4 48.4 0 0 0-3.43-.39m4.5 7.67a2.2 2.2 0 0 1-1.43.53H5.18c-.55 0-1.06-.2-1.43-.53m0 0A2.18 2.18 0 0 1 3 12.49V9.03c0-1.07.76-2 1.82-2.16a48.5 48.5 0 0 1 3.43-.39m7.5 0V5.25A2.25 2.25 0 0 0 13.5 3h-3a2.25 2.25 0 0 0-2.25 2.25v1.23m7.5 0a48.7 48.7 0 0 0-7.5 0";

const SPARKLES: &str = "M9.81 15.9 9 18.75l-.81-2.84a4.5 4.5 0 0 0-3.09-3.1L2.25 12l2.84-.81a4.5 4.5 0 0 0 3.1-3.1L9 5.25l.81 2.84a4.5 4.5 0 0 0 3.1 3.1l2.84.81-2.84.81a4.5 4.5 0 0 0-3.1 3.1ZM18.26 8.72 18 9.75l-.26-1.03a3.38 3.38 0 0 0-2.46-2.46L14.25 6l1.03-.26a3.38 3.38 0 0 0 2.46-2.46L18 2.25l.26 1.03a3.38 3.38 0 0 0 2.46 2.46l1.03.26-1.03.26a3.38 3.38 0 0 0-2.46 2.46Z";
const CUBE: &str = "m21 7.5-9-5.25L3 7.5m18 0-9 5.25m9-5.25v9l-9 5.25M3 7.5l9 5.25M3 7.5v9l9 5.25m0-9v9";
const BOLT: &str = "m3.75 13.5 10.5-11.25L12 10.5h8.25L9.75 21.75 12 13.5H3.75Z";
const FIRE: &str = "M15.36 5.21A8.25 8.25 0 0 1 12 21 8.25 8.25 0 0 1 6.04 7.05 8.29 8.29 0 0 0 9 9.6a8.98 8.98 0 0 1 3.36-6.87 8.2 8.2 0 0 0 3 2.48ZM12 18a3.75 3.75 0 0 0 .5-7.47 4.49 4.49 0 0 0-2.48 3.7A4.48 4.48 0 0 1 8.25 13.5 3.75 3.75 0 0 0 12 18Z";
const GLOBE: &str = "M12 21a9 9 0 0 0 8.72-6.75M12 21a9 9 0 0 1-8.72-6.75M12 21c2.49 0 4.5-4.03 4.5-9S14.49 3 12 3m0 18c-2.49 0-4.5-4.03-4.5-9S9.51 3 12 3m0 0a9 9 0 0 1 7.84 4.58M12 3a9 9 0 0 0-7.84 4.58m15.68 0A11.95 11.95 0 0 1 12 10.5c-2.99 0-5.73-1.1-7.84-2.92m15.68 0A8.96 8.96 0 0 1 21 12c0 .78-.1 1.53-.28 2.25m0 0A17.92 17.92 0 0 1 12 16.5a17.92 17.92 0 0 1-8.72-2.25m0 0A9 9 0 0 1 3 12c0-1.6.42-3.12 1.16-4.42";

const PERSON: &str = "M15.75 6a3.75 3.75 0 1 1-7.5 0 3.75 3.75 0 0 1 7.5 0ZM4.5 20.12a7.5 7.5 0 0 1 15 0A17.93 17.93 0 0 1 12 21.75c-2.68 0-5.22-.58-7.5-1.63Z";

/// Fallback icons for identifiers not found in [`ICON_TABLE`].
pub const DEFAULT_ICONS: [&str; 5] = [SPARKLES, CUBE, BOLT, FIRE, GLOBE];

static ICON_TABLE: &[(&str, &str)] = &[
    ("star", STAR),
    ("check", CHECK),
    ("testing", CHECK),
    ("people", PEOPLE),
    ("professional", PEOPLE),
    ("professional-skills", PEOPLE),
    ("code", CODE),
    ("technical", CODE),
    ("technical-skills", CODE),
    ("programming", CODE),
    ("tool", TOOL),
    ("tools", TOOL),
    ("engineering", TOOL),
    ("devops", TOOL),
    ("design", DESIGN),
    ("creative", DESIGN),
    ("language", LANGUAGE),
    ("languages", LANGUAGE),
    ("heart", HEART),
    ("soft", HEART),
    ("soft-skills", HEART),
    ("healthcare", HEART),
    ("volunteer", HEART),
    ("certification", CERTIFICATE),
    ("certifications", CERTIFICATE),
    ("framework", FRAMEWORK),
    ("frameworks", FRAMEWORK),
    ("database", DATABASE),
    ("databases", DATABASE),
    ("cloud", CLOUD),
    ("mobile", MOBILE),
    ("management", CHART),
    ("analytics", CHART),
    ("research", RESEARCH),
    ("ai", RESEARCH),
    ("communication", CHAT),
    ("leadership", ROCKET),
    ("startup", ROCKET),
    ("security", SHIELD),
    ("blockchain", CHAIN),
    ("gaming", GAMING),
    ("finance", FINANCE),
    ("education", EDUCATION),
    ("marketing", MEGAPHONE),
    ("sales", SALES),
    ("consulting", CONSULTING),
];

fn normalize(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

fn lookup(key: &str) -> Option<&'static str> {
    let normalized = normalize(key);
    ICON_TABLE
        .iter()
        .find(|(name, _)| *name == normalized)
        .map(|(_, path)| *path)
}

fn svg(path: &str, class: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" class="{class}" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" d="{path}"/></svg>"#
    )
}

/// Path data for a category: its `icon` id first, then its display name
/// (whole, then word by word), then the positional default.
pub fn resolve_icon_path(icon: Option<&str>, name: Option<&str>, category_index: usize) -> &'static str {
    if let Some(path) = icon.and_then(lookup) {
        return path;
    }

    if let Some(name) = name {
        if let Some(path) = lookup(name) {
            return path;
        }
        if let Some(path) = name
            .split(|c: char| c.is_whitespace() || c == '&' || c == '/' || c == ',')
            .filter(|word| !word.is_empty())
            .find_map(lookup)
        {
            return path;
        }
    }

    DEFAULT_ICONS[category_index % DEFAULT_ICONS.len()]
}

pub fn resolve_icon(icon: Option<&str>, name: Option<&str>, category_index: usize) -> String {
    svg(resolve_icon_path(icon, name, category_index), "w-8 h-8")
}

/// Placeholder shown in the hero when no headshot is configured.
pub fn person_icon(class: &str) -> String {
    svg(PERSON, class)
}
