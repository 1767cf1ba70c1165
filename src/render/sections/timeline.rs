use crate::domain::model::{TimelineEntry, TimelineKind};
use crate::render::escape::{escape_html, escape_opt};
use crate::render::layout::section_heading;
use crate::render::theme::Theme;
use std::collections::BTreeSet;

/// Used when no entry carries a recognized type.
pub const FALLBACK_TITLE: &str = "Education, Experience & Research";

pub const RESEARCH_BADGE: &str = "#8b5cf6";
pub const EXPERIENCE_BADGE: &str = "#0ea5e9";

/// Section title built from the entry types present, always in
/// education / experience / research order.
pub fn timeline_title(entries: &[TimelineEntry]) -> String {
    let present: BTreeSet<TimelineKind> = entries.iter().filter_map(TimelineEntry::kind).collect();
    let labels: Vec<&str> = TimelineKind::PREFERRED_ORDER
        .iter()
        .filter(|kind| present.contains(*kind))
        .map(TimelineKind::label)
        .collect();

    match labels.as_slice() {
        [] => FALLBACK_TITLE.to_string(),
        [only] => only.to_string(),
        [first, second] => format!("{} & {}", first, second),
        [init @ .., last] => format!("{}, & {}", init.join(", "), last),
    }
}

pub fn badge_color<'a>(kind: Option<TimelineKind>, theme: &'a Theme) -> &'a str {
    match kind {
        Some(TimelineKind::Education) => &theme.primary,
        Some(TimelineKind::Research) => RESEARCH_BADGE,
        _ => EXPERIENCE_BADGE,
    }
}

fn timeline_card(entry: &TimelineEntry, theme: &Theme) -> String {
    let kind = entry.kind();
    let badge_label = kind.map(|k| k.label()).unwrap_or("");
    let description = match entry.description.as_deref().filter(|v| !v.trim().is_empty()) {
        Some(text) => {
            format!("<p class=\"text-gray-600 mt-3\">{}</p>", escape_html(text))
        }
        _ => String::new(),
    };

    format!(
        r#"<div class="bg-white rounded-xl shadow-md p-6">
<div class="flex items-center gap-2 mb-2">
<span class="timeline-badge px-3 py-1 rounded-full text-xs font-semibold text-white" style="background-color: {badge};">{year}</span>
<span class="text-xs uppercase tracking-wide text-gray-500">{label}</span>
</div>
<h3 class="text-xl font-semibold" style="color: {primary};">{title}</h3>
<p class="font-medium text-gray-700">{organization}</p>
{description}
</div>"#,
        badge = badge_color(kind, theme),
        year = escape_opt(entry.year.as_deref()),
        label = badge_label,
        primary = theme.primary,
        title = escape_opt(entry.title.as_deref()),
        organization = escape_opt(entry.organization.as_deref()),
        description = description,
    )
}

fn timeline_item(index: usize, entry: &TimelineEntry, theme: &Theme) -> String {
    // 偶數在中線左側，奇數在右側
    let (side, direction) = if index % 2 == 0 {
        ("left", "md:flex-row")
    } else {
        ("right", "md:flex-row-reverse")
    };

    format!(
        r#"<div class="timeline-item timeline-item-{side} relative flex flex-col {direction} items-center mb-12">
<div class="w-full md:w-1/2 {padding}">
{card}
</div>
<div class="absolute left-1/2 -translate-x-1/2 w-5 h-5 rounded-full border-4 border-white shadow hidden md:block" style="background-color: {dot};"></div>
<div class="hidden md:block md:w-1/2"></div>
</div>"#,
        side = side,
        direction = direction,
        padding = if index % 2 == 0 { "md:pr-12" } else { "md:pl-12" },
        card = timeline_card(entry, theme),
        dot = badge_color(entry.kind(), theme),
    )
}

pub fn render_timeline(entries: &[TimelineEntry], theme: &Theme) -> String {
    if entries.is_empty() {
        return String::new();
    }

    let items: Vec<String> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| timeline_item(index, entry, theme))
        .collect();

    format!(
        r#"<section id="timeline" class="py-20">
<div class="max-w-5xl mx-auto px-6">
{heading}
<div class="relative">
<div class="absolute left-1/2 -translate-x-1/2 w-1 h-full hidden md:block" style="background-color: {line};"></div>
{items}
</div>
</div>
</section>"#,
        heading = section_heading(&escape_html(&timeline_title(entries)), theme),
        line = theme.secondary,
        items = items.join("\n"),
    )
}
