use crate::render::escape::{escape_html, escape_opt};
use crate::render::theme::Theme;

/// Descriptors joined by `" | "`; the escaped title only when the list is empty.
pub fn footer_descriptor(descriptors: &[String], title: Option<&str>) -> String {
    if descriptors.is_empty() {
        return escape_opt(title);
    }

    descriptors
        .iter()
        .map(|d| d.trim())
        .filter(|d| !d.is_empty())
        .map(escape_html)
        .collect::<Vec<_>>()
        .join(" | ")
}

pub fn render_footer(
    name: Option<&str>,
    title: Option<&str>,
    descriptors: &[String],
    year: i32,
    theme: &Theme,
) -> String {
    let name = escape_opt(name);
    let owner = if name.is_empty() {
        String::new()
    } else {
        format!(" {}", name)
    };

    format!(
        r#"<footer class="py-10 text-white" style="background-color: {primary};">
<div class="max-w-6xl mx-auto px-6 text-center">
<p class="text-lg font-semibold mb-2">{name}</p>
<p class="opacity-80 mb-4">{descriptor}</p>
<p class="text-sm opacity-60">&copy; {year}{owner}. All rights reserved.</p>
</div>
</footer>"#,
        primary = theme.primary,
        name = name,
        descriptor = footer_descriptor(descriptors, title),
        year = year,
        owner = owner,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_descriptors_are_trimmed_filtered_and_joined() {
        let descriptors = strings(&["  Engineer ", "", "   ", "Tea & Code"]);
        assert_eq!(
            footer_descriptor(&descriptors, Some("Fallback")),
            "Engineer | Tea &amp; Code"
        );
    }

    #[test]
    fn test_falls_back_to_title() {
        assert_eq!(footer_descriptor(&[], Some("Data <Scientist>")), "Data &lt;Scientist&gt;");
        assert_eq!(footer_descriptor(&[], None), "");
    }

    #[test]
    fn test_all_blank_descriptors_do_not_fall_back_to_title() {
        assert_eq!(footer_descriptor(&strings(&["   ", ""]), Some("Engineer")), "");

        let html = render_footer(Some("Ada"), Some("Engineer"), &strings(&[" "]), 2031, &Theme::default());
        assert!(html.contains("<p class=\"opacity-80 mb-4\"></p>"));
        assert!(!html.contains("Engineer"));
    }

    #[test]
    fn test_footer_includes_year_and_name() {
        let html = render_footer(Some("Ada"), Some("Engineer"), &[], 2031, &Theme::default());
        assert!(html.contains("&copy; 2031 Ada."));
        assert!(html.contains(">Engineer</p>"));
        assert!(html.starts_with("<footer"));
    }
}
