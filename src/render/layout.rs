use crate::render::escape::escape_html;
use crate::render::theme::Theme;

pub const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

pub const ROW_SIZE: usize = 3;

pub const GRID_ROW_CLASS: &str = "grid grid-cols-1 md:grid-cols-3 gap-8";
pub const PARTIAL_ROW_CLASS: &str = "flex flex-wrap justify-center gap-8";
const PARTIAL_ITEM_CLASS: &str = "w-full md:w-[calc(33.333%-1.5rem)]";

/// Lays cards out in rows of three. Full rows use a grid; a trailing row
/// with fewer cards is centered with flexbox. Card order is preserved.
pub fn card_rows(cards: &[String]) -> String {
    cards
        .chunks(ROW_SIZE)
        .map(|row| {
            if row.len() == ROW_SIZE {
                format!(
                    "<div class=\"{}\">\n{}\n</div>",
                    GRID_ROW_CLASS,
                    row.join("\n")
                )
            } else {
                let items: Vec<String> = row
                    .iter()
                    .map(|card| format!("<div class=\"{}\">{}</div>", PARTIAL_ITEM_CLASS, card))
                    .collect();
                format!(
                    "<div class=\"{}\">\n{}\n</div>",
                    PARTIAL_ROW_CLASS,
                    items.join("\n")
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// `<head>` plus the opening `<body>` tag shared by every page.
pub fn document_head(page_title: &str, theme: &Theme) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>{title}</title>
<script src="{cdn}"></script>
<style>
html {{ scroll-behavior: smooth; }}
.theme-primary {{ color: {primary}; }}
.theme-primary-bg {{ background-color: {primary}; }}
.theme-secondary-bg {{ background-color: {secondary}; }}
.theme-accent-bg {{ background-color: {accent}; }}
</style>
</head>
<body style="background-color: {background}; color: {text};" class="font-sans antialiased">"#,
        title = escape_html(page_title),
        cdn = TAILWIND_CDN,
        primary = theme.primary,
        secondary = theme.secondary,
        accent = theme.accent,
        background = theme.background,
        text = theme.text,
    )
}

pub fn document_end() -> &'static str {
    "</body>\n</html>\n"
}

/// Section heading with the accent bar used across pages.
pub fn section_heading(title_html: &str, theme: &Theme) -> String {
    format!(
        "<h2 class=\"text-3xl md:text-4xl font-bold text-center mb-4\" style=\"color: {};\">{}</h2>\n<div class=\"w-24 h-1 mx-auto mb-12 rounded\" style=\"background-color: {};\"></div>",
        theme.primary, title_html, theme.secondary
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("<article>card-{}</article>", i)).collect()
    }

    #[test]
    fn test_full_rows_use_grid() {
        let html = card_rows(&cards(6));
        assert_eq!(html.matches(GRID_ROW_CLASS).count(), 2);
        assert_eq!(html.matches(PARTIAL_ROW_CLASS).count(), 0);
    }

    #[test]
    fn test_trailing_partial_row_is_centered() {
        let html = card_rows(&cards(4));
        assert_eq!(html.matches(GRID_ROW_CLASS).count(), 1);
        assert_eq!(html.matches(PARTIAL_ROW_CLASS).count(), 1);
        assert!(html.find(GRID_ROW_CLASS).unwrap() < html.find(PARTIAL_ROW_CLASS).unwrap());
    }

    #[test]
    fn test_order_is_preserved_across_rows() {
        let html = card_rows(&cards(5));
        let positions: Vec<usize> = (0..5)
            .map(|i| html.find(&format!("card-{}<", i)).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_no_cards_no_rows() {
        assert_eq!(card_rows(&[]), "");
    }

    #[test]
    fn test_head_loads_css_framework_and_escapes_title() {
        let head = document_head("Ada <Lovelace>", &Theme::default());
        assert!(head.contains(TAILWIND_CDN));
        assert!(head.contains("<title>Ada &lt;Lovelace&gt;</title>"));
        assert!(head.contains("background-color: #ffffff"));
    }
}
