use crate::domain::model::{ContactInfo, Links};
use crate::render::escape::{escape_html, safe_href};
use crate::render::layout::section_heading;
use crate::render::theme::Theme;

const EMAIL_ICON: &str = "M21.75 6.75v10.5a2.25 2.25 0 0 1-2.25 2.25h-15a2.25 2.25 0 0 1-2.25-2.25V6.75m19.5 0A2.25 2.25 0 0 0 19.5 4.5h-15a2.25 2.25 0 0 0-2.25 2.25m19.5 0v.24a2.25 2.25 0 0 1-1.07 1.92l-7.5 4.62a2.25 2.25 0 0 1-2.36 0L3.32 8.91a2.25 2.25 0 0 1-1.07-1.92V6.75";
const PHONE_ICON: &str = "M2.25 6.75c0 8.28 6.72 15 15 15h2.25a2.25 2.25 0 0 0 2.25-2.25v-1.37c0-.52-.35-.97-.85-1.09l-4.42-1.1c-.44-.11-.9.05-1.18.41l-.97 1.29c-.28.38-.77.54-1.21.38a12.04 12.04 0 0 1-7.14-7.14c-.16-.44 0-.93.38-1.21l1.29-.97c.36-.27.52-.74.41-1.18l-1.1-4.42a1.13 1.13 0 0 0-1.09-.85H4.5A2.25 2.25 0 0 0 2.25 4.5v2.25Z";
const LINKEDIN_ICON: &str = "M20.45 20.45h-3.55v-5.57c0-1.33-.03-3.04-1.85-3.04-1.86 0-2.14 1.45-2.14 2.94v5.67H9.35V9h3.41v1.56h.05c.48-.9 1.64-1.85 3.37-1.85 3.6 0 4.27 2.37 4.27 5.46v6.28ZM5.34 7.43a2.06 2.06 0 1 1 0-4.12 2.06 2.06 0 0 1 0 4.12ZM7.12 20.45H3.56V9h3.56v11.45Z";
const GITHUB_ICON: &str = "M12 .3a12 12 0 0 0-3.8 23.38c.6.12.83-.26.83-.57v-2c-3.34.73-4.04-1.42-4.04-1.42-.55-1.39-1.34-1.76-1.34-1.76-1.08-.74.09-.73.09-.73 1.2.09 1.83 1.24 1.83 1.24 1.07 1.83 2.8 1.3 3.49 1 .1-.78.42-1.31.76-1.61-2.67-.3-5.47-1.33-5.47-5.93 0-1.31.47-2.38 1.24-3.22-.14-.3-.54-1.52.1-3.18 0 0 1-.32 3.3 1.23a11.5 11.5 0 0 1 6 0c2.28-1.55 3.29-1.23 3.29-1.23.64 1.66.24 2.88.12 3.18a4.65 4.65 0 0 1 1.23 3.22c0 4.61-2.8 5.63-5.48 5.92.42.36.81 1.1.81 2.22v3.29c0 .32.21.69.82.57A12 12 0 0 0 12 .3";

/// LinkedIn 顯示文字：先去掉協定，再去掉路徑前綴
pub fn linkedin_display(url: &str) -> &str {
    let rest = url.strip_prefix("https://").unwrap_or(url);
    rest.strip_prefix("linkedin.com/in/").unwrap_or(rest)
}

/// GitHub 顯示文字：https://、http://、github.com/ 依序去除
pub fn github_display(url: &str) -> &str {
    let rest = url.strip_prefix("https://").unwrap_or(url);
    let rest = rest.strip_prefix("http://").unwrap_or(rest);
    rest.strip_prefix("github.com/").unwrap_or(rest)
}

fn method_block(icon_path: &str, label: &str, href: &str, display: &str, external: bool, theme: &Theme) -> String {
    let target = if external {
        " target=\"_blank\" rel=\"noopener\""
    } else {
        ""
    };
    format!(
        r#"<div class="contact-method flex items-center gap-4 p-4 bg-white rounded-xl shadow-sm">
<div class="w-12 h-12 rounded-full flex items-center justify-center text-white flex-shrink-0" style="background-color: {primary};"><svg xmlns="http://www.w3.org/2000/svg" class="w-6 h-6" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="1.5" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" d="{icon}"/></svg></div>
<div>
<p class="text-sm text-gray-500">{label}</p>
<a href="{href}"{target} class="font-medium hover:underline break-all" style="color: {primary};">{display}</a>
</div>
</div>"#,
        primary = theme.primary,
        icon = icon_path,
        label = label,
        href = href,
        target = target,
        display = display,
    )
}

fn contact_methods(contact: Option<&ContactInfo>, links: Option<&Links>, theme: &Theme) -> Vec<String> {
    let mut methods = Vec::new();

    if let Some(email) = contact.and_then(|c| c.email.as_deref()).filter(|v| !v.trim().is_empty()) {
        let email = escape_html(email);
        methods.push(method_block(EMAIL_ICON, "Email", &format!("mailto:{}", email), &email, false, theme));
    }

    if let Some(linkedin) = contact.and_then(|c| c.linkedin.as_deref()) {
        if let Some(href) = safe_href(linkedin) {
            methods.push(method_block(
                LINKEDIN_ICON,
                "LinkedIn",
                &href,
                &escape_html(linkedin_display(linkedin.trim())),
                true,
                theme,
            ));
        }
    }

    if let Some(phone) = contact.and_then(|c| c.phone.as_deref()).filter(|v| !v.trim().is_empty()) {
        let phone = escape_html(phone);
        methods.push(method_block(PHONE_ICON, "Phone", &format!("tel:{}", phone), &phone, false, theme));
    }

    if let Some(github) = links.and_then(|l| l.github.as_deref()) {
        if let Some(href) = safe_href(github) {
            methods.push(method_block(
                GITHUB_ICON,
                "GitHub",
                &href,
                &escape_html(github_display(github.trim())),
                true,
                theme,
            ));
        }
    }

    methods
}

fn areas_of_interest(contact: Option<&ContactInfo>, theme: &Theme) -> String {
    let areas = match contact {
        Some(c) if !c.areas_of_interest.is_empty() => &c.areas_of_interest,
        _ => return String::new(),
    };

    let items: Vec<String> = areas
        .iter()
        .map(|area| {
            format!(
                "<li class=\"flex items-center gap-2\"><span class=\"w-2 h-2 rounded-full\" style=\"background-color: {};\"></span>{}</li>",
                theme.secondary,
                escape_html(area)
            )
        })
        .collect();

    format!(
        "<div class=\"areas-of-interest bg-white rounded-xl shadow-sm p-6\">\n<h3 class=\"text-xl font-semibold mb-4\" style=\"color: {};\">Areas of Interest</h3>\n<ul class=\"space-y-2\">\n{}\n</ul>\n</div>",
        theme.primary,
        items.join("\n")
    )
}

pub fn render_contact(
    contact: Option<&ContactInfo>,
    links: Option<&Links>,
    intro: Option<&str>,
    theme: &Theme,
) -> String {
    let intro = match intro.filter(|v| !v.trim().is_empty()) {
        Some(text) => format!(
            "<p class=\"max-w-3xl mx-auto text-center text-lg mb-12\">{}</p>",
            escape_html(text)
        ),
        _ => String::new(),
    };

    format!(
        r#"<section id="contact" class="py-20 theme-accent-bg">
<div class="max-w-5xl mx-auto px-6">
{heading}
{intro}
<div class="grid grid-cols-1 md:grid-cols-2 gap-8">
<div class="contact-methods space-y-4">
{methods}
</div>
{areas}
</div>
</div>
</section>"#,
        heading = section_heading("Get in Touch", theme),
        intro = intro,
        methods = contact_methods(contact, links, theme).join("\n"),
        areas = areas_of_interest(contact, theme),
    )
}
