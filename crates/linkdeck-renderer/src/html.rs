//! Static preview page writer
//!
//! Turns a [`RenderModel`](crate::projector::RenderModel) into a complete
//! standalone HTML document: the same page the live preview shows, written
//! as a local file artifact. User-entered text and URLs are escaped before
//! they reach the markup.

use linkdeck_theme::{BorderRadius, FontFamily, Layout, Shadow};

use crate::icons::IconCategory;
use crate::projector::{LinkRender, RenderModel, GRID_COLUMNS};

/// Keyframe definitions for the built-in custom animation names
const KEYFRAMES_CSS: &str = "\
@keyframes fadeIn { from { opacity: 0; } to { opacity: 1; } }
@keyframes slideUp { from { opacity: 0; transform: translateY(16px); } to { opacity: 1; transform: translateY(0); } }
@keyframes bounce { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-8px); } }
@keyframes pulse { 0%, 100% { transform: scale(1); } 50% { transform: scale(1.05); } }
@keyframes shake { 0%, 100% { transform: translateX(0); } 25% { transform: translateX(-4px); } 75% { transform: translateX(4px); } }
@keyframes wobble { 0%, 100% { transform: rotate(0deg); } 25% { transform: rotate(-3deg); } 75% { transform: rotate(3deg); } }
";

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn font_stack(font: FontFamily) -> &'static str {
    match font {
        FontFamily::Sans => "ui-sans-serif, system-ui, sans-serif",
        FontFamily::Serif => "ui-serif, Georgia, serif",
        FontFamily::Mono => "ui-monospace, SFMono-Regular, Menlo, monospace",
    }
}

fn shadow_css(shadow: Shadow) -> &'static str {
    match shadow {
        Shadow::None => "none",
        Shadow::Small => "0 1px 2px rgba(0, 0, 0, 0.05)",
        Shadow::Medium => "0 4px 6px rgba(0, 0, 0, 0.1)",
        Shadow::Large => "0 10px 15px rgba(0, 0, 0, 0.1)",
        Shadow::LargeGlow => "0 10px 15px rgba(59, 130, 246, 0.1)",
    }
}

fn radius_css(radius: BorderRadius) -> &'static str {
    match radius {
        BorderRadius::None => "0",
        BorderRadius::Medium => "6px",
        BorderRadius::Large => "8px",
        BorderRadius::ExtraLarge => "12px",
        BorderRadius::Full => "9999px",
    }
}

fn icon_svg(icon: IconCategory) -> &'static str {
    match icon {
        IconCategory::YouTube => r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M21.6 7.2a2.5 2.5 0 0 0-1.8-1.8C18.2 5 12 5 12 5s-6.2 0-7.8.4A2.5 2.5 0 0 0 2.4 7.2 26 26 0 0 0 2 12a26 26 0 0 0 .4 4.8 2.5 2.5 0 0 0 1.8 1.8C5.8 19 12 19 12 19s6.2 0 7.8-.4a2.5 2.5 0 0 0 1.8-1.8A26 26 0 0 0 22 12a26 26 0 0 0-.4-4.8zM10 15V9l5.2 3z"/></svg>"#,
        IconCategory::TikTok => r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M16.6 3a4.8 4.8 0 0 0 3.4 3.4v2.9a7.6 7.6 0 0 1-3.4-1v6.2a5.5 5.5 0 1 1-5.5-5.5c.3 0 .7 0 1 .1v3a2.5 2.5 0 1 0 1.5 2.4V3z"/></svg>"#,
        IconCategory::Instagram => r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><rect x="3" y="3" width="18" height="18" rx="5"/><circle cx="12" cy="12" r="4"/><circle cx="17.2" cy="6.8" r="1" fill="currentColor" stroke="none"/></svg>"#,
        IconCategory::Telegram => r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M21.9 4.3 18.7 19c-.2 1-.8 1.3-1.7.8l-4.6-3.4-2.2 2.1c-.3.3-.5.5-.9.5l.3-4.4L18 6.8c.4-.3-.1-.5-.6-.2l-9.9 6.2-4.3-1.3c-.9-.3-.9-.9.2-1.3L20.7 3c.8-.3 1.5.2 1.2 1.3z"/></svg>"#,
        IconCategory::X => r#"<svg class="icon" viewBox="0 0 24 24" fill="currentColor" aria-hidden="true"><path d="M17.7 3h3l-6.6 7.6L22 21h-6.1l-4.8-6.2L5.6 21h-3l7-8.1L2 3h6.3l4.3 5.7zm-1.1 16.2h1.7L7.4 4.7H5.6z"/></svg>"#,
        IconCategory::Generic => r#"<svg class="icon" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" aria-hidden="true"><path d="M10 13a5 5 0 0 0 7.5.5l3-3a5 5 0 0 0-7-7l-1.7 1.7"/><path d="M14 11a5 5 0 0 0-7.5-.5l-3 3a5 5 0 0 0 7 7l1.7-1.7"/></svg>"#,
    }
}

fn link_inline_style(link: &LinkRender) -> String {
    let mut style = format!(
        "background-color: {}; color: {}; opacity: {}; border-radius: {}; box-shadow: {};",
        link.background,
        link.text_color,
        link.opacity,
        radius_css(link.border_radius),
        shadow_css(link.shadow),
    );
    for (name, value) in link.animation.style_properties() {
        style.push_str(&format!(" {name}: {value};"));
    }
    style
}

fn link_anchor(link: &LinkRender, layout: Layout) -> String {
    let class = match (layout, link.animation.class()) {
        (Layout::Grid, Some(token)) => format!("link link-grid {}", escape_html(token)),
        (Layout::Grid, None) => "link link-grid".to_string(),
        (Layout::List, Some(token)) => format!("link link-row {}", escape_html(token)),
        (Layout::List, None) => "link link-row".to_string(),
    };

    format!(
        "      <a class=\"{class}\" href=\"{url}\" target=\"_blank\" rel=\"noopener noreferrer\" style=\"{style}\">{icon}<span>{title}</span></a>\n",
        url = escape_html(&link.url),
        style = link_inline_style(link),
        icon = icon_svg(link.icon),
        title = escape_html(&link.title),
    )
}

/// Render a complete standalone preview page
pub fn render_page(model: &RenderModel) -> String {
    let links_css = match model.layout {
        Layout::Grid => format!(
            ".links {{ display: grid; grid-template-columns: repeat({GRID_COLUMNS}, 1fr); gap: 1rem 1.5rem; }}\n\
             .link-grid {{ display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 0.25rem; aspect-ratio: 1; font-size: 0.75rem; font-weight: 500; text-align: center; padding: 0.25rem; }}\n\
             .link-grid .icon {{ width: 2rem; height: 2rem; }}"
        ),
        Layout::List => ".links { display: flex; flex-direction: column; gap: 1rem; }\n\
             .link-row { position: relative; display: flex; align-items: center; justify-content: center; width: 100%; padding: 1rem; font-weight: 600; box-sizing: border-box; }\n\
             .link-row .icon { position: absolute; left: 1rem; width: 1.25rem; height: 1.25rem; }"
            .to_string(),
    };

    let mut body = String::new();
    body.push_str(&format!(
        "    <img class=\"avatar\" src=\"{}\" alt=\"Profile\">\n",
        escape_html(&model.profile.avatar_url)
    ));
    body.push_str(&format!(
        "    <h1>{}</h1>\n",
        escape_html(&model.profile.name)
    ));
    body.push_str(&format!("    <p>{}</p>\n", escape_html(&model.profile.bio)));
    body.push_str("    <div class=\"links\">\n");
    for link in &model.links {
        body.push_str(&link_anchor(link, model.layout));
    }
    body.push_str("    </div>\n");

    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title}</title>\n\
         <style>\n\
         html, body {{ margin: 0; min-height: 100%; }}\n\
         body {{ background: {background}; font-family: {font}; color: {text_color}; }}\n\
         main {{ max-width: 24rem; margin: 0 auto; padding: 2.5rem 1.5rem; display: flex; flex-direction: column; align-items: center; text-align: center; }}\n\
         .avatar {{ width: 6rem; height: 6rem; border-radius: 9999px; object-fit: cover; margin-bottom: 1rem; border: 2px solid rgba(255, 255, 255, 0.5); }}\n\
         h1 {{ font-size: 1.25rem; margin: 0; }}\n\
         p {{ font-size: 0.875rem; margin: 0.25rem 0 0; }}\n\
         .links {{ width: 100%; margin-top: 2rem; }}\n\
         .link {{ text-decoration: none; transition: transform 0.2s; }}\n\
         .link:hover {{ transform: scale(1.05); }}\n\
         {links_css}\n\
         {keyframes}\
         </style>\n\
         </head>\n\
         <body>\n\
         <main>\n\
         {body}\
         </main>\n\
         </body>\n\
         </html>\n",
        title = escape_html(&model.profile.name),
        background = model.background_css,
        font = font_stack(model.font),
        text_color = model.text_color,
        keyframes = KEYFRAMES_CSS,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projector::{project, project_preview};
    use linkdeck_core::{LinkList, Profile};
    use linkdeck_theme::{themes, Animation, CustomAnimation};

    fn model() -> RenderModel {
        let profile = Profile {
            avatar_url: "https://example.com/me.png".to_string(),
            name: "@tester".to_string(),
            bio: "bio text".to_string(),
        };
        project(&profile, &LinkList::starter(), &themes()[0].appearance)
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"a" & 'b'</b>"#),
            "&lt;b&gt;&quot;a&quot; &amp; &#39;b&#39;&lt;/b&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_page_contains_background_and_profile() {
        let page = render_page(&model());
        assert!(page.contains("background: #f3f4f6;"));
        assert!(page.contains("<h1>@tester</h1>"));
        assert!(page.contains("bio text"));
        assert!(page.contains("https://example.com/me.png"));
    }

    #[test]
    fn test_one_anchor_per_link() {
        let page = render_page(&model());
        assert_eq!(page.matches("<a class=\"link link-row").count(), 6);
    }

    #[test]
    fn test_grid_layout_css() {
        let profile = Profile::default();
        let links = LinkList::starter();
        let model = project(&profile, &links, &themes()[5].appearance);

        let page = render_page(&model);
        assert!(page.contains("grid-template-columns: repeat(4, 1fr)"));
        assert!(page.contains("link link-grid"));
        assert!(page.contains("linear-gradient(145deg, #1e3a8a, #4c1d95)"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let profile = Profile {
            avatar_url: "https://example.com/a.png".to_string(),
            name: "<script>alert(1)</script>".to_string(),
            bio: "a & b".to_string(),
        };
        let mut links = LinkList::new();
        let id = links.add();
        links.set_title(id, "\"quoted\"");
        links.set_url(id, "https://example.com/?a=1&b=2");

        let page = render_page(&project(&profile, &links, &themes()[0].appearance));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
        assert!(page.contains("&quot;quoted&quot;"));
        assert!(page.contains("https://example.com/?a=1&amp;b=2"));
    }

    #[test]
    fn test_custom_animation_inlined() {
        let mut appearance = themes()[0].appearance.clone();
        appearance.animation = Some(Animation::Custom(CustomAnimation::default()));

        let page = render_page(&project(
            &Profile::default(),
            &LinkList::starter(),
            &appearance,
        ));
        assert!(page.contains("animation-name: fadeIn;"));
        assert!(page.contains("animation-fill-mode: both;"));
        assert!(page.contains("@keyframes fadeIn"));
    }

    #[test]
    fn test_dimmed_links_in_preview_markup() {
        let profile = Profile::default();
        let mut links = LinkList::starter();
        let first = links.links()[0].id;
        links.set_active(first, false);

        let page = render_page(&project_preview(&profile, &links, &themes()[0].appearance));
        assert!(page.contains("opacity: 0.5;"));
    }
}
