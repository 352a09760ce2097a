//! Render projector
//!
//! Combines the profile, link sequence, and appearance into the concrete
//! visual attributes used by a preview surface. Pure and side-effect-free;
//! recomputed in full on every state change, which is cheap at this scale
//! and keeps the output trivially consistent with the state.

use linkdeck_core::{Link, LinkId, LinkList, Profile};
use linkdeck_theme::{Appearance, Background, BorderRadius, FontFamily, Layout, Shadow};

use crate::animation::{resolve, RenderAnimation};
use crate::icons::{classify, IconCategory};

/// Columns in the grid layout
pub const GRID_COLUMNS: usize = 4;

/// Opacity applied to inactive links in editor previews
pub const INACTIVE_OPACITY: f32 = 0.5;

/// Profile fields ready for display
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRender {
    pub avatar_url: String,
    pub name: String,
    pub bio: String,
}

/// One link button, fully styled
#[derive(Debug, Clone, PartialEq)]
pub struct LinkRender {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    pub icon: IconCategory,
    pub background: String,
    pub text_color: String,
    /// 1.0 for active links, [`INACTIVE_OPACITY`] for dimmed inactive ones
    pub opacity: f32,
    pub shadow: Shadow,
    pub border_radius: BorderRadius,
    pub animation: RenderAnimation,
}

/// Everything a preview surface needs to draw the page
#[derive(Debug, Clone, PartialEq)]
pub struct RenderModel {
    /// CSS background value for the page (flat fill or linear gradient)
    pub background_css: String,
    pub font: FontFamily,
    /// Color of the profile name and bio
    pub text_color: String,
    pub layout: Layout,
    pub profile: ProfileRender,
    pub links: Vec<LinkRender>,
}

/// CSS background value for a page background
pub fn background_css(background: &Background) -> String {
    match background {
        Background::Gradient { gradient } => format!(
            "linear-gradient({}deg, {}, {})",
            gradient.angle, gradient.start, gradient.end
        ),
        Background::Color { color } => {
            if color.is_empty() {
                linkdeck_theme::DEFAULT_SOLID_COLOR.to_string()
            } else {
                color.clone()
            }
        }
    }
}

/// Project the public page: active links only, order preserved
pub fn project(profile: &Profile, links: &LinkList, appearance: &Appearance) -> RenderModel {
    build(profile, links, appearance, false)
}

/// Project an editor preview: inactive links stay visible, dimmed
pub fn project_preview(
    profile: &Profile,
    links: &LinkList,
    appearance: &Appearance,
) -> RenderModel {
    build(profile, links, appearance, true)
}

fn build(
    profile: &Profile,
    links: &LinkList,
    appearance: &Appearance,
    include_inactive: bool,
) -> RenderModel {
    let animation = resolve(appearance.animation.as_ref());

    let links = links
        .iter()
        .filter(|link| include_inactive || link.active)
        .map(|link| project_link(link, appearance, &animation))
        .collect();

    RenderModel {
        background_css: background_css(&appearance.background),
        font: appearance.font,
        text_color: appearance.text_color.clone(),
        layout: appearance.layout(),
        profile: ProfileRender {
            avatar_url: profile.avatar_url.clone(),
            name: profile.name.clone(),
            bio: profile.bio.clone(),
        },
        links,
    }
}

fn project_link(link: &Link, appearance: &Appearance, animation: &RenderAnimation) -> LinkRender {
    LinkRender {
        id: link.id,
        title: link.title.clone(),
        url: link.url.clone(),
        icon: classify(link),
        background: appearance.link_style.background.clone(),
        text_color: appearance.link_style.text_color.clone(),
        opacity: if link.active { 1.0 } else { INACTIVE_OPACITY },
        shadow: appearance.link_style.shadow,
        border_radius: appearance.link_style.border_radius,
        animation: animation.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_theme::{themes, Animation};

    fn fixture() -> (Profile, LinkList, Appearance) {
        let profile = Profile {
            avatar_url: "https://example.com/me.png".to_string(),
            name: "@tester".to_string(),
            bio: "hello".to_string(),
        };
        let links = LinkList::starter();
        let appearance = themes()[0].appearance.clone();
        (profile, links, appearance)
    }

    // === Background ===

    #[test]
    fn test_gradient_background_css() {
        let bg = Background::gradient(120.0, "#ff7e5f", "#feb47b");
        assert_eq!(
            background_css(&bg),
            "linear-gradient(120deg, #ff7e5f, #feb47b)"
        );
    }

    #[test]
    fn test_solid_background_css() {
        assert_eq!(background_css(&Background::color("#111827")), "#111827");
    }

    #[test]
    fn test_blank_color_falls_back_to_default() {
        assert_eq!(background_css(&Background::color("")), "#ffffff");
    }

    // === Link filtering ===

    #[test]
    fn test_public_projection_filters_inactive() {
        let (profile, mut links, appearance) = fixture();
        let second = links.links()[1].id;
        links.set_active(second, false);

        let model = project(&profile, &links, &appearance);
        assert_eq!(model.links.len(), 5);
        assert!(model.links.iter().all(|l| l.opacity == 1.0));
        assert!(model.links.iter().all(|l| l.id != second));

        // Remaining order is the sequence order
        assert_eq!(model.links[0].title, "My Website");
        assert_eq!(model.links[1].title, "Instagram");
    }

    #[test]
    fn test_preview_projection_dims_inactive() {
        let (profile, mut links, appearance) = fixture();
        let second = links.links()[1].id;
        links.set_active(second, false);

        let model = project_preview(&profile, &links, &appearance);
        assert_eq!(model.links.len(), 6);
        assert_eq!(model.links[1].id, second);
        assert_eq!(model.links[1].opacity, INACTIVE_OPACITY);
        assert_eq!(model.links[0].opacity, 1.0);
    }

    // === Styling ===

    #[test]
    fn test_links_carry_uniform_style() {
        let (profile, links, appearance) = fixture();
        let model = project(&profile, &links, &appearance);

        for link in &model.links {
            assert_eq!(link.background, appearance.link_style.background);
            assert_eq!(link.text_color, appearance.link_style.text_color);
            assert_eq!(link.shadow, appearance.link_style.shadow);
            assert_eq!(link.border_radius, appearance.link_style.border_radius);
        }
    }

    #[test]
    fn test_icons_follow_link_content() {
        let (profile, links, appearance) = fixture();
        let model = project(&profile, &links, &appearance);

        let youtube = model.links.iter().find(|l| l.title == "YouTube").unwrap();
        assert_eq!(youtube.icon, IconCategory::YouTube);
        let generic = model.links.iter().find(|l| l.title == "My Website").unwrap();
        assert_eq!(generic.icon, IconCategory::Generic);
    }

    #[test]
    fn test_layout_and_page_fields() {
        let (profile, links, _) = fixture();
        let grid = themes()[5].appearance.clone();

        let model = project(&profile, &links, &grid);
        assert_eq!(model.layout, Layout::Grid);
        assert_eq!(model.font, grid.font);
        assert_eq!(model.text_color, grid.text_color);
        assert_eq!(model.profile.name, "@tester");
        assert_eq!(
            model.background_css,
            "linear-gradient(145deg, #1e3a8a, #4c1d95)"
        );
    }

    #[test]
    fn test_animation_applied_to_every_link() {
        let (profile, links, mut appearance) = fixture();
        appearance.animation = Some(Animation::preset("pulse-soft"));

        let model = project(&profile, &links, &appearance);
        assert!(model
            .links
            .iter()
            .all(|l| l.animation.class() == Some("pulse-soft")));
    }
}
