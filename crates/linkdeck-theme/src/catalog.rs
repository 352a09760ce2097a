//! Built-in theme catalog
//!
//! A fixed, ordered set of named presets, each a complete appearance value.
//! The catalog is read-only at runtime; applying a preset clones its
//! appearance into the session, and classification back to "which preset is
//! this" is pure structural equality.

use std::sync::OnceLock;

use crate::appearance::{
    Appearance, Background, BorderRadius, FontFamily, Layout, LinkStyle, Shadow,
};

/// A named, immutable preset appearance
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub appearance: Appearance,
}

fn link_style(
    background: &str,
    text_color: &str,
    shadow: Shadow,
    border_radius: BorderRadius,
) -> LinkStyle {
    LinkStyle {
        background: background.to_string(),
        text_color: text_color.to_string(),
        shadow,
        border_radius,
    }
}

fn build_catalog() -> Vec<Theme> {
    vec![
        Theme {
            name: "Default",
            appearance: Appearance {
                font: FontFamily::Sans,
                background: Background::color("#f3f4f6"),
                link_style: link_style("#ffffff", "#1f2937", Shadow::Medium, BorderRadius::Large),
                text_color: "#1f2937".to_string(),
                layout: None,
                animation: None,
            },
        },
        Theme {
            name: "Midnight",
            appearance: Appearance {
                font: FontFamily::Sans,
                background: Background::color("#111827"),
                link_style: link_style(
                    "#1f2937",
                    "#f9fafb",
                    Shadow::LargeGlow,
                    BorderRadius::Full,
                ),
                text_color: "#f9fafb".to_string(),
                layout: None,
                animation: None,
            },
        },
        Theme {
            name: "Sunset",
            appearance: Appearance {
                font: FontFamily::Serif,
                background: Background::gradient(120.0, "#ff7e5f", "#feb47b"),
                link_style: link_style(
                    "rgba(255, 255, 255, 0.2)",
                    "#ffffff",
                    Shadow::None,
                    BorderRadius::Medium,
                ),
                text_color: "#ffffff".to_string(),
                layout: None,
                animation: None,
            },
        },
        Theme {
            name: "Forest",
            appearance: Appearance {
                font: FontFamily::Serif,
                background: Background::gradient(45.0, "#2a522a", "#588157"),
                link_style: link_style("#dad7cd", "#344e41", Shadow::Large, BorderRadius::Large),
                text_color: "#ffffff".to_string(),
                layout: None,
                animation: None,
            },
        },
        Theme {
            name: "Bubblegum",
            appearance: Appearance {
                font: FontFamily::Mono,
                background: Background::gradient(90.0, "#ff9a9e", "#fecfef"),
                link_style: link_style("#ffffff", "#f472b6", Shadow::Medium, BorderRadius::Full),
                text_color: "#4a044e".to_string(),
                layout: None,
                animation: None,
            },
        },
        Theme {
            name: "Android",
            appearance: Appearance {
                font: FontFamily::Sans,
                background: Background::gradient(145.0, "#1e3a8a", "#4c1d95"),
                link_style: link_style(
                    "rgba(255, 255, 255, 0.15)",
                    "#ffffff",
                    Shadow::Large,
                    BorderRadius::ExtraLarge,
                ),
                text_color: "#ffffff".to_string(),
                layout: Some(Layout::Grid),
                animation: None,
            },
        },
    ]
}

/// All built-in themes, in editor display order
pub fn themes() -> &'static [Theme] {
    static CATALOG: OnceLock<Vec<Theme>> = OnceLock::new();
    CATALOG.get_or_init(build_catalog)
}

/// The catalog's first theme, used when nothing else applies
pub fn default_theme() -> &'static Theme {
    &themes()[0]
}

/// Look up a theme by its exact name
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    themes().iter().find(|t| t.name == name)
}

/// Resolve a configured theme name, falling back to the first catalog entry
pub fn resolve_theme(name: &str) -> &'static Theme {
    match find_theme(name) {
        Some(theme) => theme,
        None => {
            let fallback = default_theme();
            log::warn!("Theme '{name}' not found, falling back to '{}'", fallback.name);
            fallback
        }
    }
}

/// Classify an appearance against the catalog
///
/// Returns the index of the preset it is structurally equal to, or `None`
/// when the appearance is a custom mix. Never stored; recomputed on demand.
pub fn match_preset(appearance: &Appearance) -> Option<usize> {
    themes().iter().position(|t| &t.appearance == appearance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::Animation;

    #[test]
    fn test_catalog_shape() {
        let all = themes();
        assert_eq!(all.len(), 6);
        assert_eq!(all[0].name, "Default");
        assert_eq!(all[5].name, "Android");

        // Android is the only grid preset
        let grids: Vec<_> = all
            .iter()
            .filter(|t| t.appearance.layout == Some(Layout::Grid))
            .collect();
        assert_eq!(grids.len(), 1);
        assert_eq!(grids[0].name, "Android");
    }

    #[test]
    fn test_find_theme() {
        assert!(find_theme("Sunset").is_some());
        assert!(find_theme("sunset").is_none());
        assert!(find_theme("Vaporwave").is_none());
    }

    #[test]
    fn test_resolve_theme_falls_back_to_first() {
        assert_eq!(resolve_theme("Forest").name, "Forest");
        assert_eq!(resolve_theme("nonexistent").name, "Default");
    }

    #[test]
    fn test_every_preset_matches_itself() {
        for (i, theme) in themes().iter().enumerate() {
            assert_eq!(match_preset(&theme.appearance), Some(i), "{}", theme.name);
        }
    }

    #[test]
    fn test_single_leaf_edit_becomes_custom() {
        let mut appearance = themes()[2].appearance.clone();
        assert_eq!(match_preset(&appearance), Some(2));

        if let Background::Gradient { gradient } = &mut appearance.background {
            gradient.angle = 121.0;
        }
        assert_eq!(match_preset(&appearance), None);
    }

    #[test]
    fn test_animation_participates_in_matching() {
        let mut appearance = default_theme().appearance.clone();
        appearance.animation = Some(Animation::preset("pulse-soft"));
        assert_eq!(match_preset(&appearance), None);
    }

    #[test]
    fn test_catalog_is_stable_across_calls() {
        let first = themes().as_ptr();
        let second = themes().as_ptr();
        assert_eq!(first, second);
    }
}
