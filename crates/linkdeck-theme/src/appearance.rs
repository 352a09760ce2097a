//! Appearance model for the rendered page
//!
//! Pure value types describing how a page looks: background, link button
//! styling, typography, layout, and the optional entry animation. All types
//! compare structurally so a whole appearance can be matched against the
//! preset catalog by equality.

use serde::{Deserialize, Serialize};

use crate::animation::Animation;

/// Solid color used when a background color is missing or blank.
pub const DEFAULT_SOLID_COLOR: &str = "#ffffff";

/// Font family token applied to the whole page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FontFamily {
    #[default]
    #[serde(rename = "font-sans")]
    Sans,
    #[serde(rename = "font-serif")]
    Serif,
    #[serde(rename = "font-mono")]
    Mono,
}

impl FontFamily {
    /// The style-class token for this family
    pub fn token(&self) -> &'static str {
        match self {
            FontFamily::Sans => "font-sans",
            FontFamily::Serif => "font-serif",
            FontFamily::Mono => "font-mono",
        }
    }
}

/// Two-stop linear gradient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gradient {
    /// Direction in degrees (0-360)
    pub angle: f32,
    /// First color stop
    pub start: String,
    /// Second color stop
    pub end: String,
}

impl Default for Gradient {
    fn default() -> Self {
        Self {
            angle: 90.0,
            start: "#ffffff".to_string(),
            end: "#000000".to_string(),
        }
    }
}

/// Which background representation is active
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundKind {
    Color,
    Gradient,
}

/// Page background
///
/// Exactly one representation is active at a time. Stored data may carry a
/// stale copy of the other representation; the tagged encoding ignores it
/// on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Background {
    Color { color: String },
    Gradient { gradient: Gradient },
}

impl Background {
    /// Solid color background
    pub fn color(color: impl Into<String>) -> Self {
        Background::Color {
            color: color.into(),
        }
    }

    /// Linear gradient background
    pub fn gradient(angle: f32, start: impl Into<String>, end: impl Into<String>) -> Self {
        Background::Gradient {
            gradient: Gradient {
                angle,
                start: start.into(),
                end: end.into(),
            },
        }
    }

    pub fn kind(&self) -> BackgroundKind {
        match self {
            Background::Color { .. } => BackgroundKind::Color,
            Background::Gradient { .. } => BackgroundKind::Gradient,
        }
    }

    /// The active color, if this is a solid background
    pub fn as_color(&self) -> Option<&str> {
        match self {
            Background::Color { color } => Some(color),
            Background::Gradient { .. } => None,
        }
    }

    /// The active gradient, if this is a gradient background
    pub fn as_gradient(&self) -> Option<&Gradient> {
        match self {
            Background::Color { .. } => None,
            Background::Gradient { gradient } => Some(gradient),
        }
    }
}

impl Default for Background {
    fn default() -> Self {
        Background::color(DEFAULT_SOLID_COLOR)
    }
}

/// Shadow token applied to every link button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Shadow {
    #[serde(rename = "shadow-none")]
    None,
    #[serde(rename = "shadow-sm")]
    Small,
    #[default]
    #[serde(rename = "shadow-md")]
    Medium,
    #[serde(rename = "shadow-lg")]
    Large,
    /// Large shadow with a soft blue glow
    #[serde(rename = "shadow-lg shadow-blue-500/10")]
    LargeGlow,
}

impl Shadow {
    pub fn token(&self) -> &'static str {
        match self {
            Shadow::None => "shadow-none",
            Shadow::Small => "shadow-sm",
            Shadow::Medium => "shadow-md",
            Shadow::Large => "shadow-lg",
            Shadow::LargeGlow => "shadow-lg shadow-blue-500/10",
        }
    }
}

/// Corner rounding token applied to every link button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BorderRadius {
    #[serde(rename = "rounded-none")]
    None,
    #[serde(rename = "rounded-md")]
    Medium,
    #[default]
    #[serde(rename = "rounded-lg")]
    Large,
    #[serde(rename = "rounded-xl")]
    ExtraLarge,
    #[serde(rename = "rounded-full")]
    Full,
}

impl BorderRadius {
    pub fn token(&self) -> &'static str {
        match self {
            BorderRadius::None => "rounded-none",
            BorderRadius::Medium => "rounded-md",
            BorderRadius::Large => "rounded-lg",
            BorderRadius::ExtraLarge => "rounded-xl",
            BorderRadius::Full => "rounded-full",
        }
    }
}

/// Styling applied uniformly to every link button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkStyle {
    /// Button fill color
    pub background: String,
    /// Button label color
    pub text_color: String,
    pub shadow: Shadow,
    pub border_radius: BorderRadius,
}

/// How the link buttons are arranged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// Full-width rows, icon left, label centered
    #[default]
    List,
    /// Fixed four-column grid, icon above label
    Grid,
}

/// Complete visual description of a page
///
/// An appearance equal (structurally, over every field) to a catalog theme's
/// appearance is "a preset"; anything else is "custom". That classification
/// is derived by [`crate::catalog::match_preset`], never stored here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appearance {
    pub font: FontFamily,
    pub background: Background,
    pub link_style: LinkStyle,
    /// Color of the profile name and bio text
    pub text_color: String,
    /// Absent means list layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Absent means no animation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<Animation>,
}

impl Appearance {
    /// Effective layout, defaulting absent to list
    pub fn layout(&self) -> Layout {
        self.layout.unwrap_or_default()
    }

    /// Whether the animation editor is in custom mode
    ///
    /// Derived purely from the animation being a parameter object; this is
    /// independent of whether the appearance as a whole matches a preset.
    pub fn has_custom_animation(&self) -> bool {
        matches!(self.animation, Some(Animation::Custom(_)))
    }
}
