//! linkdeck-theme - appearance model and preset catalog
//!
//! This crate provides:
//! - The appearance value types (background, link style, typography, layout)
//! - The animation model (preset tokens and custom parameter sets)
//! - The built-in theme catalog and preset classification

pub mod animation;
pub mod appearance;
pub mod catalog;

pub use animation::{
    Animation, AnimationError, CustomAnimation, Direction, IterationCount, Keyframes,
    TimingFunction,
};
pub use appearance::{
    Appearance, Background, BackgroundKind, BorderRadius, FontFamily, Gradient, Layout, LinkStyle,
    Shadow, DEFAULT_SOLID_COLOR,
};
pub use catalog::{default_theme, find_theme, match_preset, resolve_theme, themes, Theme};
