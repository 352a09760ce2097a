//! Animation resolver
//!
//! Maps an appearance's animation selection to concrete render parameters.
//! Preset tokens pass through verbatim as style-class names (the token
//! catalog lives with the page styling, not here); custom parameter sets
//! resolve to the explicit animation properties with a fixed fill mode so
//! the animation's start and end states persist outside its active
//! interval.

use linkdeck_theme::{Animation, CustomAnimation, Direction, IterationCount, TimingFunction};

/// Fill mode applied to every custom animation; not user-configurable.
pub const FILL_MODE: &str = "both";

/// Concrete animation parameters for one link button
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeAnimation {
    /// CSS keyframe name
    pub name: &'static str,
    /// Seconds, > 0
    pub duration: f32,
    /// Seconds, >= 0
    pub delay: f32,
    pub iteration_count: IterationCount,
    pub direction: Direction,
    pub timing_function: TimingFunction,
}

impl KeyframeAnimation {
    /// The animation style properties, in declaration order
    ///
    /// Durations render with one decimal place; the fill mode is always
    /// [`FILL_MODE`].
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        vec![
            ("animation-name", self.name.to_string()),
            ("animation-duration", format!("{:.1}s", self.duration)),
            ("animation-delay", format!("{:.1}s", self.delay)),
            (
                "animation-iteration-count",
                self.iteration_count.to_string(),
            ),
            ("animation-direction", self.direction.css_value().to_string()),
            (
                "animation-timing-function",
                self.timing_function.css_value().to_string(),
            ),
            ("animation-fill-mode", FILL_MODE.to_string()),
        ]
    }
}

/// Resolved animation for rendering
#[derive(Debug, Clone, PartialEq, Default)]
pub enum RenderAnimation {
    /// No animation; emits no animation-related attributes at all
    #[default]
    None,
    /// Opaque style-class token, passed through verbatim
    Class(String),
    /// Explicit animation parameters
    Keyframes(KeyframeAnimation),
}

impl RenderAnimation {
    /// Style-class token to attach, if any
    pub fn class(&self) -> Option<&str> {
        match self {
            RenderAnimation::Class(token) => Some(token),
            _ => None,
        }
    }

    /// Inline style properties to attach; empty unless custom
    pub fn style_properties(&self) -> Vec<(&'static str, String)> {
        match self {
            RenderAnimation::Keyframes(anim) => anim.style_properties(),
            _ => Vec::new(),
        }
    }
}

/// Resolve an appearance's animation selection
pub fn resolve(animation: Option<&Animation>) -> RenderAnimation {
    match animation {
        None => RenderAnimation::None,
        Some(Animation::Preset(token)) if token == "none" => RenderAnimation::None,
        Some(Animation::Preset(token)) => RenderAnimation::Class(token.clone()),
        Some(Animation::Custom(custom)) => RenderAnimation::Keyframes(from_custom(custom)),
    }
}

fn from_custom(custom: &CustomAnimation) -> KeyframeAnimation {
    KeyframeAnimation {
        name: custom.keyframes.css_name(),
        duration: custom.duration,
        delay: custom.delay,
        iteration_count: custom.iteration_count,
        direction: custom.direction,
        timing_function: custom.timing_function,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linkdeck_theme::Keyframes;

    #[test]
    fn test_absent_and_none_emit_nothing() {
        assert_eq!(resolve(None), RenderAnimation::None);

        let none = Animation::preset("none");
        assert_eq!(resolve(Some(&none)), RenderAnimation::None);

        assert!(resolve(None).style_properties().is_empty());
        assert!(resolve(None).class().is_none());
    }

    #[test]
    fn test_preset_token_passes_through_verbatim() {
        let preset = Animation::preset("pulse-soft");
        let resolved = resolve(Some(&preset));
        assert_eq!(resolved.class(), Some("pulse-soft"));
        assert!(resolved.style_properties().is_empty());
    }

    #[test]
    fn test_custom_emits_all_parameters_plus_fill_mode() {
        let custom = Animation::Custom(CustomAnimation {
            keyframes: Keyframes::Shake,
            duration: 0.8,
            delay: 0.0,
            iteration_count: IterationCount::Finite(1),
            direction: Direction::Normal,
            timing_function: TimingFunction::Ease,
        });

        let props = resolve(Some(&custom)).style_properties();
        assert_eq!(
            props,
            vec![
                ("animation-name", "shake".to_string()),
                ("animation-duration", "0.8s".to_string()),
                ("animation-delay", "0.0s".to_string()),
                ("animation-iteration-count", "1".to_string()),
                ("animation-direction", "normal".to_string()),
                ("animation-timing-function", "ease".to_string()),
                ("animation-fill-mode", "both".to_string()),
            ]
        );
    }

    #[test]
    fn test_duration_renders_with_one_decimal() {
        let mut custom = CustomAnimation::default();
        custom.duration = 2.0;
        custom.delay = 0.25;

        let props = resolve(Some(&Animation::Custom(custom))).style_properties();
        assert!(props.contains(&("animation-duration", "2.0s".to_string())));
        // One decimal place even when the value has more precision
        assert!(props.contains(&("animation-delay", "0.2s".to_string())));
    }

    #[test]
    fn test_infinite_iteration_count() {
        let mut custom = CustomAnimation::default();
        custom.iteration_count = IterationCount::Infinite;

        let props = resolve(Some(&Animation::Custom(custom))).style_properties();
        assert!(props.contains(&("animation-iteration-count", "infinite".to_string())));
    }
}
