//! Link entry animation model
//!
//! The animation field is the one polymorphic part of an appearance: absent
//! for no animation, a bare token naming a preset style class, or a full
//! parameter object for a user-built animation. The parameter object carries
//! value-level invariants (positive duration, non-negative delay, at least
//! one iteration) enforced by [`CustomAnimation::validate`].

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Invalid custom animation parameters
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AnimationError {
    #[error("animation duration must be positive, got {0}")]
    InvalidDuration(f32),

    #[error("animation delay must not be negative, got {0}")]
    InvalidDelay(f32),

    #[error("animation must run at least one iteration")]
    ZeroIterations,
}

/// Named keyframe set for custom animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum Keyframes {
    #[default]
    FadeIn,
    SlideUp,
    Bounce,
    Pulse,
    Shake,
    Wobble,
}

impl Keyframes {
    /// The CSS keyframe name this variant animates with
    pub fn css_name(&self) -> &'static str {
        match self {
            Keyframes::FadeIn => "fadeIn",
            Keyframes::SlideUp => "slideUp",
            Keyframes::Bounce => "bounce",
            Keyframes::Pulse => "pulse",
            Keyframes::Shake => "shake",
            Keyframes::Wobble => "wobble",
        }
    }

    /// Every keyframe set, in editor display order
    pub fn all() -> &'static [Keyframes] {
        &[
            Keyframes::FadeIn,
            Keyframes::SlideUp,
            Keyframes::Bounce,
            Keyframes::Pulse,
            Keyframes::Shake,
            Keyframes::Wobble,
        ]
    }
}

/// How many times the animation runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationCount {
    Finite(u32),
    Infinite,
}

impl Default for IterationCount {
    fn default() -> Self {
        IterationCount::Finite(1)
    }
}

impl std::fmt::Display for IterationCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IterationCount::Finite(n) => write!(f, "{n}"),
            IterationCount::Infinite => write!(f, "infinite"),
        }
    }
}

// Serialized as a bare number or the literal string "infinite".
impl Serialize for IterationCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IterationCount::Finite(n) => serializer.serialize_u32(*n),
            IterationCount::Infinite => serializer.serialize_str("infinite"),
        }
    }
}

impl<'de> Deserialize<'de> for IterationCount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Count(u32),
            Keyword(String),
        }

        match Raw::deserialize(deserializer)? {
            Raw::Count(n) => Ok(IterationCount::Finite(n)),
            Raw::Keyword(word) if word == "infinite" => Ok(IterationCount::Infinite),
            Raw::Keyword(word) => Err(D::Error::custom(format!(
                "invalid iteration count {word:?}, expected a number or \"infinite\""
            ))),
        }
    }
}

/// Playback direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Normal,
    Reverse,
    Alternate,
}

impl Direction {
    pub fn css_value(&self) -> &'static str {
        match self {
            Direction::Normal => "normal",
            Direction::Reverse => "reverse",
            Direction::Alternate => "alternate",
        }
    }
}

/// Easing token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum TimingFunction {
    #[default]
    Ease,
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
}

impl TimingFunction {
    pub fn css_value(&self) -> &'static str {
        match self {
            TimingFunction::Ease => "ease",
            TimingFunction::Linear => "linear",
            TimingFunction::EaseIn => "ease-in",
            TimingFunction::EaseOut => "ease-out",
            TimingFunction::EaseInOut => "ease-in-out",
        }
    }
}

/// Fully specified user-built animation
///
/// The default value is the seed used when the editor switches from a preset
/// token to custom mode, so no field ever starts out undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAnimation {
    /// Keyframe set (serialized as `type`)
    #[serde(rename = "type")]
    pub keyframes: Keyframes,
    /// Duration in seconds, > 0
    pub duration: f32,
    /// Start delay in seconds, >= 0
    pub delay: f32,
    pub iteration_count: IterationCount,
    pub direction: Direction,
    pub timing_function: TimingFunction,
}

impl Default for CustomAnimation {
    fn default() -> Self {
        Self {
            keyframes: Keyframes::FadeIn,
            duration: 1.0,
            delay: 0.0,
            iteration_count: IterationCount::Finite(1),
            direction: Direction::Normal,
            timing_function: TimingFunction::Ease,
        }
    }
}

impl CustomAnimation {
    /// Check the value-level invariants
    pub fn validate(&self) -> Result<(), AnimationError> {
        if !(self.duration > 0.0) {
            return Err(AnimationError::InvalidDuration(self.duration));
        }
        if !(self.delay >= 0.0) {
            return Err(AnimationError::InvalidDelay(self.delay));
        }
        if self.iteration_count == IterationCount::Finite(0) {
            return Err(AnimationError::ZeroIterations);
        }
        Ok(())
    }
}

/// Animation selection for an appearance
///
/// A bare string selects a named preset style class (the token catalog is
/// page styling, not validated here); an object is a custom parameter set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Animation {
    Preset(String),
    Custom(CustomAnimation),
}

impl Animation {
    pub fn preset(token: impl Into<String>) -> Self {
        Animation::Preset(token.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Iteration count serde ===

    #[test]
    fn test_iteration_count_number() {
        let json = serde_json::to_string(&IterationCount::Finite(3)).unwrap();
        assert_eq!(json, "3");
        let back: IterationCount = serde_json::from_str("3").unwrap();
        assert_eq!(back, IterationCount::Finite(3));
    }

    #[test]
    fn test_iteration_count_infinite() {
        let json = serde_json::to_string(&IterationCount::Infinite).unwrap();
        assert_eq!(json, "\"infinite\"");
        let back: IterationCount = serde_json::from_str("\"infinite\"").unwrap();
        assert_eq!(back, IterationCount::Infinite);
    }

    #[test]
    fn test_iteration_count_rejects_other_strings() {
        assert!(serde_json::from_str::<IterationCount>("\"forever\"").is_err());
    }

    #[test]
    fn test_iteration_count_display() {
        assert_eq!(IterationCount::Finite(2).to_string(), "2");
        assert_eq!(IterationCount::Infinite.to_string(), "infinite");
    }

    // === Validation ===

    #[test]
    fn test_default_seed_is_valid() {
        let seed = CustomAnimation::default();
        assert_eq!(seed.keyframes, Keyframes::FadeIn);
        assert_eq!(seed.duration, 1.0);
        assert_eq!(seed.delay, 0.0);
        assert_eq!(seed.iteration_count, IterationCount::Finite(1));
        assert_eq!(seed.direction, Direction::Normal);
        assert_eq!(seed.timing_function, TimingFunction::Ease);
        assert!(seed.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let mut anim = CustomAnimation::default();
        anim.duration = 0.0;
        assert_eq!(anim.validate(), Err(AnimationError::InvalidDuration(0.0)));

        let mut anim = CustomAnimation::default();
        anim.delay = -0.5;
        assert_eq!(anim.validate(), Err(AnimationError::InvalidDelay(-0.5)));

        let mut anim = CustomAnimation::default();
        anim.iteration_count = IterationCount::Finite(0);
        assert_eq!(anim.validate(), Err(AnimationError::ZeroIterations));
    }

    // === Animation serde ===

    #[test]
    fn test_preset_is_a_bare_string() {
        let anim = Animation::preset("pulse-soft");
        assert_eq!(serde_json::to_string(&anim).unwrap(), "\"pulse-soft\"");

        let back: Animation = serde_json::from_str("\"pulse-soft\"").unwrap();
        assert_eq!(back, anim);
    }

    #[test]
    fn test_custom_is_an_object() {
        let anim = Animation::Custom(CustomAnimation {
            keyframes: Keyframes::Shake,
            duration: 0.8,
            delay: 0.0,
            iteration_count: IterationCount::Finite(1),
            direction: Direction::Normal,
            timing_function: TimingFunction::Ease,
        });

        let json = serde_json::to_value(&anim).unwrap();
        assert_eq!(json["type"], "shake");
        assert_eq!(json["duration"], 0.8);
        assert_eq!(json["iterationCount"], 1);
        assert_eq!(json["timingFunction"], "ease");

        let back: Animation = serde_json::from_value(json).unwrap();
        assert_eq!(back, anim);
    }

    #[test]
    fn test_keyframe_tokens() {
        assert_eq!(
            serde_json::to_string(&Keyframes::SlideUp).unwrap(),
            "\"slideUp\""
        );
        assert_eq!(Keyframes::FadeIn.css_name(), "fadeIn");
        assert_eq!(Keyframes::all().len(), 6);
    }

    #[test]
    fn test_timing_function_tokens() {
        assert_eq!(
            serde_json::to_string(&TimingFunction::EaseInOut).unwrap(),
            "\"ease-in-out\""
        );
        assert_eq!(TimingFunction::EaseIn.css_value(), "ease-in");
    }
}
