use std::fmt;
use std::str::FromStr;

use crate::foundation::core::Color;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Coarse age bucket driving proportions, skin-tone range, and glasses probability.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    Teen,
    Adult,
    Senior,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 4] = [
        AgeGroup::Child,
        AgeGroup::Teen,
        AgeGroup::Adult,
        AgeGroup::Senior,
    ];

    /// Bucket a numeric age: `<13` child, `<20` teen, `<60` adult, otherwise senior.
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=12 => AgeGroup::Child,
            13..=19 => AgeGroup::Teen,
            20..=59 => AgeGroup::Adult,
            _ => AgeGroup::Senior,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }

    pub fn from_token(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == s)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The age slot accepts either a number of years or, for older callers, an age-group token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum AgeInput {
    Years(u32),
    Group(AgeGroup),
}

impl AgeInput {
    pub fn age_group(self) -> AgeGroup {
        match self {
            AgeInput::Years(age) => AgeGroup::from_age(age),
            AgeInput::Group(group) => group,
        }
    }

    pub fn years(self) -> Option<u32> {
        match self {
            AgeInput::Years(age) => Some(age),
            AgeInput::Group(_) => None,
        }
    }
}

impl FromStr for AgeInput {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        let s = s.trim();
        if let Ok(years) = s.parse::<u32>() {
            return Ok(AgeInput::Years(years));
        }
        AgeGroup::from_token(&s.to_ascii_lowercase())
            .map(AgeInput::Group)
            .ok_or_else(|| {
                AvatarError::invalid(format!(
                    "age must be a non-negative integer or one of child/teen/adult/senior, got '{s}'"
                ))
            })
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    /// Only reachable through an explicit override.
    Neutral,
}

impl Gender {
    /// Genders the identity-key default chooses from.
    pub const DEFAULTABLE: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn as_str(self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
            Gender::Neutral => "neutral",
        }
    }
}

impl FromStr for Gender {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "neutral" => Ok(Gender::Neutral),
            other => Err(AvatarError::invalid(format!(
                "gender must be male/female/neutral, got '{other}'"
            ))),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Happy,
    Sad,
    Surprised,
    Angry,
    Wink,
    Neutral,
    Confused,
    Laughing,
}

impl Expression {
    pub const ALL: [Expression; 8] = [
        Expression::Happy,
        Expression::Sad,
        Expression::Surprised,
        Expression::Angry,
        Expression::Wink,
        Expression::Neutral,
        Expression::Confused,
        Expression::Laughing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Expression::Happy => "happy",
            Expression::Sad => "sad",
            Expression::Surprised => "surprised",
            Expression::Angry => "angry",
            Expression::Wink => "wink",
            Expression::Neutral => "neutral",
            Expression::Confused => "confused",
            Expression::Laughing => "laughing",
        }
    }

    /// Lenient lookup: unknown names resolve to [`Expression::Neutral`].
    pub fn from_key(s: &str) -> Self {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|e| e.as_str() == s)
            .unwrap_or(Expression::Neutral)
    }

    /// The fixed eye/mouth/eyebrow triple bound to this expression.
    pub fn traits(self) -> ExpressionTraits {
        use {BrowAngle as B, EyeShape as E, MouthShape as M};
        let (eye, mouth, brow) = match self {
            Expression::Happy => (E::Smile, M::BigSmile, B::Raised),
            Expression::Sad => (E::Normal, M::Frown, B::Down),
            Expression::Surprised => (E::Wide, M::Open, B::Raised),
            Expression::Angry => (E::Narrow, M::Frown, B::Angry),
            Expression::Wink => (E::Wink, M::Smile, B::Normal),
            Expression::Neutral => (E::Normal, M::Neutral, B::Normal),
            Expression::Confused => (E::Normal, M::Wavy, B::Confused),
            Expression::Laughing => (E::Closed, M::Laugh, B::Raised),
        };
        ExpressionTraits {
            eye_shape: eye,
            mouth_shape: mouth,
            eyebrow_angle: brow,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EyeShape {
    Wide,
    Narrow,
    Smile,
    Closed,
    Wink,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MouthShape {
    BigSmile,
    Smile,
    Frown,
    Open,
    Wavy,
    Laugh,
    Neutral,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BrowAngle {
    Raised,
    Angry,
    Down,
    Confused,
    Normal,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExpressionTraits {
    pub eye_shape: EyeShape,
    pub mouth_shape: MouthShape,
    pub eyebrow_angle: BrowAngle,
}

/// How the face background is painted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    #[default]
    Solid,
    /// Vertical gradient from the personality's primary to secondary color.
    #[serde(alias = "gradient_linear")]
    Gradient,
    /// Centered radial gradient, primary at the center fading to secondary at the edge.
    #[serde(rename = "gradient_radial", alias = "radial")]
    Radial,
    Transparent,
}

impl FromStr for BackgroundStyle {
    type Err = AvatarError;

    fn from_str(s: &str) -> AvatarResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "solid" => Ok(BackgroundStyle::Solid),
            "gradient" | "gradient_linear" => Ok(BackgroundStyle::Gradient),
            "gradient_radial" | "radial" => Ok(BackgroundStyle::Radial),
            "transparent" => Ok(BackgroundStyle::Transparent),
            other => Err(AvatarError::invalid(format!(
                "background must be solid/gradient/gradient_radial/transparent, got '{other}'"
            ))),
        }
    }
}

/// Three-color palette attached to a personality.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
}

/// Caller-supplied partial parameters. Every `None` is filled by the resolver.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Overrides {
    pub age: Option<AgeInput>,
    pub gender: Option<Gender>,
    pub country: Option<String>,
    pub personality: Option<String>,
    /// Expression name; unknown names fall back to `neutral`.
    pub expression: Option<String>,
    /// Skin-tone table key (`light`, `medium_dark`, ...); unknown keys are ignored.
    pub skin_tone: Option<String>,
    pub eye_color: Option<Color>,
    pub has_glasses: Option<bool>,
    pub background: Option<BackgroundStyle>,
}

impl Overrides {
    pub fn from_json_str(s: &str) -> AvatarResult<Self> {
        serde_json::from_str(s).map_err(|e| AvatarError::invalid(format!("overrides: {e}")))
    }
}

/// Fully resolved description of one avatar. No field is ever unset.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttributeRecord {
    /// Numeric age in years, absent when the caller passed an age-group token.
    pub age: Option<u32>,
    pub age_group: AgeGroup,
    pub gender: Gender,
    pub country: String,
    pub personality: String,
    pub expression: Expression,
    pub skin_tone_key: String,
    pub skin_tone: Color,
    pub eye_color: Color,
    pub background_color: Color,
    pub background: BackgroundStyle,
    pub palette: Palette,
    pub has_glasses: bool,

    pub face_size: f64,
    pub eye_size: f64,
    pub nose_size: f64,
    pub mouth_size: f64,
    pub eyebrow_thickness: f64,
}

impl AttributeRecord {
    pub fn expression_traits(&self) -> ExpressionTraits {
        self.expression.traits()
    }
}
