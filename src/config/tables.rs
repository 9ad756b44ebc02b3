use std::collections::BTreeMap;
use std::path::Path;

use crate::attributes::model::{AgeGroup, BackgroundStyle, Expression, Gender, Palette};
use crate::foundation::core::{Canvas, Color};
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::transform::spec::TransformSpec;

/// Proportions and ranges bound to one age group.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AgeTraits {
    pub face_size: f64,
    pub eye_size: f64,
    pub nose_size: f64,
    pub mouth_size: f64,
    /// Skin-tone keys allowed for this age group, in preference order.
    pub skin_tones: Vec<String>,
    /// Probability of glasses when the country permits them.
    pub glasses_chance: f64,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GenderTraits {
    pub eyebrow_thickness: f64,
}

/// Cultural feature set for one country key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CountryTraits {
    pub name: String,
    pub backgrounds: Vec<Color>,
    pub accessories: Vec<String>,
    /// Skin-tone keys in preference order.
    pub skin_tone_preference: Vec<String>,
}

impl CountryTraits {
    pub fn allows_glasses(&self) -> bool {
        self.accessories.iter().any(|a| a == "glasses")
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PersonalityTraits {
    pub name: String,
    pub expression: Expression,
    pub palette: Palette,
}

/// Read-only configuration consumed by the generation engine.
///
/// Every field has a built-in default, so a JSON file only needs to carry the fields it changes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AvatarConfig {
    pub canvas: Canvas,
    /// Transform applied by the non-custom entry points.
    pub transform: TransformSpec,
    pub background: BackgroundStyle,
    pub skin_tones: BTreeMap<String, Color>,
    pub age_groups: BTreeMap<AgeGroup, AgeTraits>,
    pub genders: BTreeMap<Gender, GenderTraits>,
    /// Ordered: identity-key defaults index into this list.
    pub countries: Vec<CountryTraits>,
    pub default_country: String,
    pub personalities: Vec<PersonalityTraits>,
    pub default_personality: String,
    pub default_ages: Vec<u32>,
    /// Expressions the identity-key default picks from when the personality maps to neutral.
    pub default_expressions: Vec<Expression>,
    pub eye_colors: Vec<Color>,
    pub initials_palette: Vec<Color>,
}

impl AvatarConfig {
    pub fn from_json_str(s: &str) -> AvatarResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| AvatarError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> AvatarResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            AvatarError::config(format!("read config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> AvatarResult<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(AvatarError::config("canvas width/height must be > 0"));
        }
        self.transform.validate()?;

        for group in AgeGroup::ALL {
            let traits = self
                .age_groups
                .get(&group)
                .ok_or_else(|| AvatarError::config(format!("missing age group '{group}'")))?;
            if traits.skin_tones.is_empty() {
                return Err(AvatarError::empty_domain(format!(
                    "age group '{group}' has no skin tones"
                )));
            }
            for key in &traits.skin_tones {
                if !self.skin_tones.contains_key(key) {
                    return Err(AvatarError::config(format!(
                        "age group '{group}' references unknown skin tone '{key}'"
                    )));
                }
            }
            if !(0.0..=1.0).contains(&traits.glasses_chance) {
                return Err(AvatarError::config(format!(
                    "age group '{group}' glasses_chance must be within [0, 1]"
                )));
            }
        }

        for gender in Gender::DEFAULTABLE {
            if !self.genders.contains_key(&gender) {
                return Err(AvatarError::config(format!("missing gender '{gender}'")));
            }
        }

        if self.countries.is_empty() {
            return Err(AvatarError::empty_domain("country list is empty"));
        }
        for country in &self.countries {
            if country.backgrounds.is_empty() {
                return Err(AvatarError::empty_domain(format!(
                    "country '{}' has no background colors",
                    country.name
                )));
            }
        }
        if !self.countries.iter().any(|c| c.name == self.default_country) {
            return Err(AvatarError::config(format!(
                "default country '{}' is not in the country table",
                self.default_country
            )));
        }

        if self.personalities.is_empty() {
            return Err(AvatarError::empty_domain("personality list is empty"));
        }
        if !self
            .personalities
            .iter()
            .any(|p| p.name == self.default_personality)
        {
            return Err(AvatarError::config(format!(
                "default personality '{}' is not in the personality table",
                self.default_personality
            )));
        }

        let lists = [
            ("default_ages", self.default_ages.is_empty()),
            ("default_expressions", self.default_expressions.is_empty()),
            ("eye_colors", self.eye_colors.is_empty()),
            ("initials_palette", self.initials_palette.is_empty()),
            ("skin_tones", self.skin_tones.is_empty()),
        ];
        if let Some((name, _)) = lists.iter().find(|(_, empty)| *empty) {
            return Err(AvatarError::empty_domain(format!("{name} is empty")));
        }

        Ok(())
    }

    pub fn country_names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn personality_names(&self) -> Vec<&str> {
        self.personalities.iter().map(|p| p.name.as_str()).collect()
    }

    /// Country entry by key, falling back to the default country for unknown keys.
    pub fn country(&self, name: &str) -> AvatarResult<&CountryTraits> {
        self.countries
            .iter()
            .find(|c| c.name == name)
            .or_else(|| {
                self.countries
                    .iter()
                    .find(|c| c.name == self.default_country)
            })
            .ok_or_else(|| {
                AvatarError::config(format!(
                    "default country '{}' is not in the country table",
                    self.default_country
                ))
            })
    }

    /// Personality entry by key; `None` for unknown keys.
    pub fn personality(&self, name: &str) -> Option<&PersonalityTraits> {
        self.personalities.iter().find(|p| p.name == name)
    }

    pub fn default_personality_traits(&self) -> AvatarResult<&PersonalityTraits> {
        self.personality(&self.default_personality).ok_or_else(|| {
            AvatarError::config(format!(
                "default personality '{}' is not in the personality table",
                self.default_personality
            ))
        })
    }

    pub fn age_traits(&self, group: AgeGroup) -> AvatarResult<&AgeTraits> {
        self.age_groups
            .get(&group)
            .ok_or_else(|| AvatarError::config(format!("missing age group '{group}'")))
    }

    /// Gender feature set; `neutral` (or any missing entry) uses the male set.
    pub fn gender_traits(&self, gender: Gender) -> AvatarResult<&GenderTraits> {
        self.genders
            .get(&gender)
            .or_else(|| self.genders.get(&Gender::Male))
            .ok_or_else(|| AvatarError::config("missing gender 'male'"))
    }

    pub fn skin_tone(&self, key: &str) -> Option<&Color> {
        self.skin_tones.get(key)
    }
}

impl Default for AvatarConfig {
    fn default() -> Self {
        fn colors(list: &[&str]) -> Vec<Color> {
            list.iter().copied().map(Color::new).collect()
        }
        fn keys(list: &[&str]) -> Vec<String> {
            list.iter().map(|s| s.to_string()).collect()
        }
        fn country(name: &str, bg: &[&str], acc: &[&str], tones: &[&str]) -> CountryTraits {
            CountryTraits {
                name: name.to_string(),
                backgrounds: colors(bg),
                accessories: keys(acc),
                skin_tone_preference: keys(tones),
            }
        }
        fn personality(
            name: &str,
            expression: Expression,
            [primary, secondary, accent]: [&str; 3],
        ) -> PersonalityTraits {
            PersonalityTraits {
                name: name.to_string(),
                expression,
                palette: Palette {
                    primary: Color::new(primary),
                    secondary: Color::new(secondary),
                    accent: Color::new(accent),
                },
            }
        }
        fn age(sizes: [f64; 4], tones: &[&str], glasses_chance: f64) -> AgeTraits {
            let [face_size, eye_size, nose_size, mouth_size] = sizes;
            AgeTraits {
                face_size,
                eye_size,
                nose_size,
                mouth_size,
                skin_tones: keys(tones),
                glasses_chance,
            }
        }

        let skin_tones = BTreeMap::from([
            ("light".to_string(), Color::new("#FFDBAC")),
            ("medium_light".to_string(), Color::new("#F1C27D")),
            ("medium".to_string(), Color::new("#E0AC69")),
            ("medium_dark".to_string(), Color::new("#C68642")),
            ("dark".to_string(), Color::new("#8D5524")),
        ]);

        let age_groups = BTreeMap::from([
            (
                AgeGroup::Child,
                age([1.7, 1.2, 0.8, 0.9], &["light", "medium_light"], 0.1),
            ),
            (
                AgeGroup::Teen,
                age(
                    [1.75, 1.1, 0.9, 1.0],
                    &["light", "medium_light", "medium"],
                    0.2,
                ),
            ),
            (
                AgeGroup::Adult,
                age(
                    [1.8, 1.0, 1.0, 1.0],
                    &["light", "medium_light", "medium", "medium_dark"],
                    0.3,
                ),
            ),
            (
                AgeGroup::Senior,
                age(
                    [1.85, 0.9, 1.1, 0.95],
                    &["medium_light", "medium", "medium_dark"],
                    0.6,
                ),
            ),
        ]);

        let genders = BTreeMap::from([
            (
                Gender::Male,
                GenderTraits {
                    eyebrow_thickness: 5.0,
                },
            ),
            (
                Gender::Female,
                GenderTraits {
                    eyebrow_thickness: 3.0,
                },
            ),
        ]);

        let all_tones = ["light", "medium_light", "medium", "medium_dark", "dark"];
        let countries = vec![
            country(
                "USA",
                &["#F0F8FF", "#FFE4E1", "#F5F5DC"],
                &["baseball_cap", "sunglasses"],
                &all_tones,
            ),
            country(
                "India",
                &["#FFF8DC", "#FFFACD", "#F0E68C"],
                &["headband", "jewelry"],
                &["medium", "medium_dark", "dark"],
            ),
            country(
                "China",
                &["#FFE4E1", "#FDF5E6", "#FAF0E6"],
                &["glasses"],
                &["light", "medium_light"],
            ),
            country(
                "UK",
                &["#E6E6FA", "#F0F8FF", "#F5F5DC"],
                &["glasses", "hat"],
                &["light", "medium_light", "medium"],
            ),
            country(
                "Germany",
                &["#F5F5DC", "#FAF0E6", "#FDF5E6"],
                &["glasses"],
                &["light", "medium_light"],
            ),
            country(
                "Japan",
                &["#FFE4E1", "#FFF0F5", "#F8F8FF"],
                &["glasses"],
                &["light", "medium_light"],
            ),
            country(
                "Brazil",
                &["#FFFACD", "#F0E68C", "#DDA0DD"],
                &["headband", "sunglasses"],
                &["medium_light", "medium", "medium_dark", "dark"],
            ),
            country(
                "Nigeria",
                &["#F0E68C", "#DDA0DD", "#DA70D6"],
                &["headwrap", "jewelry"],
                &["medium_dark", "dark"],
            ),
        ];

        let personalities = vec![
            personality(
                "confident",
                Expression::Neutral,
                ["#FF6B6B", "#4ECDC4", "#45B7D1"],
            ),
            personality(
                "energetic",
                Expression::Happy,
                ["#E74C3C", "#F39C12", "#9B59B6"],
            ),
            personality(
                "professional",
                Expression::Neutral,
                ["#2C3E50", "#3498DB", "#95A5A6"],
            ),
            personality(
                "cheerful",
                Expression::Happy,
                ["#FFD700", "#FF6B6B", "#4ECDC4"],
            ),
            personality(
                "creative",
                Expression::Surprised,
                ["#9B59B6", "#E67E22", "#1ABC9C"],
            ),
            personality(
                "stylish",
                Expression::Wink,
                ["#212121", "#E91E63", "#FFC312"],
            ),
        ];

        Self {
            canvas: Canvas::default(),
            transform: TransformSpec::default(),
            background: BackgroundStyle::Solid,
            skin_tones,
            age_groups,
            genders,
            countries,
            default_country: "USA".to_string(),
            personalities,
            default_personality: "confident".to_string(),
            default_ages: vec![
                18, 22, 25, 28, 30, 32, 35, 38, 40, 42, 45, 48, 50, 55, 60, 65,
            ],
            default_expressions: vec![
                Expression::Happy,
                Expression::Neutral,
                Expression::Wink,
                Expression::Surprised,
                Expression::Laughing,
            ],
            eye_colors: colors(&["#654321", "#228B22", "#4682B4", "#8B4513", "#2F4F4F"]),
            initials_palette: colors(&[
                "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FECA57", "#FF9FF3", "#54A0FF",
                "#5F27CD", "#00D2D3", "#FF9F43", "#10AC84", "#EE5A24", "#0652DD", "#9C88FF",
                "#FFC312",
            ]),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/tables.rs"]
mod tests;
