//! Geometric avatars derived purely from a seed hash.

use std::fmt;

use crate::foundation::core::Canvas;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::scene::primitive::Scene;

pub(crate) mod grid;
pub(crate) mod layered;
pub(crate) mod palette;
pub(crate) mod patterns;

pub use palette::IdenticonPalette;

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum IdenticonStyle {
    /// 5x5 mirrored cell grid.
    #[default]
    Grid,
    /// Segmented outer ring, middle shapes, and a core.
    Layered,
    Radial,
    Tribal,
    Crystal,
}

impl IdenticonStyle {
    pub const ALL: [IdenticonStyle; 5] = [
        IdenticonStyle::Grid,
        IdenticonStyle::Layered,
        IdenticonStyle::Radial,
        IdenticonStyle::Tribal,
        IdenticonStyle::Crystal,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IdenticonStyle::Grid => "grid",
            IdenticonStyle::Layered => "layered",
            IdenticonStyle::Radial => "radial",
            IdenticonStyle::Tribal => "tribal",
            IdenticonStyle::Crystal => "crystal",
        }
    }

    /// Lenient lookup: unknown names select the default style.
    pub fn from_key(s: &str) -> Self {
        let s = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .unwrap_or_default()
    }
}

impl fmt::Display for IdenticonStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[tracing::instrument(skip(canvas))]
pub fn compose_identicon(
    seed: &str,
    style: IdenticonStyle,
    canvas: Canvas,
) -> AvatarResult<Scene> {
    if seed.is_empty() {
        return Err(AvatarError::invalid("identicon seed must not be empty"));
    }
    let palette = IdenticonPalette::from_seed(seed);
    let mut scene = Scene::new(canvas);
    match style {
        IdenticonStyle::Grid => grid::compose(&mut scene, seed, &palette),
        IdenticonStyle::Layered => layered::compose(&mut scene, seed, &palette),
        IdenticonStyle::Radial => patterns::radial(&mut scene, seed, &palette),
        IdenticonStyle::Tribal => patterns::tribal(&mut scene, seed, &palette),
        IdenticonStyle::Crystal => patterns::crystal(&mut scene, seed, &palette),
    }
    Ok(scene)
}

#[cfg(test)]
#[path = "../../../tests/unit/scene/identicon/mod.rs"]
mod tests;
