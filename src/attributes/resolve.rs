use crate::attributes::model::{AgeInput, AttributeRecord, Expression, Gender, Overrides};
use crate::config::tables::{AgeTraits, AvatarConfig, CountryTraits};
use crate::foundation::core::Color;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::foundation::hash::{chance, pick};

/// Resolve every attribute of one avatar from its identity key.
///
/// Each field takes the caller's override when present; otherwise it is picked from the
/// configured tables with a salted hash of `key`, so the result is a pure function of
/// `(config, key, overrides)`.
#[tracing::instrument(skip(config, overrides))]
pub fn resolve(
    config: &AvatarConfig,
    key: &str,
    overrides: &Overrides,
) -> AvatarResult<AttributeRecord> {
    if key.is_empty() {
        return Err(AvatarError::invalid("identity key must not be empty"));
    }

    let age = match overrides.age {
        Some(age) => age,
        None => AgeInput::Years(*pick(key, "age", &config.default_ages)?),
    };
    let age_group = age.age_group();
    let gender = match overrides.gender {
        Some(g) => g,
        None => *pick(key, "gender", &Gender::DEFAULTABLE)?,
    };
    let country_key = match &overrides.country {
        Some(c) => c.clone(),
        None => pick(key, "country", &config.countries)?.name.clone(),
    };
    let personality = match &overrides.personality {
        Some(p) => p.clone(),
        None => pick(key, "personality", &config.personalities)?.name.clone(),
    };

    let country = config.country(&country_key)?;
    let age_traits = config.age_traits(age_group)?;
    let gender_traits = config.gender_traits(gender)?;
    let personality_traits = match config.personality(&personality) {
        Some(p) => p,
        None => {
            tracing::debug!(%personality, "unknown personality, using default palette");
            config.default_personality_traits()?
        }
    };
    // Unknown personalities carry no mood of their own.
    let mapped = config
        .personality(&personality)
        .map_or(Expression::Neutral, |p| p.expression);

    let expression = match (&overrides.expression, age) {
        (Some(e), _) => Expression::from_key(e),
        (None, AgeInput::Group(_)) => mapped,
        (None, AgeInput::Years(_)) if mapped != Expression::Neutral => mapped,
        (None, AgeInput::Years(_)) => *pick(key, "expression", &config.default_expressions)?,
    };

    let (skin_tone_key, skin_tone) = skin_tone(config, key, overrides, country, age_traits)?;
    let background_color = pick(key, "background", &country.backgrounds)?.clone();

    let has_glasses = match overrides.has_glasses {
        Some(g) => g,
        None => country.allows_glasses() && chance(key, "glasses", age_traits.glasses_chance),
    };
    let eye_color = match &overrides.eye_color {
        Some(c) => c.clone(),
        None => pick(key, "eyecolor", &config.eye_colors)?.clone(),
    };

    let record = AttributeRecord {
        age: age.years(),
        age_group,
        gender,
        country: country.name.clone(),
        personality,
        expression,
        skin_tone_key,
        skin_tone,
        eye_color,
        background_color,
        background: overrides.background.unwrap_or(config.background),
        palette: personality_traits.palette.clone(),
        has_glasses,
        face_size: age_traits.face_size,
        eye_size: age_traits.eye_size,
        nose_size: age_traits.nose_size,
        mouth_size: age_traits.mouth_size,
        eyebrow_thickness: gender_traits.eyebrow_thickness,
    };

    tracing::debug!(
        age_group = %record.age_group,
        gender = %record.gender,
        country = %record.country,
        expression = %record.expression,
        skin_tone = %record.skin_tone_key,
        glasses = record.has_glasses,
        "resolved attributes"
    );
    Ok(record)
}

/// Country preference order filtered by the age group's allowed tones; the age-group list
/// alone when the two do not overlap.
fn skin_tone(
    config: &AvatarConfig,
    key: &str,
    overrides: &Overrides,
    country: &CountryTraits,
    age: &AgeTraits,
) -> AvatarResult<(String, Color)> {
    if let Some(wanted) = &overrides.skin_tone {
        match config.skin_tone(wanted) {
            Some(color) => return Ok((wanted.clone(), color.clone())),
            None => tracing::debug!(%wanted, "unknown skin tone override ignored"),
        }
    }

    let preferred: Vec<&String> = country
        .skin_tone_preference
        .iter()
        .filter(|t| age.skin_tones.contains(t))
        .collect();
    let candidates: Vec<&String> = if preferred.is_empty() {
        age.skin_tones.iter().collect()
    } else {
        preferred
    };

    let tone = *pick(key, "skintone", &candidates)?;
    let color = config
        .skin_tone(tone)
        .ok_or_else(|| AvatarError::config(format!("skin tone '{tone}' has no color")))?;
    Ok((tone.clone(), color.clone()))
}

#[cfg(test)]
#[path = "../../tests/unit/attributes/resolve.rs"]
mod tests;
