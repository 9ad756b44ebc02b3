//! Avatarfy generates deterministic, procedurally drawn SVG avatars.
//!
//! Every visual choice is derived from an identity key through a salted CRC32, so the same key
//! and the same overrides always produce byte-identical markup. Three families are available:
//!
//! - cartoon faces driven by age, gender, country, personality, and expression
//! - initials badges derived from an email address
//! - geometric identicons derived purely from a seed
//!
//! [`AvatarGenerator`] ties resolution, composition, serialization, post-transforms, and storage
//! together.
#![forbid(unsafe_code)]

mod foundation;

pub(crate) mod attributes;
pub(crate) mod config;
pub(crate) mod generator;
pub(crate) mod render;
pub(crate) mod scene;
pub(crate) mod store;
pub(crate) mod transform;

pub use crate::foundation::core::{
    Affine, BezPath, Canvas, Color, DESIGN_SIZE, Num, Point, Rect, Vec2,
};
pub use crate::foundation::error::{AvatarError, AvatarResult};
pub use crate::foundation::hash::{chance, crc32, hash_salted, pick, pick_index};

pub use crate::attributes::email::EmailIdentity;
pub use crate::attributes::model::{
    AgeGroup, AgeInput, AttributeRecord, BackgroundStyle, BrowAngle, EyeShape, Expression,
    ExpressionTraits, Gender, MouthShape, Overrides, Palette,
};
pub use crate::attributes::resolve::resolve;
pub use crate::config::tables::{
    AgeTraits, AvatarConfig, CountryTraits, GenderTraits, PersonalityTraits,
};
pub use crate::generator::avatar_generator::{AvatarGenerator, BatchOpts};
pub use crate::render::svg::{escape_xml, path_data, render_primitive, render_scene};
pub use crate::scene::face::compose_face;
pub use crate::scene::identicon::{IdenticonPalette, IdenticonStyle, compose_identicon};
pub use crate::scene::initials::{compose_initials, initials_color};
pub use crate::scene::primitive::{
    Fill, GradientStop, Paint, Primitive, Scene, Stroke, TextStyle, TextWeight,
};
pub use crate::store::sink::{AvatarKind, AvatarSink, FileSink, InMemorySink, logical_name};
pub use crate::transform::pipeline::{CLIP_PATH_ID, apply_transforms, transform_list};
pub use crate::transform::spec::TransformSpec;
