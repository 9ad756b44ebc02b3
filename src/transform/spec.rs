use crate::foundation::core::Affine;
use crate::foundation::error::{AvatarError, AvatarResult};

/// Post-composition adjustment applied to a finished document.
///
/// The default value is a no-op and leaves markup byte-identical.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TransformSpec {
    /// Mirror horizontally.
    pub flip: bool,
    /// Clockwise rotation about the canvas center, in degrees.
    pub rotate_degrees: f64,
    /// Uniform scale about the canvas center, in percent (`100` = unchanged).
    pub scale_percent: f64,
    pub translate_x: f64,
    pub translate_y: f64,
    /// Corner radius patched onto the full-canvas background rectangle.
    pub corner_radius: f64,
    pub clip_to_circle: bool,
}

impl Default for TransformSpec {
    fn default() -> Self {
        Self {
            flip: false,
            rotate_degrees: 0.0,
            scale_percent: 100.0,
            translate_x: 0.0,
            translate_y: 0.0,
            corner_radius: 0.0,
            clip_to_circle: false,
        }
    }
}

impl TransformSpec {
    pub fn validate(&self) -> AvatarResult<()> {
        let finite = [
            ("rotate_degrees", self.rotate_degrees),
            ("scale_percent", self.scale_percent),
            ("translate_x", self.translate_x),
            ("translate_y", self.translate_y),
            ("corner_radius", self.corner_radius),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(AvatarError::invalid(format!("{name} must be finite")));
        }
        if self.scale_percent <= 0.0 {
            return Err(AvatarError::invalid("scale_percent must be > 0"));
        }
        if self.corner_radius < 0.0 {
            return Err(AvatarError::invalid("corner_radius must be >= 0"));
        }
        Ok(())
    }

    pub fn is_noop(&self) -> bool {
        !self.has_geometry() && self.corner_radius == 0.0 && !self.clip_to_circle
    }

    /// `true` when a transform group is needed (translate, rotate, scale, or flip).
    pub fn has_geometry(&self) -> bool {
        self.flip
            || self.rotate_degrees % 360.0 != 0.0
            || self.scale_percent != 100.0
            || self.translate_x != 0.0
            || self.translate_y != 0.0
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_percent / 100.0
    }

    /// The composed matrix of the transform group for a canvas of `width` x `height`:
    /// translate, then rotate about the center, then scale about the center, then flip.
    ///
    /// Reading order matches the SVG `transform` list, so a point is flipped first and
    /// translated last.
    pub fn affine(&self, width: f64, height: f64) -> Affine {
        let (cx, cy) = (width / 2.0, height / 2.0);
        let t_anchor = Affine::translate((cx, cy));
        let t_unanchor = Affine::translate((-cx, -cy));

        let t_translate = Affine::translate((self.translate_x, self.translate_y));
        let t_rotate = t_anchor * Affine::rotate(self.rotate_degrees.to_radians()) * t_unanchor;
        let s = self.scale_factor();
        let t_scale = t_anchor * Affine::scale(s) * t_unanchor;
        let t_flip = if self.flip {
            Affine::new([-1.0, 0.0, 0.0, 1.0, width, 0.0])
        } else {
            Affine::IDENTITY
        };

        t_translate * t_rotate * t_scale * t_flip
    }
}
