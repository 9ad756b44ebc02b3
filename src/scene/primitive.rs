use crate::foundation::core::{BezPath, Canvas, Color, DESIGN_SIZE, Point, Rect, Vec2};

#[derive(Clone, Debug, PartialEq)]
pub enum Fill {
    None,
    Color(Color),
    /// Reference to a gradient defined earlier in the same scene.
    Gradient(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Paint {
    pub fill: Fill,
    pub stroke: Option<Stroke>,
    pub opacity: Option<f64>,
    pub fill_opacity: Option<f64>,
}

impl Paint {
    pub fn fill(color: impl Into<Color>) -> Self {
        Self {
            fill: Fill::Color(color.into()),
            stroke: None,
            opacity: None,
            fill_opacity: None,
        }
    }

    pub fn gradient(id: impl Into<String>) -> Self {
        Self {
            fill: Fill::Gradient(id.into()),
            stroke: None,
            opacity: None,
            fill_opacity: None,
        }
    }

    /// Stroke only, no fill.
    pub fn outline(color: impl Into<Color>, width: f64) -> Self {
        Self {
            fill: Fill::None,
            stroke: Some(Stroke {
                color: color.into(),
                width,
            }),
            opacity: None,
            fill_opacity: None,
        }
    }

    pub fn stroked(mut self, color: impl Into<Color>, width: f64) -> Self {
        self.stroke = Some(Stroke {
            color: color.into(),
            width,
        });
        self
    }

    pub fn with_opacity(mut self, opacity: f64) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn with_fill_opacity(mut self, opacity: f64) -> Self {
        self.fill_opacity = Some(opacity);
        self
    }
}

impl From<Color> for Paint {
    fn from(value: Color) -> Self {
        Self::fill(value)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GradientStop {
    /// Offset in `0..=1`.
    pub offset: f64,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextWeight {
    #[default]
    Normal,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub weight: TextWeight,
    /// Center the text horizontally and vertically on its anchor point.
    pub centered: bool,
}

/// One drawing instruction. Coordinates are in design space (see [`DESIGN_SIZE`]).
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    /// Full-canvas rectangle; the transform pipeline rounds its corners.
    Background { paint: Paint },
    Rect {
        rect: Rect,
        corner_radius: f64,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f64,
        paint: Paint,
    },
    Ellipse {
        center: Point,
        radii: Vec2,
        /// Rotation about `center` in degrees.
        rotation_deg: f64,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
    Path { path: BezPath, paint: Paint },
    Polygon { points: Vec<Point>, paint: Paint },
    Text {
        anchor: Point,
        content: String,
        style: TextStyle,
        paint: Paint,
    },
    /// Vertical or diagonal gradient definition, referenced by [`Fill::Gradient`].
    LinearGradient {
        id: String,
        from: Point,
        to: Point,
        stops: Vec<GradientStop>,
    },
    /// Circular gradient definition, referenced by [`Fill::Gradient`].
    RadialGradient {
        id: String,
        center: Point,
        radius: f64,
        stops: Vec<GradientStop>,
    },
}

impl Primitive {
    pub fn kind(&self) -> &'static str {
        match self {
            Primitive::Background { .. } => "background",
            Primitive::Rect { .. } => "rect",
            Primitive::Circle { .. } => "circle",
            Primitive::Ellipse { .. } => "ellipse",
            Primitive::Line { .. } => "line",
            Primitive::Path { .. } => "path",
            Primitive::Polygon { .. } => "polygon",
            Primitive::Text { .. } => "text",
            Primitive::LinearGradient { .. } => "linear-gradient",
            Primitive::RadialGradient { .. } => "radial-gradient",
        }
    }
}

/// Ordered primitive list plus the output size of the document it renders to.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub canvas: Canvas,
    pub primitives: Vec<Primitive>,
}

impl Scene {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            primitives: Vec::new(),
        }
    }

    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    pub fn extend(&mut self, primitives: impl IntoIterator<Item = Primitive>) {
        self.primitives.extend(primitives);
    }

    pub fn len(&self) -> usize {
        self.primitives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    pub fn count_kind(&self, kind: &str) -> usize {
        self.primitives.iter().filter(|p| p.kind() == kind).count()
    }

    /// Center of the design space.
    pub fn center() -> Point {
        Point::new(DESIGN_SIZE / 2.0, DESIGN_SIZE / 2.0)
    }
}
