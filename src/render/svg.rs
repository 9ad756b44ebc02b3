//! Scene -> SVG markup serializer.
//!
//! Every document shares the same prolog and a `0 0 256 256` viewBox; `width`/`height` come
//! from the scene canvas so the design scales to any output size.

use std::fmt;

use crate::foundation::core::{BezPath, DESIGN_SIZE, Num, Point};
use crate::scene::primitive::{Fill, GradientStop, Paint, Primitive, Scene, TextWeight};

pub const XML_PROLOG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

#[tracing::instrument(skip(scene), fields(primitives = scene.len()))]
pub fn render_scene(scene: &Scene) -> String {
    let mut out = String::with_capacity(256 + scene.len() * 96);
    out.push_str(XML_PROLOG);
    out.push('\n');
    out.push_str(
        &Tag::new("svg")
            .attr("xmlns", SVG_NS)
            .attr("width", scene.canvas.width)
            .attr("height", scene.canvas.height)
            .attr(
                "viewBox",
                format_args!("0 0 {} {}", Num(DESIGN_SIZE), Num(DESIGN_SIZE)),
            )
            .open(),
    );
    out.push('\n');
    for p in &scene.primitives {
        out.push_str("  ");
        out.push_str(&render_primitive(p));
        out.push('\n');
    }
    out.push_str("</svg>\n");
    out
}

pub fn render_primitive(p: &Primitive) -> String {
    match p {
        Primitive::Background { paint } => Tag::new("rect")
            .attr("width", "100%")
            .attr("height", "100%")
            .paint(paint)
            .empty(),
        Primitive::Rect {
            rect,
            corner_radius,
            paint,
        } => {
            let mut tag = Tag::new("rect")
                .num("x", rect.x0)
                .num("y", rect.y0)
                .num("width", rect.width())
                .num("height", rect.height());
            if *corner_radius > 0.0 {
                tag = tag.num("rx", *corner_radius).num("ry", *corner_radius);
            }
            tag.paint(paint).empty()
        }
        Primitive::Circle {
            center,
            radius,
            paint,
        } => Tag::new("circle")
            .num("cx", center.x)
            .num("cy", center.y)
            .num("r", *radius)
            .paint(paint)
            .empty(),
        Primitive::Ellipse {
            center,
            radii,
            rotation_deg,
            paint,
        } => {
            let mut tag = Tag::new("ellipse")
                .num("cx", center.x)
                .num("cy", center.y)
                .num("rx", radii.x)
                .num("ry", radii.y)
                .paint(paint);
            if *rotation_deg != 0.0 {
                tag = tag.attr(
                    "transform",
                    format_args!(
                        "rotate({} {} {})",
                        Num(*rotation_deg),
                        Num(center.x),
                        Num(center.y)
                    ),
                );
            }
            tag.empty()
        }
        Primitive::Line { from, to, paint } => Tag::new("line")
            .num("x1", from.x)
            .num("y1", from.y)
            .num("x2", to.x)
            .num("y2", to.y)
            .paint(paint)
            .empty(),
        Primitive::Path { path, paint } => Tag::new("path")
            .attr("d", path_data(path))
            .paint(paint)
            .empty(),
        Primitive::Polygon { points, paint } => Tag::new("polygon")
            .attr("points", points_list(points))
            .paint(paint)
            .empty(),
        Primitive::Text {
            anchor,
            content,
            style,
            paint,
        } => {
            let mut tag = Tag::new("text")
                .num("x", anchor.x)
                .num("y", anchor.y)
                .attr("font-family", &style.font_family)
                .num("font-size", style.font_size);
            if style.weight == TextWeight::Bold {
                tag = tag.attr("font-weight", "bold");
            }
            if style.centered {
                tag = tag
                    .attr("text-anchor", "middle")
                    .attr("dominant-baseline", "middle");
            }
            tag.paint(paint).with_text(content)
        }
        Primitive::LinearGradient {
            id,
            from,
            to,
            stops,
        } => {
            let mut body = Tag::new("linearGradient")
                .attr("id", id)
                .num("x1", from.x)
                .num("y1", from.y)
                .num("x2", to.x)
                .num("y2", to.y)
                .attr("gradientUnits", "userSpaceOnUse")
                .open();
            for stop in stops {
                body.push_str(&render_stop(stop));
            }
            body.push_str("</linearGradient>");
            format!("<defs>{body}</defs>")
        }
        Primitive::RadialGradient {
            id,
            center,
            radius,
            stops,
        } => {
            let mut body = Tag::new("radialGradient")
                .attr("id", id)
                .num("cx", center.x)
                .num("cy", center.y)
                .num("r", *radius)
                .attr("gradientUnits", "userSpaceOnUse")
                .open();
            for stop in stops {
                body.push_str(&render_stop(stop));
            }
            body.push_str("</radialGradient>");
            format!("<defs>{body}</defs>")
        }
    }
}

fn render_stop(stop: &GradientStop) -> String {
    Tag::new("stop")
        .attr("offset", format_args!("{}%", Num(stop.offset * 100.0)))
        .attr("stop-color", &stop.color)
        .empty()
}

/// SVG path data with absolute commands only.
pub fn path_data(path: &BezPath) -> String {
    use kurbo::PathEl;

    let mut parts = Vec::with_capacity(path.elements().len());
    for el in path.elements() {
        parts.push(match *el {
            PathEl::MoveTo(p) => format!("M {} {}", Num(p.x), Num(p.y)),
            PathEl::LineTo(p) => format!("L {} {}", Num(p.x), Num(p.y)),
            PathEl::QuadTo(c, p) => {
                format!("Q {} {} {} {}", Num(c.x), Num(c.y), Num(p.x), Num(p.y))
            }
            PathEl::CurveTo(c1, c2, p) => format!(
                "C {} {} {} {} {} {}",
                Num(c1.x),
                Num(c1.y),
                Num(c2.x),
                Num(c2.y),
                Num(p.x),
                Num(p.y)
            ),
            PathEl::ClosePath => "Z".to_string(),
        });
    }
    parts.join(" ")
}

fn points_list(points: &[Point]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", Num(p.x), Num(p.y)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape text for use in attribute values and element content.
pub fn escape_xml(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Start tag under construction.
struct Tag {
    name: &'static str,
    buf: String,
}

impl Tag {
    fn new(name: &'static str) -> Self {
        let mut buf = String::with_capacity(64);
        buf.push('<');
        buf.push_str(name);
        Self { name, buf }
    }

    fn attr(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.buf.push(' ');
        self.buf.push_str(name);
        self.buf.push_str("=\"");
        self.buf.push_str(&escape_xml(&value.to_string()));
        self.buf.push('"');
        self
    }

    fn num(self, name: &str, value: f64) -> Self {
        self.attr(name, Num(value))
    }

    fn paint(mut self, paint: &Paint) -> Self {
        self = match &paint.fill {
            Fill::None => self.attr("fill", "none"),
            Fill::Color(c) => self.attr("fill", c),
            Fill::Gradient(id) => self.attr("fill", format_args!("url(#{id})")),
        };
        if let Some(stroke) = &paint.stroke {
            self = self
                .attr("stroke", &stroke.color)
                .num("stroke-width", stroke.width);
        }
        if let Some(o) = paint.opacity {
            self = self.num("opacity", o);
        }
        if let Some(o) = paint.fill_opacity {
            self = self.num("fill-opacity", o);
        }
        self
    }

    fn open(mut self) -> String {
        self.buf.push('>');
        self.buf
    }

    fn empty(mut self) -> String {
        self.buf.push_str("/>");
        self.buf
    }

    fn with_text(self, content: &str) -> String {
        let name = self.name;
        let mut s = self.open();
        s.push_str(&escape_xml(content));
        s.push_str("</");
        s.push_str(name);
        s.push('>');
        s
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/svg.rs"]
mod tests;
