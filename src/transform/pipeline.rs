use crate::foundation::core::Num;
use crate::foundation::error::{AvatarError, AvatarResult};
use crate::transform::spec::TransformSpec;

/// `id` of the injected circular clip path.
pub const CLIP_PATH_ID: &str = "avatar-clip";

/// Gap between the clip circle and the shorter canvas edge.
pub const CLIP_INSET: f64 = 2.0;

/// Apply `spec` to a finished SVG document.
///
/// A no-op spec returns `markup` unchanged without parsing it. Otherwise the document is parsed
/// to find the root element, its user-space size, and the full-canvas background rectangle, and
/// the body is rewritten in three steps:
///
/// 1. corner radius: `rx`/`ry` inserted on the background `<rect>` only
/// 2. transform group: translate, rotate, scale, flip (about the canvas center)
/// 3. circular clip: a `<clipPath>` definition plus a clipped group around everything above
pub fn apply_transforms(markup: &str, spec: &TransformSpec) -> AvatarResult<String> {
    if spec.is_noop() {
        return Ok(markup.to_owned());
    }
    spec.validate()?;

    let doc = roxmltree::Document::parse(markup)
        .map_err(|e| AvatarError::invalid(format!("markup is not well-formed: {e}")))?;
    let root = doc.root_element();
    if root.tag_name().name() != "svg" {
        return Err(AvatarError::invalid(format!(
            "root element must be <svg>, got <{}>",
            root.tag_name().name()
        )));
    }
    let (width, height) = user_space_size(root)?;

    let range = root.range();
    let open_end = start_tag_end(markup, range.start)
        .ok_or_else(|| AvatarError::invalid("unterminated <svg> start tag"))?;
    if markup.as_bytes()[open_end - 2] == b'/' {
        return Err(AvatarError::invalid("<svg> element has no content"));
    }
    let close_start = markup[..range.end]
        .rfind("</")
        .filter(|&i| i >= open_end)
        .ok_or_else(|| AvatarError::invalid("missing </svg> end tag"))?;

    let mut body = markup[open_end..close_start].to_owned();

    if spec.corner_radius > 0.0 {
        match background_rect_start(root, width, height) {
            Some(start) => {
                let at = tag_name_end(markup, start) - open_end;
                let r = Num(spec.corner_radius);
                body.insert_str(at, &format!(" rx=\"{r}\" ry=\"{r}\""));
            }
            None => tracing::debug!("corner radius requested but no background rect found"),
        }
    }

    if spec.has_geometry() {
        body = format!(
            "\n<g transform=\"{}\">{body}</g>\n",
            transform_list(spec, width, height)
        );
    }

    if spec.clip_to_circle {
        let r = (width.min(height) / 2.0 - CLIP_INSET).max(0.0);
        body = format!(
            "\n<defs><clipPath id=\"{CLIP_PATH_ID}\"><circle cx=\"{}\" cy=\"{}\" r=\"{}\"/></clipPath></defs>\n<g clip-path=\"url(#{CLIP_PATH_ID})\">{body}</g>\n",
            Num(width / 2.0),
            Num(height / 2.0),
            Num(r),
        );
    }

    let mut out = String::with_capacity(markup.len() + body.len());
    out.push_str(&markup[..open_end]);
    out.push_str(&body);
    out.push_str(&markup[close_start..]);
    Ok(out)
}

/// The SVG `transform` attribute value for `spec`; identity steps are omitted.
pub fn transform_list(spec: &TransformSpec, width: f64, height: f64) -> String {
    let (cx, cy) = (width / 2.0, height / 2.0);
    let mut parts = Vec::with_capacity(4);

    if spec.translate_x != 0.0 || spec.translate_y != 0.0 {
        parts.push(format!(
            "translate({} {})",
            Num(spec.translate_x),
            Num(spec.translate_y)
        ));
    }
    if spec.rotate_degrees % 360.0 != 0.0 {
        parts.push(format!(
            "rotate({} {} {})",
            Num(spec.rotate_degrees),
            Num(cx),
            Num(cy)
        ));
    }
    if spec.scale_percent != 100.0 {
        // Scale matrix plus the translate that keeps the center fixed.
        let s = spec.scale_factor();
        parts.push(format!(
            "matrix({} 0 0 {} {} {})",
            Num(s),
            Num(s),
            Num(cx - s * cx),
            Num(cy - s * cy)
        ));
    }
    if spec.flip {
        parts.push(format!("matrix(-1 0 0 1 {} 0)", Num(width)));
    }

    parts.join(" ")
}

/// User-space size from `viewBox`, falling back to numeric `width`/`height`.
fn user_space_size(root: roxmltree::Node<'_, '_>) -> AvatarResult<(f64, f64)> {
    if let Some(vb) = root.attribute("viewBox") {
        let nums = vb
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|s| !s.is_empty())
            .map(str::parse::<f64>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| AvatarError::invalid(format!("invalid viewBox '{vb}'")))?;
        if let [_, _, w, h] = nums[..] {
            if w > 0.0 && h > 0.0 {
                return Ok((w, h));
            }
        }
        return Err(AvatarError::invalid(format!("invalid viewBox '{vb}'")));
    }

    fn dim(root: roxmltree::Node<'_, '_>, name: &str) -> AvatarResult<f64> {
        let raw = root
            .attribute(name)
            .ok_or_else(|| AvatarError::invalid(format!("<svg> has no {name} or viewBox")))?;
        raw.trim()
            .trim_end_matches("px")
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .ok_or_else(|| AvatarError::invalid(format!("<svg> {name} '{raw}' is not a size")))
    }

    Ok((dim(root, "width")?, dim(root, "height")?))
}

/// Byte offset of the first `<rect>` that covers the whole canvas and has no radius yet.
fn background_rect_start(root: roxmltree::Node<'_, '_>, width: f64, height: f64) -> Option<usize> {
    fn covers(value: Option<&str>, full: f64) -> bool {
        match value {
            Some("100%") => true,
            Some(v) => v.parse::<f64>().is_ok_and(|v| v == full),
            None => false,
        }
    }
    fn at_origin(value: Option<&str>) -> bool {
        value.is_none_or(|v| v.parse::<f64>().is_ok_and(|v| v == 0.0))
    }

    root.descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "rect")
        .find(|n| {
            covers(n.attribute("width"), width)
                && covers(n.attribute("height"), height)
                && at_origin(n.attribute("x"))
                && at_origin(n.attribute("y"))
                && n.attribute("rx").is_none()
                && n.attribute("ry").is_none()
        })
        .map(|n| n.range().start)
}

/// Index just past the qualified element name of the start tag at `from` (`<rect`, `<svg:rect`).
fn tag_name_end(markup: &str, from: usize) -> usize {
    markup[from + 1..]
        .find(|c: char| c.is_whitespace() || c == '/' || c == '>')
        .map_or(markup.len(), |i| from + 1 + i)
}

/// Index just past the `>` closing the start tag that begins at `from`, skipping quoted values.
fn start_tag_end(markup: &str, from: usize) -> Option<usize> {
    let mut quote: Option<u8> = None;
    for (i, &b) in markup.as_bytes()[from..].iter().enumerate() {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => {}
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b == b'>' => return Some(from + i + 1),
            None => {}
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/transform/pipeline.rs"]
mod tests;
