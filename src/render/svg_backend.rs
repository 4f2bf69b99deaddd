use std::fmt::{self, Write};

use crate::core::{PathCommand, Viewport};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    CirclePrimitive, Color, LinePrimitive, PathPrimitive, RectPrimitive, Renderer, Scene,
    SceneLayer, TextHAlign, TextPrimitive, TextVAlign,
};

/// Renders scenes into a standalone SVG document held in memory.
///
/// Each scene layer becomes one `<g class="...">` group, painted in canonical
/// layer order.
#[derive(Debug, Clone)]
pub struct SvgRenderer {
    viewport: Viewport,
    document: String,
}

impl SvgRenderer {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            document: blank_document(viewport),
        }
    }

    /// Current document; a blank `<svg>` after `clear`.
    #[must_use]
    pub fn document(&self) -> &str {
        &self.document
    }

    #[must_use]
    pub fn into_document(self) -> String {
        self.document
    }
}

impl Renderer for SvgRenderer {
    fn clear(&mut self) -> ChartResult<()> {
        self.document = blank_document(self.viewport);
        Ok(())
    }

    fn render(&mut self, scene: &Scene) -> ChartResult<()> {
        scene.validate()?;
        self.viewport = scene.viewport;
        let mut out = String::with_capacity(4096);
        write_document(&mut out, scene)
            .map_err(|err| ChartError::InvalidData(format!("failed to write svg: {err}")))?;
        self.document = out;
        Ok(())
    }
}

fn blank_document(viewport: Viewport) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}"></svg>"#,
        w = viewport.width,
        h = viewport.height
    )
}

fn write_document(out: &mut String, scene: &Scene) -> fmt::Result {
    let Viewport { width, height } = scene.viewport;
    write!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
    )?;
    for layer in &scene.layers {
        if layer.is_empty() {
            continue;
        }
        write_layer(out, layer)?;
    }
    out.push_str("</svg>");
    Ok(())
}

fn write_layer(out: &mut String, layer: &SceneLayer) -> fmt::Result {
    write!(out, r#"<g class="{}">"#, layer.kind.name())?;
    for rect in &layer.rects {
        write_rect(out, rect)?;
    }
    for line in &layer.lines {
        write_line(out, line)?;
    }
    for path in &layer.paths {
        write_path(out, path)?;
    }
    for circle in &layer.circles {
        write_circle(out, circle)?;
    }
    for text in &layer.texts {
        write_text(out, text)?;
    }
    out.push_str("</g>");
    Ok(())
}

fn write_rect(out: &mut String, rect: &RectPrimitive) -> fmt::Result {
    write!(
        out,
        r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}""#,
        num(rect.x),
        num(rect.y),
        num(rect.width),
        num(rect.height),
        css(rect.fill_color)
    )?;
    if rect.corner_radius > 0.0 {
        write!(out, r#" rx="{}""#, num(rect.corner_radius))?;
    }
    if rect.border_width > 0.0 {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            css(rect.border_color),
            num(rect.border_width)
        )?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_line(out: &mut String, line: &LinePrimitive) -> fmt::Result {
    write!(
        out,
        r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
        num(line.x1),
        num(line.y1),
        num(line.x2),
        num(line.y2),
        css(line.color),
        num(line.stroke_width)
    )
}

fn write_path(out: &mut String, path: &PathPrimitive) -> fmt::Result {
    out.push_str(r#"<path fill="none" d=""#);
    for (index, command) in path.commands.iter().enumerate() {
        if index > 0 {
            out.push(' ');
        }
        match *command {
            PathCommand::MoveTo { x, y } => write!(out, "M{},{}", num(x), num(y))?,
            PathCommand::LineTo { x, y } => write!(out, "L{},{}", num(x), num(y))?,
            PathCommand::CubicTo {
                c1x,
                c1y,
                c2x,
                c2y,
                x,
                y,
            } => write!(
                out,
                "C{},{},{},{},{},{}",
                num(c1x),
                num(c1y),
                num(c2x),
                num(c2y),
                num(x),
                num(y)
            )?,
        }
    }
    write!(
        out,
        r#"" stroke="{}" stroke-width="{}"/>"#,
        css(path.color),
        num(path.stroke_width)
    )
}

fn write_circle(out: &mut String, circle: &CirclePrimitive) -> fmt::Result {
    write!(
        out,
        r#"<circle cx="{}" cy="{}" r="{}" fill="{}""#,
        num(circle.cx),
        num(circle.cy),
        num(circle.radius),
        css(circle.fill_color)
    )?;
    if circle.stroke_width > 0.0 {
        write!(
            out,
            r#" stroke="{}" stroke-width="{}""#,
            css(circle.stroke_color),
            num(circle.stroke_width)
        )?;
    }
    out.push_str("/>");
    Ok(())
}

fn write_text(out: &mut String, text: &TextPrimitive) -> fmt::Result {
    let anchor = match text.h_align {
        TextHAlign::Left => "start",
        TextHAlign::Center => "middle",
        TextHAlign::Right => "end",
    };
    let baseline = match text.v_align {
        TextVAlign::Top => "hanging",
        TextVAlign::Middle => "central",
    };
    write!(
        out,
        r#"<text x="{}" y="{}" font-size="{}" fill="{}" text-anchor="{anchor}" dominant-baseline="{baseline}">"#,
        num(text.x),
        num(text.y),
        num(text.font_size_px),
        css(text.color)
    )?;
    escape_into(out, &text.text);
    out.push_str("</text>");
    Ok(())
}

fn css(color: Color) -> String {
    color.to_css()
}

/// Fixed three-decimal output with trailing zeros trimmed.
fn num(value: f64) -> String {
    let fixed = format!("{value:.3}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

fn escape_into(out: &mut String, text: &str) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
}
