//! SVG markup generation for a laid-out frame.
//!
//! Entering and exiting groups carry declarative opacity animations, and
//! updating elements animate from their previous geometry, so consecutive
//! pages transition instead of snapping.

use crate::chart::Frame;
use crate::error::ChartError;
use crate::render::OutputStream;
use crate::render::Render;
use crate::scene::HoverNode;
use crate::scene::Phase;
use crate::scene::SeriesNode;

const TRANSITION: &str = "0.25s";

impl Render for Frame {
    fn render<O>(&self, output: &mut O) -> Result<(), ChartError>
    where
        O: OutputStream,
    {
        for node in &self.series {
            render_series(node, output)?;
        }

        for node in &self.hover {
            render_hover(node, output)?;
        }

        Ok(())
    }
}

fn render_series<O>(node: &SeriesNode, output: &mut O) -> Result<(), ChartError>
where
    O: OutputStream,
{
    match node.phase {
        Phase::Enter => output.write(&format!(
            r#"<g class="set" opacity="0"><animate attributeName="opacity" from="0" to="1" dur="{TRANSITION}" fill="freeze"/>"#
        ))?,
        Phase::Update => output.write(r#"<g class="set">"#)?,
        Phase::Exit => output.write(&format!(
            r#"<g class="set"><animate attributeName="opacity" from="1" to="0" dur="{TRANSITION}" fill="freeze"/>"#
        ))?,
    }

    render_label(node, output)?;
    render_line(node, output)?;

    output.write("</g>")
}

fn render_label<O>(node: &SeriesNode, output: &mut O) -> Result<(), ChartError>
where
    O: OutputStream,
{
    let shape = &node.shape;
    let visibility = if node.show_label { "visible" } else { "hidden" };

    output.write(&format!(
        r#"<text class="label" x="{x}" y="{y}" font-size="{size}" font-weight="bold" alignment-baseline="text-after-edge" visibility="{visibility}" stroke="{stroke}" fill="{fill}">"#,
        x = shape.label_x,
        y = shape.label_y,
        size = shape.font_size,
        stroke = node.color.with_opacity(0.8),
        fill = node.color.with_opacity(0.2),
    ))?;

    if let Some(previous) = &node.previous {
        attribute_transition(output, "y", previous.label_y, shape.label_y)?;
        attribute_transition(output, "font-size", previous.font_size, shape.font_size)?;
    }

    output.write(&escape(&shape.label))?;
    output.write("</text>")
}

fn render_line<O>(node: &SeriesNode, output: &mut O) -> Result<(), ChartError>
where
    O: OutputStream,
{
    let shape = &node.shape;

    output.write(&format!(
        r#"<path class="line" fill="none" stroke="{color}" d="{d}">"#,
        color = node.color,
        d = shape.path,
    ))?;

    if let Some(previous) = &node.previous {
        // Path interpolation over mismatched command lists is undefined,
        // so the path snaps when the sample count changed.
        if previous.points == shape.points && previous.path != shape.path {
            output.write(&format!(
                r#"<animate attributeName="d" from="{from}" to="{to}" dur="{TRANSITION}"/>"#,
                from = previous.path,
                to = shape.path,
            ))?;
        }
    }

    output.write("</path>")
}

fn render_hover<O>(node: &HoverNode, output: &mut O) -> Result<(), ChartError>
where
    O: OutputStream,
{
    output.write(r#"<g class="group">"#)?;
    output.write(&format!(
        r#"<circle class="point" r="4" cx="{cx}" cy="{cy}" stroke="{stroke}" fill="{fill}"/>"#,
        cx = node.cx,
        cy = node.cy,
        stroke = node.color,
        fill = node.color.with_opacity(0.4),
    ))?;
    output.write(&format!(
        r#"<path class="area" fill="transparent" d="{d}" data-label="{label}" data-x="{x}" data-y="{y}"/>"#,
        d = node.area,
        label = escape(&node.label),
        x = node.date,
        y = node.amount,
    ))?;
    output.write("</g>")
}

fn attribute_transition<O>(
    output: &mut O,
    name: &str,
    from: f64,
    to: f64,
) -> Result<(), ChartError>
where
    O: OutputStream,
{
    if from == to || !from.is_finite() || !to.is_finite() {
        return Ok(());
    }

    output.write(&format!(
        r#"<animate attributeName="{name}" from="{from}" to="{to}" dur="{TRANSITION}"/>"#
    ))
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
