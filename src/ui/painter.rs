//! Maps face-renderer primitives onto a ratatui canvas. The only module
//! that knows both vocabularies; the face renderer itself stays free of
//! any windowing or terminal types.

use ratatui::{
    style::{Color, Style},
    text::Line,
    widgets::canvas::{Circle as CanvasCircle, Context, Line as CanvasLine, Rectangle},
};

use crate::face::{Primitive, Rgb};
use crate::geometry::{point_on_circle, Point};

/// Degrees between the radial strokes that approximate a filled pie.
const PIE_STEP_DEG: f64 = 2.0;

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

fn line(from: Point, to: Point, c: Rgb) -> CanvasLine {
    CanvasLine {
        x1: from.x,
        y1: from.y,
        x2: to.x,
        y2: to.y,
        color: color(c),
    }
}

pub fn paint(ctx: &mut Context, primitives: &[Primitive]) {
    for primitive in primitives {
        match primitive {
            Primitive::Circle {
                center,
                radius,
                stroke,
                ..
            } => {
                ctx.draw(&CanvasCircle {
                    x: center.x,
                    y: center.y,
                    radius: *radius,
                    color: color(*stroke),
                });
            }
            Primitive::Pie {
                center,
                radius,
                start_deg,
                sweep_deg,
                fill,
            } => {
                // Braille cells can't flood-fill, so sweep radial strokes.
                if *sweep_deg > 0.0 {
                    let steps = (sweep_deg / PIE_STEP_DEG).ceil() as usize;
                    for k in 0..=steps {
                        let deg = start_deg + (k as f64 * PIE_STEP_DEG).min(*sweep_deg);
                        let tip = point_on_circle(*center, *radius, deg);
                        ctx.draw(&line(*center, tip, *fill));
                    }
                }
            }
            Primitive::Segment {
                from, to, color: c, ..
            } => {
                ctx.draw(&line(*from, *to, *c));
            }
            Primitive::Polygon { points, fill } => {
                for (i, from) in points.iter().enumerate() {
                    let to = points[(i + 1) % points.len()];
                    ctx.draw(&line(*from, to, *fill));
                }
            }
            Primitive::Text { at, content, color: c } => {
                ctx.print(
                    at.x,
                    at.y,
                    Line::styled(content.clone(), Style::default().fg(color(*c))),
                );
            }
            Primitive::RoundedRect {
                center,
                width,
                height,
                stroke,
                ..
            } => {
                // corner radius is below cell resolution; a plain rectangle
                // reads the same at terminal sizes
                ctx.draw(&Rectangle {
                    x: center.x - width / 2.0,
                    y: center.y - height / 2.0,
                    width: *width,
                    height: *height,
                    color: color(*stroke),
                });
            }
        }
    }
}
