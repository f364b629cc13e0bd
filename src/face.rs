//! Pure clock-face renderer: a [`RenderFrame`] in, an ordered list of
//! drawing primitives out. Holds no state and performs no caching, so the
//! same frame always yields the same primitive sequence; the painter in the
//! UI layer decides how the primitives land on an actual surface.

use crate::geometry::{point_on_circle, points_on_circle, Point};
use crate::util::format_mmss;

/// 60 marks around the dial, every 5th drawn as a major marker. This is the
/// fixed 12/60 analog-clock convention, not a per-instance knob.
pub const MARKER_COUNT: usize = 60;
pub const MAJOR_EVERY: usize = 5;
/// Number of equal display intervals the duration is divided into for the
/// labels at the major marks.
pub const LABEL_INTERVALS: usize = 12;

const FACE_STROKE_WIDTH: f64 = 4.0;
const BORDER_CORNER_RADIUS: f64 = 8.0;
const BORDER_MARGIN: f64 = 6.0;
const LABEL_INSET: f64 = 14.0;
const HUB_RADIUS_FRACTION: f64 = 0.12;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const WHITE: Rgb = Rgb(255, 255, 255);
pub const BLACK: Rgb = Rgb(0, 0, 0);

/// Style parameters for the face. Margins are measured inward from the
/// outer circle.
#[derive(Clone, Debug, PartialEq)]
pub struct FaceStyle {
    pub center: Point,
    pub radius: f64,
    /// Margin from the face outline to the remaining-time pie.
    pub margin_to_clock_face: f64,
    pub margin_to_minor_marker: f64,
    pub margin_to_major_marker: f64,
    pub major_marker_width: f64,
    pub minor_marker_width: f64,
    pub marker_color: Rgb,
    pub face_fill: Rgb,
    pub face_stroke: Rgb,
    /// Fill of the remaining-time pie, from the appearance preference.
    pub remaining_fill: Rgb,
    pub label_color: Rgb,
    pub hand_color: Rgb,
    pub show_labels: bool,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            center: Point::new(0.0, 0.0),
            radius: 100.0,
            margin_to_clock_face: 15.0,
            margin_to_minor_marker: 10.0,
            margin_to_major_marker: 15.0,
            major_marker_width: 2.5,
            minor_marker_width: 1.0,
            marker_color: BLACK,
            face_fill: WHITE,
            face_stroke: BLACK,
            remaining_fill: Rgb(230, 57, 70),
            label_color: BLACK,
            hand_color: BLACK,
            show_labels: true,
        }
    }
}

/// Everything the renderer needs for one frame. Recomputed by the driver on
/// every engine tick; the renderer never remembers the previous frame.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderFrame {
    /// Remaining/total, clamped to [0, 1] before use.
    pub fraction_remaining: f64,
    /// Chooses the hand glyph: pause bars while running, play triangle
    /// otherwise.
    pub is_running: bool,
    /// Total configured duration, used for the label values.
    pub total_secs: f64,
    pub style: FaceStyle,
}

/// Drawing primitives in back-to-front order. Angles follow the geometry
/// module's convention: degrees clockwise from 12 o'clock.
#[derive(Clone, Debug, PartialEq)]
pub enum Primitive {
    Circle {
        center: Point,
        radius: f64,
        fill: Rgb,
        stroke: Rgb,
        stroke_width: f64,
    },
    /// Filled wedge from `start_deg` sweeping `sweep_deg` clockwise.
    Pie {
        center: Point,
        radius: f64,
        start_deg: f64,
        sweep_deg: f64,
        fill: Rgb,
    },
    Segment {
        from: Point,
        to: Point,
        width: f64,
        color: Rgb,
    },
    Polygon {
        points: Vec<Point>,
        fill: Rgb,
    },
    Text {
        at: Point,
        content: String,
        color: Rgb,
    },
    RoundedRect {
        center: Point,
        width: f64,
        height: f64,
        corner_radius: f64,
        stroke: Rgb,
        stroke_width: f64,
    },
}

/// Renders one frame of the clock face.
pub fn render(frame: &RenderFrame) -> Vec<Primitive> {
    let s = &frame.style;
    let fraction = frame.fraction_remaining.clamp(0.0, 1.0);
    let mut out = Vec::with_capacity(MARKER_COUNT + LABEL_INTERVALS + 8);

    // 1. face disc and outline
    out.push(Primitive::Circle {
        center: s.center,
        radius: s.radius,
        fill: s.face_fill,
        stroke: s.face_stroke,
        stroke_width: FACE_STROKE_WIDTH,
    });

    // 2. the 60 second markers
    for i in 0..MARKER_COUNT {
        let deg = i as f64 * (360.0 / MARKER_COUNT as f64);
        let (margin, width) = if i % MAJOR_EVERY == 0 {
            (s.margin_to_major_marker, s.major_marker_width)
        } else {
            (s.margin_to_minor_marker, s.minor_marker_width)
        };
        out.push(Primitive::Segment {
            from: point_on_circle(s.center, s.radius, deg),
            to: point_on_circle(s.center, s.radius - margin, deg),
            width,
            color: s.marker_color,
        });
    }

    // 3. remaining-time pie, anchored at 12 o'clock
    out.push(Primitive::Pie {
        center: s.center,
        radius: s.radius - s.margin_to_clock_face,
        start_deg: 0.0,
        sweep_deg: fraction * 360.0,
        fill: s.remaining_fill,
    });

    // 4. time labels at the major marks
    if s.show_labels {
        out.extend(labels(frame));
    }

    // 5. rounded border around the whole face
    let extent = 2.0 * (s.radius + BORDER_MARGIN);
    out.push(Primitive::RoundedRect {
        center: s.center,
        width: extent,
        height: extent,
        corner_radius: BORDER_CORNER_RADIUS,
        stroke: s.face_stroke,
        stroke_width: FACE_STROKE_WIDTH,
    });

    // 6. center hand: hub dot, pointer at the remaining fraction, state icon
    let hub_radius = s.radius * HUB_RADIUS_FRACTION;
    out.push(Primitive::Circle {
        center: s.center,
        radius: hub_radius,
        fill: s.hand_color,
        stroke: s.hand_color,
        stroke_width: 1.0,
    });
    out.push(Primitive::Segment {
        from: point_on_circle(s.center, hub_radius, fraction * 360.0),
        to: point_on_circle(s.center, s.radius - s.margin_to_clock_face, fraction * 360.0),
        width: s.major_marker_width,
        color: s.hand_color,
    });
    out.push(state_icon(frame, hub_radius));

    out
}

/// Labels showing the absolute remaining time each major mark represents:
/// the total duration divided into twelve equal intervals, so mark `i`
/// reads `i * total / 12` seconds.
fn labels(frame: &RenderFrame) -> Vec<Primitive> {
    let s = &frame.style;
    let step = 360.0 / LABEL_INTERVALS as f64;
    let ring = points_on_circle(
        s.center,
        s.radius - s.margin_to_major_marker - LABEL_INSET,
        LABEL_INTERVALS,
        step,
    );

    ring.into_iter()
        .enumerate()
        .map(|(i, at)| {
            let secs = frame.total_secs * (i + 1) as f64 / LABEL_INTERVALS as f64;
            Primitive::Text {
                at,
                content: format_mmss(secs),
                color: s.label_color,
            }
        })
        .collect()
}

/// Pause bars while running, play triangle while stopped or paused, both
/// knocked out of the hub dot in the face fill color.
fn state_icon(frame: &RenderFrame, hub_radius: f64) -> Primitive {
    let s = &frame.style;
    let c = s.center;
    if frame.is_running {
        let dx = hub_radius * 0.3;
        let dy = hub_radius * 0.45;
        Primitive::Polygon {
            points: vec![
                Point::new(c.x - dx, c.y - dy),
                Point::new(c.x - dx, c.y + dy),
                Point::new(c.x + dx, c.y + dy),
                Point::new(c.x + dx, c.y - dy),
            ],
            fill: s.face_fill,
        }
    } else {
        Primitive::Polygon {
            points: vec![
                Point::new(c.x - hub_radius * 0.3, c.y + hub_radius * 0.45),
                Point::new(c.x - hub_radius * 0.3, c.y - hub_radius * 0.45),
                Point::new(c.x + hub_radius * 0.5, c.y),
            ],
            fill: s.face_fill,
        }
    }
}
