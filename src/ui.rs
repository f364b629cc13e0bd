pub mod painter;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{canvas::Canvas, Paragraph, Widget},
};

use crate::{
    command::CommandSet,
    config::Config,
    face::{self, FaceStyle, Rgb},
    util::format_mmss,
    App, AppState,
};

const HORIZONTAL_MARGIN: u16 = 2;
const VERTICAL_MARGIN: u16 = 1;

/// Canvas coordinate bounds; the face is rendered with a fixed radius and
/// scaled by the canvas, so the drawing is resolution independent.
const CANVAS_EXTENT: f64 = 120.0;

/// Face style for a dark terminal: light chrome, pie fill from the
/// configured appearance.
fn face_style(config: &Config) -> FaceStyle {
    FaceStyle {
        marker_color: face::WHITE,
        face_stroke: face::WHITE,
        face_fill: face::BLACK,
        label_color: Rgb(150, 150, 150),
        hand_color: face::WHITE,
        remaining_fill: config.appearance.fill_color(),
        show_labels: config.show_labels,
        ..FaceStyle::default()
    }
}

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bold_style = Style::default().add_modifier(Modifier::BOLD);
        let italic_style = Style::default().add_modifier(Modifier::ITALIC);
        let dim_style = Style::default().add_modifier(Modifier::DIM);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .horizontal_margin(HORIZONTAL_MARGIN)
            .vertical_margin(VERTICAL_MARGIN)
            .constraints(
                [
                    Constraint::Min(1),    // clock face
                    Constraint::Length(1), // time readout
                    Constraint::Length(1), // padding
                    Constraint::Length(1), // legend
                ]
                .as_ref(),
            )
            .split(area);

        // clock face
        let frame = face::RenderFrame {
            fraction_remaining: self.fraction_remaining(),
            is_running: self.countdown.is_running(),
            total_secs: self.countdown.duration_secs(),
            style: face_style(&self.config),
        };
        let primitives = face::render(&frame);
        let canvas = Canvas::default()
            .marker(ratatui::symbols::Marker::Braille)
            .x_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .y_bounds([-CANVAS_EXTENT, CANVAS_EXTENT])
            .paint(|ctx| painter::paint(ctx, &primitives));
        canvas.render(chunks[0], buf);

        // digital readout in the appearance color
        let Rgb(r, g, b) = self.config.appearance.fill_color();
        let readout_style = Style::default()
            .patch(bold_style)
            .fg(Color::Rgb(r, g, b));
        let readout = match self.state {
            AppState::TimeUp => Span::styled("Time is up!!", readout_style),
            AppState::Counting => Span::styled(format_mmss(self.remaining_secs), readout_style),
        };
        Paragraph::new(readout)
            .alignment(Alignment::Center)
            .render(chunks[1], buf);

        // legend, with unavailable commands dimmed
        let commands = CommandSet::for_countdown(&self.countdown);
        let toggle_label = if commands.stop {
            "(space) pause"
        } else if self.countdown.is_paused() {
            "(space) resume"
        } else {
            "(space) start"
        };
        let legend = Line::from(vec![
            Span::styled(toggle_label, italic_style),
            Span::raw("   "),
            Span::styled(
                "(r)eset",
                if commands.reset {
                    italic_style
                } else {
                    italic_style.patch(dim_style)
                },
            ),
            Span::raw("   "),
            Span::styled("(esc)ape", italic_style),
        ]);
        Paragraph::new(legend)
            .alignment(Alignment::Center)
            .render(chunks[3], buf);
    }
}
