// SPDX-License-Identifier: MPL-2.0
//! Animated busy spinner drawn on a Canvas.

use crate::ui::design_tokens::sizing;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path, Stroke};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};
use std::f32::consts::{PI, TAU};

/// Rotation added per animation tick, in radians.
pub const SPINNER_SPEED: f32 = 0.2;

/// Advances a rotation angle by one tick, wrapping at a full turn.
#[must_use]
pub fn advance(rotation: f32) -> f32 {
    let next = rotation + SPINNER_SPEED;
    if next > TAU {
        next - TAU
    } else {
        next
    }
}

/// Spinner: a faint ring with a half-circle arc at `rotation`.
pub struct AnimatedSpinner {
    cache: Cache,
    rotation: f32,
    color: Color,
    size: f32,
}

impl AnimatedSpinner {
    #[must_use]
    pub fn new(color: Color, rotation: f32) -> Self {
        Self {
            cache: Cache::default(),
            rotation,
            color,
            size: sizing::SPINNER,
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    /// Creates a Canvas widget from this spinner.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        let size = self.size;
        Canvas::new(self)
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .into()
    }
}

impl<Message> canvas::Program<Message> for AnimatedSpinner {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let center = frame.center();
                let radius = frame.width().min(frame.height()) / 2.0 - 4.0;

                frame.stroke(
                    &Path::circle(center, radius),
                    Stroke::default().with_width(3.0).with_color(Color {
                        a: 0.25,
                        ..self.color
                    }),
                );

                // Half-circle arc starting at the top, rotated by `rotation`.
                let start_angle = self.rotation - PI / 2.0;
                let end_angle = start_angle + PI;

                let mut arc_path = canvas::path::Builder::new();
                arc_path.move_to(Point::new(
                    center.x + radius * start_angle.cos(),
                    center.y + radius * start_angle.sin(),
                ));

                let segments = 30;
                #[allow(clippy::cast_precision_loss)]
                for i in 1..=segments {
                    let t = i as f32 / segments as f32;
                    let angle = start_angle + (end_angle - start_angle) * t;
                    arc_path.line_to(Point::new(
                        center.x + radius * angle.cos(),
                        center.y + radius * angle.sin(),
                    ));
                }

                frame.stroke(
                    &arc_path.build(),
                    Stroke::default()
                        .with_width(3.0)
                        .with_color(self.color)
                        .with_line_cap(canvas::LineCap::Round),
                );
            });

        vec![geometry]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_increases_rotation() {
        assert!(advance(0.0) > 0.0);
    }

    #[test]
    fn advance_wraps_after_full_turn() {
        let wrapped = advance(TAU - 0.05);
        assert!(wrapped < SPINNER_SPEED);
        assert!(wrapped >= 0.0);
    }
}
