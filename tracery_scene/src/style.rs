// Copyright 2026 the Tracery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke and fill styling carried on scene objects.

use peniko::Color;

/// Visual style of a shape.
///
/// The store carries style data for the external renderer but owns no
/// defaulting policy beyond [`Default`]; applications supply their own
/// defaults (from settings, a theme, the last-used style) at creation
/// time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShapeStyle {
    /// Stroke color.
    pub stroke: Color,
    /// Stroke width in pixels.
    pub stroke_width: f64,
    /// Stroke opacity in `[0, 1]`.
    pub stroke_opacity: f32,
    /// Optional fill color. `None` leaves the shape unfilled.
    pub fill: Option<Color>,
    /// Fill opacity in `[0, 1]`; meaningful only when `fill` is set.
    pub fill_opacity: Option<f32>,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke: Color::BLACK,
            stroke_width: 1.0,
            stroke_opacity: 1.0,
            fill: None,
            fill_opacity: None,
        }
    }
}

/// A partial style edit.
///
/// Each `Some` field overwrites the corresponding [`ShapeStyle`] field;
/// `None` leaves it alone. The fill fields are doubly optional so that a
/// fill can be cleared (`Some(None)`) as well as left untouched (`None`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StyleUpdate {
    /// New stroke color, if any.
    pub stroke: Option<Color>,
    /// New stroke width, if any.
    pub stroke_width: Option<f64>,
    /// New stroke opacity, if any.
    pub stroke_opacity: Option<f32>,
    /// New fill color; `Some(None)` clears the fill.
    pub fill: Option<Option<Color>>,
    /// New fill opacity; `Some(None)` clears it.
    pub fill_opacity: Option<Option<f32>>,
}

impl StyleUpdate {
    /// Applies this edit on top of `style`.
    pub fn apply_to(&self, style: &mut ShapeStyle) {
        if let Some(stroke) = self.stroke {
            style.stroke = stroke;
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width;
        }
        if let Some(opacity) = self.stroke_opacity {
            style.stroke_opacity = opacity;
        }
        if let Some(fill) = self.fill {
            style.fill = fill;
        }
        if let Some(fill_opacity) = self.fill_opacity {
            style.fill_opacity = fill_opacity;
        }
    }
}

#[cfg(test)]
mod tests {
    use peniko::Color;

    use super::{ShapeStyle, StyleUpdate};

    #[test]
    fn empty_update_is_a_no_op() {
        let mut style = ShapeStyle::default();
        StyleUpdate::default().apply_to(&mut style);
        assert_eq!(style, ShapeStyle::default());
    }

    #[test]
    fn update_overwrites_only_set_fields() {
        let mut style = ShapeStyle::default();
        let update = StyleUpdate {
            stroke_width: Some(3.0),
            fill: Some(Some(Color::from_rgba8(255, 0, 0, 255))),
            ..StyleUpdate::default()
        };
        update.apply_to(&mut style);
        assert_eq!(style.stroke_width, 3.0);
        assert_eq!(style.fill, Some(Color::from_rgba8(255, 0, 0, 255)));
        // Untouched fields keep their values.
        assert_eq!(style.stroke, Color::BLACK);
        assert_eq!(style.stroke_opacity, 1.0);
    }

    #[test]
    fn fill_can_be_cleared() {
        let mut style = ShapeStyle {
            fill: Some(Color::WHITE),
            fill_opacity: Some(0.5),
            ..ShapeStyle::default()
        };
        let update = StyleUpdate {
            fill: Some(None),
            fill_opacity: Some(None),
            ..StyleUpdate::default()
        };
        update.apply_to(&mut style);
        assert_eq!(style.fill, None);
        assert_eq!(style.fill_opacity, None);
    }
}
