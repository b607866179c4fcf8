//! Scene Renderer
//! Turns a scene's series and annotations into drawing primitives.
//!
//! Layout:
//! 1. Bottom axis (years) and left axis (values)
//! 2. The series polyline
//! 3. Axis titles: value column (rotated) and "Year"
//! 4. Annotation leader lines with their text

use crate::charts::drawing::{
    Axis, AxisSide, ChartLayout, Label, LabelRole, Primitive, SceneDrawing, Stroke, TextAnchor,
    TextBaseline, Tick, ANNOTATION_COLOR, ANNOTATION_FONT_SIZE, LABEL_FONT_SIZE, SERIES_COLOR,
    SERIES_WIDTH,
};
use crate::charts::scale::{precision_for_step, LinearScale};
use crate::data::{TimeSeries, YEAR_COLUMN};
use crate::scene::{Annotation, Direction, Scene};
use thiserror::Error;

/// Padding added below the minimum and above the maximum value.
pub const VALUE_PADDING: f64 = 1.0;
/// Leader-line length when an annotation has no explicit end.
pub const ANNOTATION_OFFSET: f64 = 30.0;
/// Annotation text sits this far above the leader-line end.
const ANNOTATION_TEXT_RAISE: f64 = 10.0;
const TICK_TARGET: usize = 10;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Nothing to draw: the series is empty")]
    EmptySeries,
}

pub struct SceneRenderer;

impl SceneRenderer {
    /// Render a scene. The series must be non-empty and sorted by year.
    pub fn render(
        scene: &Scene,
        series: &TimeSeries,
        layout: &ChartLayout,
    ) -> Result<SceneDrawing, RenderError> {
        let (year_min, year_max) = series.year_extent().ok_or(RenderError::EmptySeries)?;
        let (value_min, value_max) = series.value_extent().ok_or(RenderError::EmptySeries)?;

        let plot_w = layout.plot_width();
        let plot_h = layout.plot_height();

        let x = LinearScale::new((year_min as f64, year_max as f64), (0.0, plot_w));
        let y = LinearScale::new(
            (value_min - VALUE_PADDING, value_max + VALUE_PADDING),
            (plot_h, 0.0),
        );

        let mut primitives = vec![
            Primitive::Axis(Self::year_axis(&x, plot_h)),
            Primitive::Axis(Self::value_axis(&y)),
            Primitive::Polyline {
                points: series
                    .points()
                    .iter()
                    .map(|p| (x.map(p.year as f64), y.map(p.value)))
                    .collect(),
                stroke: Stroke::new(SERIES_COLOR, SERIES_WIDTH),
            },
            Primitive::Label(Label {
                text: scene.value_column.to_string(),
                position: (-layout.margin_left + 20.0 + LABEL_FONT_SIZE, plot_h / 2.0),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                vertical: true,
                size: LABEL_FONT_SIZE,
                role: LabelRole::AxisTitle,
            }),
            Primitive::Label(Label {
                text: YEAR_COLUMN.to_string(),
                position: (plot_w / 2.0, plot_h + layout.margin_top + 20.0),
                anchor: TextAnchor::Middle,
                baseline: TextBaseline::Middle,
                vertical: false,
                size: LABEL_FONT_SIZE,
                role: LabelRole::AxisTitle,
            }),
        ];

        for annotation in scene.annotations {
            let anchor = (x.map(annotation.year as f64), y.map(annotation.value));
            let end = Self::annotation_end(annotation, anchor);

            primitives.push(Primitive::Leader {
                from: anchor,
                to: end,
                stroke: Stroke::new(ANNOTATION_COLOR, 1.0),
            });
            primitives.push(Primitive::Label(Label {
                text: annotation.text.to_string(),
                position: (end.0, end.1 - ANNOTATION_TEXT_RAISE),
                anchor: match annotation.direction {
                    Direction::Left => TextAnchor::End,
                    _ => TextAnchor::Start,
                },
                baseline: TextBaseline::Middle,
                vertical: false,
                size: ANNOTATION_FONT_SIZE,
                role: LabelRole::Annotation,
            }));
        }

        Ok(SceneDrawing {
            scene: scene.id,
            title: scene.title.to_string(),
            value_label: scene.value_column.to_string(),
            layout: *layout,
            x_scale: x,
            y_scale: y,
            primitives,
        })
    }

    /// Leader-line end for an annotation anchored at `anchor`.
    ///
    /// Explicit `x_end`/`y_end` win per coordinate; otherwise the end is
    /// [`ANNOTATION_OFFSET`] pixels from the anchor in the annotation's direction.
    pub fn annotation_end(annotation: &Annotation, anchor: (f64, f64)) -> (f64, f64) {
        let (dx, dy) = match annotation.direction {
            Direction::Left => (-ANNOTATION_OFFSET, 0.0),
            Direction::Right => (ANNOTATION_OFFSET, 0.0),
            Direction::Up => (0.0, -ANNOTATION_OFFSET),
            Direction::Down => (0.0, ANNOTATION_OFFSET),
        };
        (
            annotation.x_end.unwrap_or(anchor.0 + dx),
            annotation.y_end.unwrap_or(anchor.1 + dy),
        )
    }

    fn year_axis(x: &LinearScale, plot_h: f64) -> Axis {
        let ticks = x
            .ticks(TICK_TARGET)
            .into_iter()
            .filter(|t| t.fract() == 0.0)
            .map(|t| Tick {
                offset: x.map(t),
                label: format!("{}", t as i64),
            })
            .collect();

        Axis {
            side: AxisSide::Bottom,
            origin: (0.0, plot_h),
            length: x.range().1,
            ticks,
        }
    }

    fn value_axis(y: &LinearScale) -> Axis {
        let decimals = precision_for_step(y.tick_step(TICK_TARGET));
        let ticks = y
            .ticks(TICK_TARGET)
            .into_iter()
            .map(|t| Tick {
                offset: y.map(t),
                label: format!("{:.*}", decimals, t),
            })
            .collect();

        Axis {
            side: AxisSide::Left,
            origin: (0.0, 0.0),
            length: y.range().0,
            ticks,
        }
    }
}
