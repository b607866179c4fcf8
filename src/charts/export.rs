//! Static Chart Export
//! Paints a [`SceneDrawing`] with plotters, to SVG or PNG.

use crate::charts::drawing::{
    Label, Primitive, Rgb, SceneDrawing, TextAnchor, TextBaseline, AXIS_COLOR, TEXT_COLOR,
    TICK_FONT_SIZE,
};
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use thiserror::Error;

const FONT_FAMILY: &str = "sans-serif";

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Drawing failed: {0}")]
    Draw(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn draw_err<E: std::fmt::Display>(e: E) -> ExportError {
    ExportError::Draw(e.to_string())
}

pub struct ChartExporter;

impl ChartExporter {
    /// Render to an SVG document held in memory.
    pub fn render_svg(drawing: &SceneDrawing) -> Result<String, ExportError> {
        let mut svg = String::new();
        {
            let root = SVGBackend::with_string(&mut svg, Self::canvas_size(drawing))
                .into_drawing_area();
            Self::paint(&root, drawing)?;
            root.present().map_err(draw_err)?;
        }
        Ok(svg)
    }

    pub fn save_svg(drawing: &SceneDrawing, path: &Path) -> Result<(), ExportError> {
        let svg = Self::render_svg(drawing)?;
        std::fs::write(path, svg)?;
        Ok(())
    }

    pub fn save_png(drawing: &SceneDrawing, path: &Path) -> Result<(), ExportError> {
        let root = BitMapBackend::new(path, Self::canvas_size(drawing)).into_drawing_area();
        Self::paint(&root, drawing)?;
        root.present().map_err(draw_err)?;
        Ok(())
    }

    fn canvas_size(drawing: &SceneDrawing) -> (u32, u32) {
        (
            drawing.layout.width.max(1.0).round() as u32,
            drawing.layout.height.max(1.0).round() as u32,
        )
    }

    fn paint<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        drawing: &SceneDrawing,
    ) -> Result<(), ExportError> {
        root.fill(&WHITE).map_err(draw_err)?;

        let origin = (drawing.layout.margin_left, drawing.layout.margin_top);
        let px = |(x, y): (f64, f64)| -> (i32, i32) {
            ((x + origin.0).round() as i32, (y + origin.1).round() as i32)
        };

        for primitive in &drawing.primitives {
            match primitive {
                Primitive::Axis(axis) => {
                    let axis_style = color(AXIS_COLOR).stroke_width(1);
                    let (from, to) = axis.line();
                    root.draw(&PathElement::new(vec![px(from), px(to)], axis_style))
                        .map_err(draw_err)?;

                    let (anchor, baseline) = axis.tick_label_alignment();
                    for tick in &axis.ticks {
                        let (mark_from, mark_to, label_at) = axis.tick_geometry(tick);
                        root.draw(&PathElement::new(
                            vec![px(mark_from), px(mark_to)],
                            axis_style,
                        ))
                        .map_err(draw_err)?;

                        let text_color = color(AXIS_COLOR);
                        let style = (FONT_FAMILY, TICK_FONT_SIZE)
                            .into_font()
                            .color(&text_color)
                            .pos(text_pos(anchor, baseline));
                        root.draw(&Text::new(tick.label.clone(), px(label_at), style))
                            .map_err(draw_err)?;
                    }
                }
                Primitive::Polyline { points, stroke } => {
                    let style = color(stroke.color).stroke_width(stroke.width.round() as u32);
                    let path: Vec<(i32, i32)> = points.iter().copied().map(px).collect();
                    root.draw(&PathElement::new(path, style)).map_err(draw_err)?;
                }
                Primitive::Leader { from, to, stroke } => {
                    let style = color(stroke.color).stroke_width(stroke.width.round() as u32);
                    root.draw(&PathElement::new(vec![px(*from), px(*to)], style))
                        .map_err(draw_err)?;
                }
                Primitive::Label(label) => Self::paint_label(root, label, px(label.position))?,
            }
        }

        Ok(())
    }

    fn paint_label<DB: DrawingBackend>(
        root: &DrawingArea<DB, Shift>,
        label: &Label,
        at: (i32, i32),
    ) -> Result<(), ExportError> {
        let text_color = color(TEXT_COLOR);
        let mut font = (FONT_FAMILY, label.size).into_font();
        if label.vertical {
            font = font.transform(FontTransform::Rotate270);
        }
        let style = font
            .color(&text_color)
            .pos(text_pos(label.anchor, label.baseline));

        root.draw(&Text::new(label.text.clone(), at, style))
            .map_err(draw_err)
    }
}

fn color(rgb: Rgb) -> RGBColor {
    RGBColor(rgb.0, rgb.1, rgb.2)
}

fn text_pos(anchor: TextAnchor, baseline: TextBaseline) -> Pos {
    let h = match anchor {
        TextAnchor::Start => HPos::Left,
        TextAnchor::Middle => HPos::Center,
        TextAnchor::End => HPos::Right,
    };
    let v = match baseline {
        TextBaseline::Top => VPos::Top,
        TextBaseline::Middle => VPos::Center,
    };
    Pos::new(h, v)
}
