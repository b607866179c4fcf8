//! Chart Viewer Widget
//! Central panel: chart title, scene description and the painted chart.
//! The chart keeps its aspect ratio and scales to the available space.

use crate::charts::{
    Label, Primitive, Rgb, SceneDrawing, TextAnchor, TextBaseline, AXIS_COLOR, TEXT_COLOR,
    TICK_FONT_SIZE,
};
use crate::scene::{AppState, ChartStatus};
use egui::epaint::TextShape;
use egui::{Align, Align2, Color32, FontId, Pos2, RichText, Shape, Stroke};

pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, state: &AppState) {
        ui.vertical(|ui| {
            // Title only appears once the chart is drawn.
            ui.label(
                RichText::new(state.title().unwrap_or(""))
                    .size(22.0)
                    .strong(),
            );
            ui.add_space(4.0);
            ui.label(RichText::new(state.description()).size(14.0));
            ui.add_space(10.0);

            match state.drawing() {
                Some(drawing) => Self::paint(ui, drawing),
                None => {
                    let message = match state.status() {
                        ChartStatus::Loading => "Loading…",
                        _ => "No Data",
                    };
                    ui.centered_and_justified(|ui| {
                        ui.label(RichText::new(message).size(20.0).color(Color32::GRAY));
                    });
                }
            }
        });
    }

    fn paint(ui: &mut egui::Ui, drawing: &SceneDrawing) {
        let layout = drawing.layout;
        let avail = ui.available_size();
        let scale = (avail.x / layout.width as f32)
            .min(avail.y / layout.height as f32)
            .max(0.1);
        let size = egui::vec2(layout.width as f32 * scale, layout.height as f32 * scale);

        let (response, painter) = ui.allocate_painter(size, egui::Sense::hover());
        let rect = response.rect;
        painter.rect_filled(rect, 6.0, Color32::WHITE);

        let to_screen = |(x, y): (f64, f64)| -> Pos2 {
            egui::pos2(
                rect.min.x + (x + layout.margin_left) as f32 * scale,
                rect.min.y + (y + layout.margin_top) as f32 * scale,
            )
        };

        for primitive in &drawing.primitives {
            match primitive {
                Primitive::Axis(axis) => {
                    let stroke = Stroke::new(1.0, color(AXIS_COLOR));
                    let (from, to) = axis.line();
                    painter.line_segment([to_screen(from), to_screen(to)], stroke);

                    let (anchor, baseline) = axis.tick_label_alignment();
                    for tick in &axis.ticks {
                        let (mark_from, mark_to, label_at) = axis.tick_geometry(tick);
                        painter.line_segment([to_screen(mark_from), to_screen(mark_to)], stroke);
                        painter.text(
                            to_screen(label_at),
                            align(anchor, baseline),
                            &tick.label,
                            FontId::proportional(TICK_FONT_SIZE as f32 * scale),
                            color(AXIS_COLOR),
                        );
                    }
                }
                Primitive::Polyline { points, stroke } => {
                    let points: Vec<Pos2> = points.iter().copied().map(to_screen).collect();
                    painter.add(Shape::line(
                        points,
                        Stroke::new(stroke.width as f32 * scale, color(stroke.color)),
                    ));
                }
                Primitive::Leader { from, to, stroke } => {
                    painter.line_segment(
                        [to_screen(*from), to_screen(*to)],
                        Stroke::new(stroke.width as f32 * scale, color(stroke.color)),
                    );
                }
                Primitive::Label(label) => {
                    Self::paint_label(&painter, label, to_screen(label.position), scale)
                }
            }
        }
    }

    fn paint_label(painter: &egui::Painter, label: &Label, at: Pos2, scale: f32) {
        let font = FontId::proportional(label.size as f32 * scale);

        if !label.vertical {
            painter.text(
                at,
                align(label.anchor, label.baseline),
                &label.text,
                font,
                color(TEXT_COLOR),
            );
            return;
        }

        // Rotating -90° about the galley's top-left corner makes the text
        // run upwards from it; shift so the rotated box is centred on `at`.
        let galley = painter.layout_no_wrap(label.text.clone(), font, color(TEXT_COLOR));
        let size = galley.size();
        let pos = egui::pos2(at.x - size.y / 2.0, at.y + size.x / 2.0);
        painter.add(
            TextShape::new(pos, galley, color(TEXT_COLOR)).with_angle(-std::f32::consts::FRAC_PI_2),
        );
    }
}

fn color(rgb: Rgb) -> Color32 {
    Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

fn align(anchor: TextAnchor, baseline: TextBaseline) -> Align2 {
    let h = match anchor {
        TextAnchor::Start => Align::Min,
        TextAnchor::Middle => Align::Center,
        TextAnchor::End => Align::Max,
    };
    let v = match baseline {
        TextBaseline::Top => Align::Min,
        TextBaseline::Middle => Align::Center,
    };
    Align2([h, v])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_alignment_mapping() {
        assert_eq!(
            align(TextAnchor::End, TextBaseline::Middle),
            Align2::RIGHT_CENTER
        );
        assert_eq!(
            align(TextAnchor::Middle, TextBaseline::Top),
            Align2::CENTER_TOP
        );
        assert_eq!(
            align(TextAnchor::Start, TextBaseline::Middle),
            Align2::LEFT_CENTER
        );
    }

    #[test]
    fn test_series_color() {
        assert_eq!(
            color(crate::charts::Rgb(40, 167, 69)),
            Color32::from_rgb(40, 167, 69)
        );
    }
}
