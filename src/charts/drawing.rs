//! Drawing Model
//! Backend-neutral primitives produced by the scene renderer.
//!
//! Coordinates are pixels relative to the top-left corner of the plot area
//! (inside the margins). Backends add `layout.margin_left` / `layout.margin_top`.

use crate::charts::scale::LinearScale;
use crate::scene::SceneId;
use serde::{Deserialize, Serialize};

/// Line color for the data series (#28a745).
pub const SERIES_COLOR: Rgb = Rgb(40, 167, 69);
pub const SERIES_WIDTH: f64 = 2.0;
pub const AXIS_COLOR: Rgb = Rgb(0, 0, 0);
pub const ANNOTATION_COLOR: Rgb = Rgb(80, 80, 80);
pub const TEXT_COLOR: Rgb = Rgb(33, 37, 41);

pub const TICK_FONT_SIZE: f64 = 10.0;
pub const LABEL_FONT_SIZE: f64 = 12.0;
pub const ANNOTATION_FONT_SIZE: f64 = 12.0;

/// Overall chart size and margins, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 500.0,
            margin_top: 20.0,
            margin_right: 30.0,
            margin_bottom: 50.0,
            margin_left: 70.0,
        }
    }
}

impl ChartLayout {
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin_left - self.margin_right
    }

    pub fn plot_height(&self) -> f64 {
        self.height - self.margin_top - self.margin_bottom
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Distance along the axis from its origin.
    pub offset: f64,
    pub label: String,
}

/// An axis line with outward tick marks and tick labels.
#[derive(Debug, Clone, PartialEq)]
pub struct Axis {
    pub side: AxisSide,
    pub origin: (f64, f64),
    pub length: f64,
    pub ticks: Vec<Tick>,
}

/// Tick mark length, outward from the axis line.
pub const TICK_SIZE: f64 = 6.0;
/// Gap between a tick mark's end and its label.
pub const TICK_PADDING: f64 = 3.0;

impl Axis {
    /// Start and end of the axis line.
    pub fn line(&self) -> ((f64, f64), (f64, f64)) {
        let (x, y) = self.origin;
        match self.side {
            AxisSide::Bottom => ((x, y), (x + self.length, y)),
            AxisSide::Left => ((x, y), (x, y + self.length)),
        }
    }

    /// Tick mark segment and label position for one tick.
    pub fn tick_geometry(&self, tick: &Tick) -> ((f64, f64), (f64, f64), (f64, f64)) {
        let (x, y) = self.origin;
        match self.side {
            AxisSide::Bottom => {
                let tx = x + tick.offset;
                ((tx, y), (tx, y + TICK_SIZE), (tx, y + TICK_SIZE + TICK_PADDING))
            }
            AxisSide::Left => {
                let ty = y + tick.offset;
                ((x, ty), (x - TICK_SIZE, ty), (x - TICK_SIZE - TICK_PADDING, ty))
            }
        }
    }

    /// How tick labels hang off their position.
    pub fn tick_label_alignment(&self) -> (TextAnchor, TextBaseline) {
        match self.side {
            AxisSide::Bottom => (TextAnchor::Middle, TextBaseline::Top),
            AxisSide::Left => (TextAnchor::End, TextBaseline::Middle),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextBaseline {
    Top,
    Middle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRole {
    AxisTitle,
    Annotation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub position: (f64, f64),
    pub anchor: TextAnchor,
    pub baseline: TextBaseline,
    /// Rotated 90° counter-clockwise (reads bottom to top).
    pub vertical: bool,
    pub size: f64,
    pub role: LabelRole,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Axis(Axis),
    Polyline { points: Vec<(f64, f64)>, stroke: Stroke },
    /// Annotation leader line.
    Leader {
        from: (f64, f64),
        to: (f64, f64),
        stroke: Stroke,
    },
    Label(Label),
}

/// Everything needed to paint one scene.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneDrawing {
    pub scene: SceneId,
    pub title: String,
    pub value_label: String,
    pub layout: ChartLayout,
    pub x_scale: LinearScale,
    pub y_scale: LinearScale,
    pub primitives: Vec<Primitive>,
}

impl SceneDrawing {
    pub fn x_domain(&self) -> (f64, f64) {
        self.x_scale.domain()
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y_scale.domain()
    }

    /// Points of the data polyline.
    pub fn series_points(&self) -> &[(f64, f64)] {
        self.primitives
            .iter()
            .find_map(|p| match p {
                Primitive::Polyline { points, .. } => Some(points.as_slice()),
                _ => None,
            })
            .unwrap_or(&[])
    }

    /// `(anchor, end)` of every annotation leader line, in annotation order.
    pub fn leaders(&self) -> Vec<((f64, f64), (f64, f64))> {
        self.primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Leader { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    pub fn labels(&self, role: LabelRole) -> impl Iterator<Item = &Label> {
        self.primitives.iter().filter_map(move |p| match p {
            Primitive::Label(label) if label.role == role => Some(label),
            _ => None,
        })
    }
}
