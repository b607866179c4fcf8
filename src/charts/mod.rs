//! Charts module - Scene rendering, scales and export

mod drawing;
mod export;
mod renderer;
mod scale;

pub use drawing::{
    Axis, AxisSide, ChartLayout, Label, LabelRole, Primitive, Rgb, SceneDrawing, Stroke,
    TextAnchor, TextBaseline, Tick, AXIS_COLOR, TEXT_COLOR, TICK_FONT_SIZE,
};
pub use export::{ChartExporter, ExportError};
pub use renderer::{RenderError, SceneRenderer, ANNOTATION_OFFSET, VALUE_PADDING};
pub use scale::LinearScale;
