//! GUI module - User interface components

mod app;
mod chart_viewer;
mod scene_panel;

pub use app::ClimateScenesApp;
pub use chart_viewer::ChartViewer;
pub use scene_panel::{ExportFormat, ScenePanel, ScenePanelAction};
