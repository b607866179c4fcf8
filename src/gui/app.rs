//! Climate Scenes Main Application
//! Main window with the scene panel and chart viewer.

use crate::charts::{ChartExporter, SceneDrawing};
use crate::config::AppConfig;
use crate::gui::{ChartViewer, ExportFormat, ScenePanel, ScenePanelAction};
use crate::scene::{scene, AppState, ChartStatus, LoadTicket, SceneBuilder, SceneId};
use anyhow::{Context, Result};
use egui::SidePanel;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread;

/// Scene load result from a background thread
struct LoadResult {
    ticket: LoadTicket,
    result: std::result::Result<SceneDrawing, String>,
}

/// Main application window.
pub struct ClimateScenesApp {
    config: AppConfig,
    state: AppState,
    scene_panel: ScenePanel,

    // Every load thread reports on this channel; stale results are dropped by `state`.
    load_tx: Sender<LoadResult>,
    load_rx: Receiver<LoadResult>,
}

impl ClimateScenesApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let (load_tx, load_rx) = channel();
        let mut app = Self {
            state: AppState::new(config.initial_scene),
            scene_panel: ScenePanel::new(),
            config,
            load_tx,
            load_rx,
        };
        let initial = app.config.initial_scene;
        app.select_scene(initial);
        app
    }

    /// Clear the chart and load `id` in the background.
    fn select_scene(&mut self, id: SceneId) {
        log::info!("Switching to scene {}", id);
        let ticket = self.state.select(id);
        self.scene_panel
            .set_status(&format!("Loading {}...", scene(id).file));

        let tx = self.load_tx.clone();
        let data_dir = self.config.data_dir.clone();
        let layout = self.config.layout;

        thread::spawn(move || {
            let result = SceneBuilder::build(scene(ticket.scene), &data_dir, &layout)
                .map_err(|e| e.to_string());
            let _ = tx.send(LoadResult { ticket, result });
        });
    }

    /// Check for scene load results
    fn check_load_results(&mut self) {
        while let Ok(LoadResult { ticket, result }) = self.load_rx.try_recv() {
            if !self.state.complete(ticket, result) {
                continue;
            }

            match self.state.status() {
                ChartStatus::Ready => {
                    let points = self
                        .state
                        .drawing()
                        .map(|d| d.series_points().len())
                        .unwrap_or(0);
                    self.scene_panel.set_status(&format!(
                        "Scene {}: {} points",
                        ticket.scene, points
                    ));
                }
                ChartStatus::Failed(error) => {
                    log::error!("Scene {} failed to load: {}", ticket.scene, error);
                    let status = format!("Error: {}", error);
                    self.scene_panel.set_status(&status);
                }
                ChartStatus::Loading => {}
            }
        }
    }

    /// Handle export - ask for a destination and write the current chart
    fn handle_export(&mut self, format: ExportFormat) {
        let Some(drawing) = self.state.drawing() else {
            self.scene_panel.set_status("No chart to export");
            return;
        };

        let Some(path) = rfd::FileDialog::new()
            .add_filter(format.filter_name(), &[format.extension()])
            .set_file_name(format!("scene{}.{}", drawing.scene, format.extension()))
            .save_file()
        else {
            return; // User cancelled
        };

        match Self::export(drawing, format, &path) {
            Ok(()) => {
                log::info!("Exported scene {} to {}", drawing.scene, path.display());
                self.scene_panel
                    .set_status(&format!("Exported {}", file_name(&path)));
                if self.scene_panel.open_after_export {
                    if let Err(e) = open::that(&path) {
                        log::warn!("Could not open {}: {}", path.display(), e);
                    }
                }
            }
            Err(e) => {
                log::error!("Export failed: {:#}", e);
                self.scene_panel.set_status(&format!("Error: {:#}", e));
            }
        }
    }

    fn export(drawing: &SceneDrawing, format: ExportFormat, path: &Path) -> Result<()> {
        match format {
            ExportFormat::Svg => ChartExporter::save_svg(drawing, path),
            ExportFormat::Png => ChartExporter::save_png(drawing, path),
        }
        .with_context(|| format!("writing {}", path.display()))
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

impl eframe::App for ClimateScenesApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Keep polling while a load is outstanding
        if self.state.is_loading() {
            ctx.request_repaint();
        }

        SidePanel::left("scene_panel")
            .min_width(260.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                let can_export = self.state.drawing().is_some();
                let action = self
                    .scene_panel
                    .show(ui, self.state.current_id(), can_export);

                match action {
                    ScenePanelAction::SelectScene(id) => self.select_scene(id),
                    ScenePanelAction::Export(format) => self.handle_export(format),
                    ScenePanelAction::None => {}
                }
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            ChartViewer::show(ui, &self.state);
        });
    }
}
