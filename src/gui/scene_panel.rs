//! Scene Panel Widget
//! Left side panel: scene buttons, export controls and the status line.

use crate::scene::{scenes, SceneId};
use egui::{Button, Color32, RichText};

/// Output format for "Export".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Svg,
    Png,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Svg => "svg",
            ExportFormat::Png => "png",
        }
    }

    pub fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Svg => "SVG Image",
            ExportFormat::Png => "PNG Image",
        }
    }
}

/// Actions triggered by the scene panel
#[derive(Debug, Clone, PartialEq)]
pub enum ScenePanelAction {
    None,
    SelectScene(SceneId),
    Export(ExportFormat),
}

pub struct ScenePanel {
    pub status: String,
    pub open_after_export: bool,
}

impl Default for ScenePanel {
    fn default() -> Self {
        Self {
            status: "Ready".to_string(),
            open_after_export: false,
        }
    }
}

impl ScenePanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw the panel. `current` is highlighted; export is disabled until a chart is drawn.
    pub fn show(&mut self, ui: &mut egui::Ui, current: SceneId, can_export: bool) -> ScenePanelAction {
        let mut action = ScenePanelAction::None;

        ui.vertical_centered(|ui| {
            ui.add_space(5.0);
            ui.label(
                RichText::new("🌍 Climate Scenes")
                    .size(22.0)
                    .color(Color32::from_rgb(40, 167, 69)),
            );
        });
        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Scene buttons =====
        ui.label(RichText::new("Scenes").size(14.0).strong());
        ui.add_space(5.0);

        for scene in scenes() {
            let button = Button::new(
                RichText::new(format!("Scene {}: {}", scene.id, scene.title)).size(13.0),
            )
            .selected(scene.id == current);

            if ui
                .add_sized([ui.available_width(), 32.0], button)
                .on_hover_text(scene.file)
                .clicked()
            {
                action = ScenePanelAction::SelectScene(scene.id);
            }
            ui.add_space(4.0);
        }

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        // ===== Export =====
        ui.label(RichText::new("💾 Export").size(14.0).strong());
        ui.add_space(5.0);

        ui.add_enabled_ui(can_export, |ui| {
            ui.horizontal(|ui| {
                for format in [ExportFormat::Svg, ExportFormat::Png] {
                    let label = format!("Export {}", format.extension().to_uppercase());
                    if ui.button(label).clicked() {
                        action = ScenePanelAction::Export(format);
                    }
                }
            });
        });
        ui.checkbox(&mut self.open_after_export, "Open after export");

        ui.add_space(10.0);
        ui.separator();
        ui.add_space(5.0);

        let status_color = if self.status.contains("Error") {
            Color32::from_rgb(220, 53, 69)
        } else {
            Color32::GRAY
        };
        ui.label(RichText::new(&self.status).size(11.0).color(status_color));

        action
    }

    pub fn set_status(&mut self, status: &str) {
        self.status = status.to_string();
    }
}
