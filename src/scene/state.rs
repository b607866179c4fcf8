//! Scene State
//! The application state value: which scene is selected and what is drawn.
//!
//! Selecting a scene drops the previous drawing immediately and hands out a
//! [`LoadTicket`]. Only the result carrying the ticket of the latest selection
//! is accepted, so a slow load for an earlier selection cannot overwrite the
//! chart of a later one.

use crate::charts::SceneDrawing;
use crate::scene::{scene, Scene, SceneId};

/// Tags a load with the selection that started it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub scene: SceneId,
    generation: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ChartStatus {
    Loading,
    Ready,
    Failed(String),
}

pub struct AppState {
    current: SceneId,
    generation: u64,
    drawing: Option<SceneDrawing>,
    status: ChartStatus,
}

impl AppState {
    /// State with `initial` selected; call [`select`](Self::select) to start loading it.
    pub fn new(initial: SceneId) -> Self {
        Self {
            current: initial,
            generation: 0,
            drawing: None,
            status: ChartStatus::Loading,
        }
    }

    /// Switch to `id`, clearing whatever was drawn.
    pub fn select(&mut self, id: SceneId) -> LoadTicket {
        self.current = id;
        self.generation += 1;
        self.drawing = None;
        self.status = ChartStatus::Loading;
        log::debug!("Selected scene {} (generation {})", id, self.generation);
        LoadTicket {
            scene: id,
            generation: self.generation,
        }
    }

    pub fn is_current(&self, ticket: &LoadTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a finished load. Returns false if the ticket is stale and the
    /// result was discarded.
    pub fn complete(&mut self, ticket: LoadTicket, result: Result<SceneDrawing, String>) -> bool {
        if !self.is_current(&ticket) {
            log::debug!(
                "Discarding stale load for scene {} (generation {}, current {})",
                ticket.scene,
                ticket.generation,
                self.generation
            );
            return false;
        }

        match result {
            Ok(drawing) => {
                self.drawing = Some(drawing);
                self.status = ChartStatus::Ready;
            }
            Err(error) => {
                self.drawing = None;
                self.status = ChartStatus::Failed(error);
            }
        }
        true
    }

    pub fn current_id(&self) -> SceneId {
        self.current
    }

    pub fn current_scene(&self) -> &'static Scene {
        scene(self.current)
    }

    /// Shown as soon as a scene is selected.
    pub fn description(&self) -> &'static str {
        self.current_scene().description
    }

    /// Shown once the chart is drawn.
    pub fn title(&self) -> Option<&str> {
        self.drawing.as_ref().map(|d| d.title.as_str())
    }

    pub fn drawing(&self) -> Option<&SceneDrawing> {
        self.drawing.as_ref()
    }

    pub fn status(&self) -> &ChartStatus {
        &self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == ChartStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::{ChartLayout, SceneRenderer};
    use crate::data::{DataPoint, TimeSeries};

    fn drawing_for(id: SceneId, points: Vec<DataPoint>) -> SceneDrawing {
        SceneRenderer::render(scene(id), &TimeSeries::new(points), &ChartLayout::default())
            .unwrap()
    }

    #[test]
    fn test_select_clears_previous_drawing() {
        let mut state = AppState::new(SceneId::Scene1);
        let ticket = state.select(SceneId::Scene1);
        assert!(state.complete(
            ticket,
            Ok(drawing_for(
                SceneId::Scene1,
                vec![DataPoint::new(1960, 13.9), DataPoint::new(2023, 14.8)]
            ))
        ));
        assert!(state.drawing().is_some());
        assert_eq!(state.title(), Some("Global Temperature Trends"));

        let ticket = state.select(SceneId::Scene2);
        assert!(state.drawing().is_none());
        assert_eq!(state.title(), None);
        assert!(state.is_loading());
        assert_eq!(state.description(), scene(SceneId::Scene2).description);

        let co2 = drawing_for(
            SceneId::Scene2,
            vec![
                DataPoint::new(1960, 10.0),
                DataPoint::new(1990, 22.0),
                DataPoint::new(2023, 32.0),
            ],
        );
        let expected_len = co2.primitives.len();
        assert!(state.complete(ticket, Ok(co2)));

        let drawing = state.drawing().unwrap();
        assert_eq!(drawing.scene, SceneId::Scene2);
        assert_eq!(drawing.primitives.len(), expected_len);
        assert_eq!(drawing.series_points().len(), 3);
        assert_eq!(drawing.leaders().len(), 2);
    }

    #[test]
    fn test_stale_load_is_discarded() {
        let mut state = AppState::new(SceneId::Scene1);
        let slow = state.select(SceneId::Scene1);
        let fast = state.select(SceneId::Scene3);

        assert!(state.complete(
            fast,
            Ok(drawing_for(
                SceneId::Scene3,
                vec![DataPoint::new(1960, 16.0), DataPoint::new(2023, 14.7)]
            ))
        ));
        assert!(!state.complete(
            slow,
            Ok(drawing_for(
                SceneId::Scene1,
                vec![DataPoint::new(1960, 13.9), DataPoint::new(2023, 14.8)]
            ))
        ));

        assert_eq!(state.current_id(), SceneId::Scene3);
        assert_eq!(state.drawing().map(|d| d.scene), Some(SceneId::Scene3));
        assert_eq!(state.status(), &ChartStatus::Ready);
    }

    #[test]
    fn test_reselecting_same_scene_invalidates_older_ticket() {
        let mut state = AppState::new(SceneId::Scene2);
        let first = state.select(SceneId::Scene2);
        let second = state.select(SceneId::Scene2);

        assert!(!state.is_current(&first));
        assert!(state.is_current(&second));
    }

    #[test]
    fn test_failed_load_shows_no_chart() {
        let mut state = AppState::new(SceneId::Scene1);
        let ticket = state.select(SceneId::Scene1);

        assert!(state.complete(ticket, Err("file not found".to_string())));

        assert!(state.drawing().is_none());
        assert_eq!(
            state.status(),
            &ChartStatus::Failed("file not found".to_string())
        );
    }
}
