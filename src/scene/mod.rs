//! Scene module - the fixed chart configurations and switching between them

mod builder;
mod catalog;
mod state;

pub use builder::{SceneBuilder, SceneError};
pub use catalog::{scene, scenes, Annotation, Direction, Scene, SceneId, SceneIdError};
pub use state::{AppState, ChartStatus, LoadTicket};
