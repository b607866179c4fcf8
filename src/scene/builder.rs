//! Scene Builder
//! Load a scene's CSV and render it in one call (runs on the load thread).

use crate::charts::{ChartLayout, RenderError, SceneDrawing, SceneRenderer};
use crate::data::{DataLoader, LoaderError};
use crate::scene::Scene;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneError {
    #[error(transparent)]
    Load(#[from] LoaderError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

pub struct SceneBuilder;

impl SceneBuilder {
    /// Read `data_dir/<scene file>` and render it with `layout`.
    pub fn build(
        scene: &Scene,
        data_dir: &Path,
        layout: &ChartLayout,
    ) -> Result<SceneDrawing, SceneError> {
        let path = data_dir.join(scene.file);
        let loaded = DataLoader::load_series(&path, scene.value_column)?;
        log::info!(
            "Scene {}: loaded {} points from {}",
            scene.id,
            loaded.series.len(),
            path.display()
        );
        Ok(SceneRenderer::render(scene, &loaded.series, layout)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{scene, SceneId};
    use std::fs;

    #[test]
    fn test_point_count_matches_rows_for_every_scene() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("processed_temperature.csv"),
            "Year,Temperature (°C)\n1960,13.9\n1990,14.2\n2023,14.8\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("processed_co2.csv"),
            "Year,CO2\n1960,10\n1970,14.8\n1980,19.4\n2000,25.5\n2023,32\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("processed_ice.csv"),
            "Year,IceExtent\n1960,16\n2023,14.7\n",
        )
        .unwrap();

        for (id, rows) in [
            (SceneId::Scene1, 3),
            (SceneId::Scene2, 5),
            (SceneId::Scene3, 2),
        ] {
            let drawing =
                SceneBuilder::build(scene(id), dir.path(), &ChartLayout::default()).unwrap();
            assert_eq!(drawing.scene, id);
            assert_eq!(drawing.series_points().len(), rows);
        }
    }

    #[test]
    fn test_missing_file_is_a_load_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = SceneBuilder::build(scene(SceneId::Scene2), dir.path(), &ChartLayout::default())
            .unwrap_err();
        assert!(matches!(err, SceneError::Load(_)));
    }

    #[test]
    fn test_shipped_data_files_render() {
        let data_dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("data");
        for id in SceneId::ALL {
            let drawing =
                SceneBuilder::build(scene(id), &data_dir, &ChartLayout::default()).unwrap();
            assert_eq!(drawing.x_domain(), (1960.0, 2023.0));
            assert_eq!(drawing.leaders().len(), 2);
        }
    }
}
