//! Scene files: pretty-printed JSON.

use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::scene::Scene;

/// Save a scene to disk.
pub fn save_scene(path: &Path, scene: &Scene) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(scene).context("serializing scene")?;
    std::fs::write(path, json.as_bytes())
        .with_context(|| format!("writing scene to {}", path.display()))?;
    debug!("saved scene to {}", path.display());
    Ok(())
}

/// Load a scene from disk.
pub fn load_scene(path: &Path) -> anyhow::Result<Scene> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading scene {}", path.display()))?;
    let scene: Scene = serde_json::from_str(&content)
        .with_context(|| format!("parsing scene {}", path.display()))?;
    debug!(
        "loaded {} shapes and {} functions from {}",
        scene.shapes.len(),
        scene.functions.len(),
        path.display()
    );
    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geom::coords::Point;
    use crate::geom::shape::{Geometry, Shape, Style};
    use crate::plot::types::Viewport;

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("vectorgl-scene-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("scene.json");

        let mut scene = Scene::starter(Viewport::default());
        scene.add_shape(Shape::new(
            Geometry::Polygon {
                points: vec![
                    Point::new(10.0, 10.0),
                    Point::new(90.5, 20.0),
                    Point::new(40.0, 75.25),
                ],
            },
            Style::default(),
        ));
        save_scene(&path, &scene).unwrap();
        assert_eq!(load_scene(&path).unwrap(), scene);
    }

    #[test]
    fn test_load_reports_path() {
        let err = load_scene(Path::new("/nonexistent/vectorgl.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("/nonexistent/vectorgl.json"));
    }
}
