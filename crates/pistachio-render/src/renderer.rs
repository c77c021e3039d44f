//! Scene consumer seam

use crate::scene::RenderScene;

/// Receives finished scenes
///
/// Implemented by whatever actually draws. `set_scene` may be called every
/// frame and replaces the previously submitted scene.
pub trait SceneRenderer {
    /// Submit the scene for the next frame
    fn set_scene(&mut self, scene: &RenderScene);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct LastScene {
        last: Option<RenderScene>,
        submissions: usize,
    }

    impl SceneRenderer for LastScene {
        fn set_scene(&mut self, scene: &RenderScene) {
            self.last = Some(scene.clone());
            self.submissions += 1;
        }
    }

    #[test]
    fn test_later_scene_replaces_earlier() {
        let mut renderer = LastScene::default();

        let mut scene = RenderScene::new();
        scene.show_grid = false;
        renderer.set_scene(&scene);
        renderer.set_scene(&RenderScene::new());

        assert_eq!(renderer.submissions, 2);
        assert!(renderer.last.unwrap().show_grid);
    }
}
