use bevy::asset::UntypedHandle;
use bevy::prelude::*;

/// Handles for everything the manifest names. Populated by the manifest
/// loader; all default until then.
#[derive(Resource, Default)]
pub struct SceneAssets {
    pub lamp_post: Handle<Scene>,
    pub spruce_tree: Handle<Scene>,
    pub rock: Handle<Scene>,
    pub reaper: Handle<Scene>,
    pub korrigan: Handle<Scene>,
    pub environment_diffuse: Handle<Image>,
    pub environment_specular: Handle<Image>,
    pub ambient_track: Handle<AudioSource>,
}

impl SceneAssets {
    /// Every handle the loading progress is computed over.
    pub fn tracked(&self) -> Vec<UntypedHandle> {
        vec![
            self.lamp_post.clone().untyped(),
            self.spruce_tree.clone().untyped(),
            self.rock.clone().untyped(),
            self.reaper.clone().untyped(),
            self.korrigan.clone().untyped(),
            self.environment_diffuse.clone().untyped(),
            self.environment_specular.clone().untyped(),
            self.ambient_track.clone().untyped(),
        ]
    }
}
