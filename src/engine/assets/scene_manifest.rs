use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Relative paths of the glTF prop and character models.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelFiles {
    pub lamp_post: String,
    pub spruce_tree: String,
    pub rock: String,
    pub reaper: String,
    pub korrigan: String,
}

/// Pre-filtered environment map pair for image-based lighting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentFiles {
    pub diffuse_map: String,
    pub specular_map: String,
}

/// Complete scene manifest as a Bevy asset. Mirrors the JSON structure
/// exactly.
#[derive(Asset, Debug, Clone, Serialize, Deserialize, TypePath)]
pub struct SceneManifest {
    pub models: ModelFiles,
    pub environment: EnvironmentFiles,
    pub ambient_track: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_parses_from_json() {
        let json = r#"{
            "models": {
                "lamp_post": "models/lamp_post.glb",
                "spruce_tree": "models/spruce_tree.glb",
                "rock": "models/rock.glb",
                "reaper": "models/ankou.glb",
                "korrigan": "models/young_korrigan.glb"
            },
            "environment": {
                "diffuse_map": "environment/sunset_diffuse.ktx2",
                "specular_map": "environment/sunset_specular.ktx2"
            },
            "ambient_track": "audio/song_of_unity.mp3"
        }"#;

        let manifest: SceneManifest = serde_json::from_str(json).unwrap();
        assert_eq!(manifest.models.lamp_post, "models/lamp_post.glb");
        assert_eq!(manifest.ambient_track, "audio/song_of_unity.mp3");
    }
}
