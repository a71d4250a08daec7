pub mod scene_tuner;
