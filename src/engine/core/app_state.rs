use bevy::prelude::*;

use crate::engine::loading::progress::LoadingProgress;

/// Session gate: `Loading` and `Ready` are the pre-start phases (start
/// control inert, then armed), `Running` is the live scene. There is no
/// edge back out of `Running`.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, States)]
pub enum AppState {
    #[default]
    Loading,
    Ready,
    Running,
}

/// Arms the start screen once every tracked asset has arrived.
pub fn transition_to_ready(
    loading_progress: Res<LoadingProgress>,
    mut next_state: ResMut<NextState<AppState>>,
) {
    if loading_progress.is_complete() {
        println!("→ All scene assets loaded, transitioning to Ready state");
        next_state.set(AppState::Ready);
    }
}
