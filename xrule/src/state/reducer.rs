use super::AppState;
use crate::events::AppEvent;

/// Pure state transition function for background events
pub fn reduce_app_event(state: &mut AppState, event: AppEvent) {
    match event {
        AppEvent::IconRevert { generation } => {
            if !state.icon.revert(generation) {
                tracing::debug!("Ignoring stale icon revert #{}", generation);
            }
        }
    }
}
