use crate::state::AppState;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Spawn a background task that closes rooms nobody has touched for a while.
///
/// Covers hosts whose connection never cleanly closed.
pub fn spawn_idle_room_reaper(state: Arc<AppState>, interval: Duration) {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;

            let closed = state.expire_idle_rooms(Instant::now()).await;
            if closed > 0 {
                tracing::info!("Reaper closed {} idle rooms", closed);
            }
        }
    });
}
