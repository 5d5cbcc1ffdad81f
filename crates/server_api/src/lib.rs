use std::sync::Arc;

use shared::{
    domain::{PositionRecord, PositionUpdate},
    protocol::SetPositionResponse,
};
use tokio::sync::RwLock;
use tracing::info;

#[derive(Clone, Default)]
pub struct PositionStore {
    current: Arc<RwLock<PositionRecord>>,
}

impl PositionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_position(position: PositionRecord) -> Self {
        Self {
            current: Arc::new(RwLock::new(position)),
        }
    }

    pub async fn current(&self) -> PositionRecord {
        *self.current.read().await
    }

    pub async fn apply(&self, update: PositionUpdate) -> PositionRecord {
        let mut current = self.current.write().await;
        update.apply_to(&mut current);
        *current
    }
}

#[derive(Clone, Default)]
pub struct ApiContext {
    pub store: PositionStore,
}

impl ApiContext {
    pub fn new(store: PositionStore) -> Self {
        Self { store }
    }
}

pub async fn get_current_position(ctx: &ApiContext) -> PositionRecord {
    ctx.store.current().await
}

pub async fn set_position(ctx: &ApiContext, update: PositionUpdate) -> SetPositionResponse {
    let position = ctx.store.apply(update).await;
    info!(
        requested_azimuth = ?update.azimuth,
        requested_elevation = ?update.elevation,
        azimuth = position.azimuth,
        elevation = position.elevation,
        "position updated"
    );
    SetPositionResponse::success()
}
