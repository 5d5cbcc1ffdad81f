use std::time::Duration;

use shared::domain::{PositionRecord, PositionUpdate};
use tracing::{debug, info, warn};

pub mod error;
pub mod transport;

pub use error::ClientError;
pub use transport::{HttpTransport, PositionTransport, DEFAULT_SERVER_URL};

/// Operator-side copies of the position.
///
/// `pending` holds values edited locally and not yet sent; `cached_current` is the
/// last record successfully read from the store. Neither is ever derived from the
/// other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClientViewState {
    pub pending: PositionRecord,
    pub cached_current: PositionRecord,
}

pub struct PositionClient<T: PositionTransport> {
    transport: T,
    state: ClientViewState,
}

impl PositionClient<HttpTransport> {
    pub fn connect(server_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        Ok(Self::new(HttpTransport::with_timeout(server_url, timeout)?))
    }
}

impl<T: PositionTransport> PositionClient<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            state: ClientViewState::default(),
        }
    }

    pub fn view(&self) -> &ClientViewState {
        &self.state
    }

    pub fn pending(&self) -> PositionRecord {
        self.state.pending
    }

    pub fn cached_current(&self) -> PositionRecord {
        self.state.cached_current
    }

    pub fn update_pending_azimuth(&mut self, value: i64) {
        self.state.pending.azimuth = value;
    }

    pub fn update_pending_elevation(&mut self, value: i64) {
        self.state.pending.elevation = value;
    }

    /// Reads the store. On failure the cached view keeps its previous value.
    pub async fn refresh_current(&mut self) -> Result<PositionRecord, ClientError> {
        match self.transport.get_current_position().await {
            Ok(position) => {
                self.state.cached_current = position;
                debug!(
                    azimuth = position.azimuth,
                    elevation = position.elevation,
                    "refreshed current position"
                );
                Ok(position)
            }
            Err(error) => {
                warn!(%error, "refresh failed; keeping cached position");
                Err(error)
            }
        }
    }

    /// Sends both pending fields, then re-reads the store.
    pub async fn send_pending(&mut self) -> Result<PositionRecord, ClientError> {
        let update = PositionUpdate::from(self.state.pending);
        self.send_and_refresh(update).await
    }

    /// Writes `update` and, only once the store has answered 200, refreshes the
    /// cached view. A failed write is not retried and triggers no refresh.
    pub async fn send_and_refresh(
        &mut self,
        update: PositionUpdate,
    ) -> Result<PositionRecord, ClientError> {
        if let Err(error) = self.transport.set_position(&update).await {
            warn!(%error, "set_position failed; nothing was refreshed");
            return Err(error);
        }
        info!(
            azimuth = ?update.azimuth,
            elevation = ?update.elevation,
            "position sent"
        );

        self.refresh_current()
            .await
            .map_err(|error| ClientError::RefreshAfterWrite(Box::new(error)))
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
