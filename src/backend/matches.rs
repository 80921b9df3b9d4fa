use tracing::{debug, instrument};

use super::BackendClient;
use crate::error::Result;
use crate::model::RecordMatchRequest;

impl BackendClient {
    /// Persist a match; the backend updates ratings and returns the new match id.
    #[instrument(skip(self, request), fields(club_id = %request.club_id))]
    pub async fn record_match(&self, request: &RecordMatchRequest) -> Result<String> {
        let match_id: String = self.rpc("record_match", request).await?;
        debug!(%match_id, winner = ?request.winner, "recorded match");
        Ok(match_id)
    }
}
