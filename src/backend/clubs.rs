use serde::Serialize;
use tracing::{debug, instrument};

use super::BackendClient;
use crate::error::Result;
use crate::model::{Location, NearbyClub};

#[derive(Debug, Serialize)]
struct NearbyClubsParams {
    user_lat: f64,
    user_lng: f64,
    max_distance_km: f64,
}

impl BackendClient {
    /// Clubs within `max_distance_km` of `location`, nearest first as returned.
    #[instrument(skip(self))]
    pub async fn get_clubs_near_location(
        &self,
        location: &Location,
        max_distance_km: f64,
    ) -> Result<Vec<NearbyClub>> {
        let params = NearbyClubsParams {
            user_lat: location.latitude,
            user_lng: location.longitude,
            max_distance_km,
        };
        let clubs: Vec<NearbyClub> = self.rpc("get_clubs_near_location", &params).await?;
        debug!(count = clubs.len(), max_distance_km, "fetched nearby clubs");
        Ok(clubs)
    }
}

#[cfg(test)]
mod tests {
    use mockito::Matcher;

    use super::*;
    use crate::config::BackendConfig;
    use crate::error::FifteenAllError;

    fn client(server: &mockito::Server) -> BackendClient {
        BackendClient::new(
            reqwest::Client::new(),
            &BackendConfig {
                url: server.url(),
                anon_key: "anon".to_string(),
                timeout_secs: 5,
            },
        )
    }

    #[tokio::test]
    async fn test_get_clubs_near_location() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/rest/v1/rpc/get_clubs_near_location")
            .match_header("apikey", "anon")
            .match_header("authorization", "Bearer anon")
            .match_body(Matcher::Json(serde_json::json!({
                "user_lat": 40.7128,
                "user_lng": -74.006,
                "max_distance_km": 25.0
            })))
            .with_status(200)
            .with_body(
                r#"[{"id": "c1", "name": "Riverside Tennis", "latitude": 40.72,
                     "longitude": -74.0, "distance_km": 1.4, "member_count": 12},
                    {"id": "c2", "name": "Hudson Courts", "description": "Hard courts",
                     "latitude": 40.8, "longitude": -74.1, "distance_km": 9.7}]"#,
            )
            .create_async()
            .await;

        let clubs = client(&server)
            .get_clubs_near_location(&Location::new(40.7128, -74.006), 25.0)
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(clubs.len(), 2);
        assert_eq!(clubs[0].name, "Riverside Tennis");
        assert_eq!(clubs[0].member_count, 12);
        assert_eq!(clubs[1].description.as_deref(), Some("Hard courts"));
        assert_eq!(clubs[1].member_count, 0);
    }

    #[tokio::test]
    async fn test_rpc_error_status() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/rest/v1/rpc/get_clubs_near_location")
            .with_status(401)
            .create_async()
            .await;

        let result = client(&server)
            .get_clubs_near_location(&Location::new(0.0, 0.0), 10.0)
            .await;
        assert!(matches!(
            result,
            Err(FifteenAllError::UnexpectedStatus { .. })
        ));
    }
}
