// src/clients/room_directory.rs

use std::time::Duration;

use async_trait::async_trait;

use crate::{common::error::AppError, models::space::RoomDetail};

/// Where the Inventory Registry looks rooms up. The room is owned by another
/// service and may be gone at any time.
#[async_trait]
pub trait RoomDirectory: Send + Sync {
    async fn fetch_room(&self, room_id: i32) -> Result<RoomDetail, AppError>;
}

/// `GET {base_url}/api/v1/rooms/{id}` against the Space Registry.
#[derive(Clone)]
pub struct HttpRoomDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpRoomDirectory {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl RoomDirectory for HttpRoomDirectory {
    async fn fetch_room(&self, room_id: i32) -> Result<RoomDetail, AppError> {
        let url = format!("{}/api/v1/rooms/{}", self.base_url, room_id);

        let result = async {
            self.client
                .get(&url)
                .send()
                .await?
                .error_for_status()?
                .json::<RoomDetail>()
                .await
        }
        .await;

        // Non-2xx, timeouts, refused connections and bad bodies all mean "no such room" to callers.
        result.map_err(|e| {
            tracing::warn!(room_id, url = %url, error = %e, "room lookup failed");
            AppError::not_found("Room", room_id)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
    use tokio::net::TcpListener;

    async fn room(Path(id): Path<i32>) -> Result<Json<RoomDetail>, StatusCode> {
        if id != 7 {
            return Err(StatusCode::NOT_FOUND);
        }
        Ok(Json(RoomDetail {
            id,
            name: "Lab".into(),
            area: 32.0,
            floor: Some(3),
            building_id: 2,
            building_name: Some("HQ".into()),
        }))
    }

    async fn spawn_space_registry() -> String {
        let app = Router::new().route("/api/v1/rooms/{id}", get(room));
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn fetches_room_detail() {
        let base = spawn_space_registry().await;
        let directory = HttpRoomDirectory::new(base, Duration::from_secs(2)).unwrap();

        let room = directory.fetch_room(7).await.unwrap();
        assert_eq!(room.name, "Lab");
        assert_eq!(room.building_id, 2);
        assert_eq!(room.building_name.as_deref(), Some("HQ"));
    }

    #[tokio::test]
    async fn non_success_status_is_not_found() {
        let base = spawn_space_registry().await;
        let directory = HttpRoomDirectory::new(base, Duration::from_secs(2)).unwrap();

        let err = directory.fetch_room(8).await.unwrap_err();
        assert_eq!(err.public_message(), "Room with id: 8 not found!");
    }

    #[tokio::test]
    async fn unreachable_registry_is_not_found() {
        // Bind then drop to get a port nobody listens on.
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let directory =
            HttpRoomDirectory::new(format!("http://{addr}"), Duration::from_millis(500)).unwrap();
        let err = directory.fetch_room(7).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
