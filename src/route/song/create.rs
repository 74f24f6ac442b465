use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum_extra::extract::WithRejection;

use crate::api::song::{Song, create::Request};
use crate::database::Database;
use crate::{Error, service};

pub async fn handler(
    State(database): State<Database>,
    WithRejection(Json(request), _): WithRejection<Json<Request>, Error>,
) -> Result<(StatusCode, Json<Song>), Error> {
    request.validate()?;
    let song = service::song::create(&database, request).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

#[cfg(test)]
mod tests {
    use fake::{Fake, Faker};
    use rstest::rstest;
    use serde_json::json;

    use super::*;
    use crate::test::{Mock, http, mock};

    #[rstest]
    #[tokio::test]
    async fn test_create(#[future(awt)] mock: Mock) {
        let (status, body) = http::post(
            mock.router(),
            "/api/v1/songs",
            json!({
                "title": "Test Song",
                "artist": "Test Artist",
                "album": "Test Album",
                "year": 2024,
                "genre": "Rock"
            }),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);

        let song: Song = serde_json::from_value(body.clone()).unwrap();
        assert!(!song.id.is_nil());
        assert_eq!(song.title, "Test Song");
        assert_eq!(song.artist, "Test Artist");
        assert_eq!(song.album, "Test Album");
        assert_eq!(song.year, 2024);
        assert_eq!(song.genre, "Rock");
        assert!(body["created_at"].is_string());
        assert_eq!(mock.count().await, 1);
    }

    #[rstest]
    #[tokio::test]
    async fn test_unique_id(#[future(awt)] mock: Mock) {
        let request: Request = Faker.fake();
        let body = serde_json::to_value(&request).unwrap();
        let (_, first) = http::post(mock.router(), "/api/v1/songs", body.clone()).await;
        let (_, second) = http::post(mock.router(), "/api/v1/songs", body).await;
        assert_ne!(first["id"], second["id"]);
        assert_eq!(mock.count().await, 2);
    }

    #[rstest]
    #[case(json!({ "title": "Test Song" }))]
    #[case(json!({
        "title": "Test Song", "artist": "Test Artist", "album": "Test Album", "year": "2024",
        "genre": "Rock"
    }))]
    #[case(json!({
        "title": "", "artist": "Test Artist", "album": "Test Album", "year": 2024, "genre": "Rock"
    }))]
    #[case(json!({
        "title": "Test Song", "artist": "Test Artist", "album": "Test Album", "year": 0,
        "genre": "Rock"
    }))]
    #[case(json!({
        "title": "Test Song", "artist": null, "album": "Test Album", "year": 2024, "genre": "Rock"
    }))]
    #[case(json!([]))]
    #[tokio::test]
    async fn test_bad_request(#[future(awt)] mock: Mock, #[case] body: serde_json::Value) {
        let (status, body) = http::post(mock.router(), "/api/v1/songs", body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
        assert_eq!(mock.count().await, 0);
    }

    #[rstest]
    #[tokio::test]
    async fn test_storage_error(#[future(awt)] mock: Mock) {
        mock.drop_table().await;
        let body = serde_json::to_value(Faker.fake::<Request>()).unwrap();
        let (status, body) = http::post(mock.router(), "/api/v1/songs", body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body["error"].as_str().unwrap().contains("no such table"));
    }
}
