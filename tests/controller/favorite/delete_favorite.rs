use axum::{extract::State, http::StatusCode};
use holonet::server::controller::{favorite::delete_favorite, util::extract::IdPath};

use super::*;

/// Expect the favorite to be deleted
#[tokio::test]
async fn deletes_favorite() -> Result<(), TestError> {
    let mut test = TestBuilder::new()
        .with_all_tables()
        .with_mock_user("leia")
        .build()
        .await?;
    let favorite = test.favorite().insert_favorite(1, "planet", 2).await?;

    let (status, body) = into_json(
        delete_favorite(State(test.to_app_state::<AppState>()), IdPath(favorite.id)).await,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["msg"], "Favorite deleted successfully");

    Ok(())
}

/// Expect 404 for a favorite that does not exist
#[tokio::test]
async fn not_found_for_nonexistent_favorite() -> Result<(), TestError> {
    let test = TestBuilder::new().with_all_tables().build().await?;

    let (status, body) =
        into_json(delete_favorite(State(test.to_app_state::<AppState>()), IdPath(1)).await)
            .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["msg"], "Favorite not found");

    Ok(())
}
