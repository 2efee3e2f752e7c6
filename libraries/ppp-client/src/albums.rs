//! Album operations.

use crate::client::PppClient;
use crate::operation::Route;
use crate::result::ApiResult;
use crate::types::{AlbumId, UserId};
use serde::Serialize;

/// Album operations against the PPP backend.
pub struct AlbumClient<'a> {
    client: &'a PppClient,
}

impl<'a> AlbumClient<'a> {
    pub(crate) fn new(client: &'a PppClient) -> Self {
        Self { client }
    }

    /// Create an album owned by `user_id` with `POST /albums/{userId}`.
    ///
    /// The owner travels in the path only; `album` should not carry it.
    pub async fn add_album<B: Serialize + ?Sized>(&self, album: &B, user_id: UserId) -> ApiResult {
        self.client
            .execute_with_body(Route::create_album(user_id), album)
            .await
    }

    /// Update an album with `PATCH /albums/{albumId}`.
    pub async fn update_album<B: Serialize + ?Sized>(
        &self,
        album_id: AlbumId,
        album: &B,
    ) -> ApiResult {
        self.client
            .execute_with_body(Route::update_album(album_id), album)
            .await
    }

    pub async fn get_all_albums(&self) -> ApiResult {
        self.client.execute(Route::list_albums()).await
    }

    pub async fn get_album_by_id(&self, album_id: AlbumId) -> ApiResult {
        self.client.execute(Route::get_album_by_id(album_id)).await
    }

    /// Every album owned by a user, via `GET /albums/{userId}/albums`.
    pub async fn get_albums_by_user_id(&self, user_id: UserId) -> ApiResult {
        self.client
            .execute(Route::list_albums_by_user(user_id))
            .await
    }

    /// Delete an album with `DELETE /albums/{albumId}`. The response is text.
    pub async fn delete_album(&self, album_id: AlbumId) -> ApiResult {
        self.client.execute(Route::delete_album(album_id)).await
    }
}
