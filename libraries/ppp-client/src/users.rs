//! User operations.

use crate::client::PppClient;
use crate::operation::Route;
use crate::result::ApiResult;
use crate::types::UserId;
use serde::Serialize;
use tracing::debug;

/// User operations against the PPP backend.
pub struct UserClient<'a> {
    client: &'a PppClient,
}

impl<'a> UserClient<'a> {
    pub(crate) fn new(client: &'a PppClient) -> Self {
        Self { client }
    }

    /// Create a user with `POST /users`.
    ///
    /// The record should carry a username and password; the response is the
    /// stored user with its new `userId`.
    pub async fn add_user<B: Serialize + ?Sized>(&self, user: &B) -> ApiResult {
        self.client
            .execute_with_body(Route::create_user(), user)
            .await
    }

    /// Update a user with `PATCH /users/{userId}`.
    pub async fn update_user<B: Serialize + ?Sized>(&self, user_id: UserId, user: &B) -> ApiResult {
        self.client
            .execute_with_body(Route::update_user(user_id), user)
            .await
    }

    /// List every user with `GET /users`.
    pub async fn get_all_users(&self) -> ApiResult {
        self.client.execute(Route::list_users()).await
    }

    /// Fetch a user with `GET /users/{username}`.
    pub async fn get_user_by_username(&self, username: &str) -> ApiResult {
        self.client
            .execute(Route::get_user_by_username(username))
            .await
    }

    /// Fetch a user with `GET /find/{username}`.
    ///
    /// The backend looks the user up by name only, so the password is not
    /// sent.
    pub async fn get_user_by_username_and_password(
        &self,
        username: &str,
        password: &str,
    ) -> ApiResult {
        debug!(
            username = %username,
            password_supplied = !password.is_empty(),
            "Looking up user by credentials"
        );
        self.client
            .execute(Route::get_user_by_username_and_password(username))
            .await
    }

    /// Delete a user with `DELETE /users/{userId}`. The response is text.
    pub async fn delete_user(&self, user_id: UserId) -> ApiResult {
        self.client.execute(Route::delete_user(user_id)).await
    }
}
