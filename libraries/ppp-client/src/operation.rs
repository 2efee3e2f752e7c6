//! The backend operations and their endpoint templates.

use crate::types::{AlbumId, UserId};
use reqwest::Method;
use std::fmt;

/// One (resource, verb) pair of the backend API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Operation {
    CreateUser,
    UpdateUser,
    ListUsers,
    GetUserByUsername,
    GetUserByUsernameAndPassword,
    DeleteUser,
    CreateAlbum,
    UpdateAlbum,
    ListAlbums,
    GetAlbumById,
    ListAlbumsByUser,
    DeleteAlbum,
}

/// How a response body is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    Json,
    Text,
}

impl Operation {
    pub const ALL: [Operation; 12] = [
        Operation::CreateUser,
        Operation::UpdateUser,
        Operation::ListUsers,
        Operation::GetUserByUsername,
        Operation::GetUserByUsernameAndPassword,
        Operation::DeleteUser,
        Operation::CreateAlbum,
        Operation::UpdateAlbum,
        Operation::ListAlbums,
        Operation::GetAlbumById,
        Operation::ListAlbumsByUser,
        Operation::DeleteAlbum,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::CreateUser => "create-user",
            Operation::UpdateUser => "update-user",
            Operation::ListUsers => "list-users",
            Operation::GetUserByUsername => "get-user-by-username",
            Operation::GetUserByUsernameAndPassword => "get-user-by-username-and-password",
            Operation::DeleteUser => "delete-user",
            Operation::CreateAlbum => "create-album",
            Operation::UpdateAlbum => "update-album",
            Operation::ListAlbums => "list-albums",
            Operation::GetAlbumById => "get-album-by-id",
            Operation::ListAlbumsByUser => "list-albums-by-user",
            Operation::DeleteAlbum => "delete-album",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Operation::CreateUser | Operation::CreateAlbum => Method::POST,
            Operation::UpdateUser | Operation::UpdateAlbum => Method::PATCH,
            Operation::DeleteUser | Operation::DeleteAlbum => Method::DELETE,
            Operation::ListUsers
            | Operation::GetUserByUsername
            | Operation::GetUserByUsernameAndPassword
            | Operation::ListAlbums
            | Operation::GetAlbumById
            | Operation::ListAlbumsByUser => Method::GET,
        }
    }

    /// Endpoint template, as shown in logs and the CLI form listing.
    pub fn template(self) -> &'static str {
        match self {
            Operation::CreateUser | Operation::ListUsers => "/users",
            Operation::UpdateUser | Operation::DeleteUser => "/users/{userId}",
            Operation::GetUserByUsername => "/users/{username}",
            Operation::GetUserByUsernameAndPassword => "/find/{username}",
            Operation::CreateAlbum => "/albums/{userId}",
            Operation::UpdateAlbum | Operation::GetAlbumById | Operation::DeleteAlbum => {
                "/albums/{albumId}"
            }
            Operation::ListAlbums => "/albums",
            Operation::ListAlbumsByUser => "/albums/{userId}/albums",
        }
    }

    pub fn response_format(self) -> ResponseFormat {
        match self {
            Operation::DeleteUser | Operation::DeleteAlbum => ResponseFormat::Text,
            _ => ResponseFormat::Json,
        }
    }

    /// What the operation is doing, used in failure messages.
    fn activity(self) -> &'static str {
        match self {
            Operation::CreateUser => "creating a user",
            Operation::UpdateUser => "updating a user",
            Operation::ListUsers => "retrieving all users",
            Operation::GetUserByUsername => "retrieving a user",
            Operation::GetUserByUsernameAndPassword => {
                "retrieving a user by username and password"
            }
            Operation::DeleteUser => "deleting a user",
            Operation::CreateAlbum => "adding an album",
            Operation::UpdateAlbum => "updating an album",
            Operation::ListAlbums => "retrieving all albums",
            Operation::GetAlbumById => "retrieving an album",
            Operation::ListAlbumsByUser => "retrieving all albums for a user",
            Operation::DeleteAlbum => "deleting an album",
        }
    }

    /// Message carried by a failed result of this operation.
    ///
    /// The wording (including the spelling of "occured") is what existing
    /// consumers of the create-user failure match on.
    pub fn failure_message(self) -> String {
        format!("An unexpected error occured when {}", self.activity())
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An operation with its path parameters filled in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    operation: Operation,
    segments: Vec<String>,
}

impl Route {
    fn new(operation: Operation, segments: Vec<String>) -> Self {
        Self {
            operation,
            segments,
        }
    }

    pub fn create_user() -> Self {
        Self::new(Operation::CreateUser, vec!["users".into()])
    }

    pub fn update_user(user_id: UserId) -> Self {
        Self::new(
            Operation::UpdateUser,
            vec!["users".into(), user_id.to_string()],
        )
    }

    pub fn list_users() -> Self {
        Self::new(Operation::ListUsers, vec!["users".into()])
    }

    pub fn get_user_by_username(username: &str) -> Self {
        Self::new(
            Operation::GetUserByUsername,
            vec!["users".into(), username.to_string()],
        )
    }

    pub fn get_user_by_username_and_password(username: &str) -> Self {
        Self::new(
            Operation::GetUserByUsernameAndPassword,
            vec!["find".into(), username.to_string()],
        )
    }

    pub fn delete_user(user_id: UserId) -> Self {
        Self::new(
            Operation::DeleteUser,
            vec!["users".into(), user_id.to_string()],
        )
    }

    pub fn create_album(user_id: UserId) -> Self {
        Self::new(
            Operation::CreateAlbum,
            vec!["albums".into(), user_id.to_string()],
        )
    }

    pub fn update_album(album_id: AlbumId) -> Self {
        Self::new(
            Operation::UpdateAlbum,
            vec!["albums".into(), album_id.to_string()],
        )
    }

    pub fn list_albums() -> Self {
        Self::new(Operation::ListAlbums, vec!["albums".into()])
    }

    pub fn get_album_by_id(album_id: AlbumId) -> Self {
        Self::new(
            Operation::GetAlbumById,
            vec!["albums".into(), album_id.to_string()],
        )
    }

    pub fn list_albums_by_user(user_id: UserId) -> Self {
        Self::new(
            Operation::ListAlbumsByUser,
            vec!["albums".into(), user_id.to_string(), "albums".into()],
        )
    }

    pub fn delete_album(album_id: AlbumId) -> Self {
        Self::new(
            Operation::DeleteAlbum,
            vec!["albums".into(), album_id.to_string()],
        )
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// Unencoded path segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path relative to the base address, segments unencoded.
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}
