//! PPP Client
//!
//! HTTP client library for the PPP users and albums backend.
//!
//! # Features
//!
//! - **Users**: create, update, list, look up by name, delete
//! - **Albums**: create for a user, update, list, look up by id or owner, delete
//! - **Uniform results**: every operation returns an [`ApiResult`]; transport
//!   failures never escape as errors
//!
//! # Example
//!
//! ```ignore
//! use ppp_client::{Album, ClientConfig, PppClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = PppClient::new(ClientConfig::new("http://localhost:8080"))?;
//!
//!     let album = Album {
//!         title: Some("Blue Train".into()),
//!         ..Album::default()
//!     };
//!     let created = client.albums().add_album(&album, 7).await;
//!     println!("{}", serde_json::to_string_pretty(&created)?);
//!
//!     let albums: Vec<Album> = client.albums().get_albums_by_user_id(7).await.decode()?;
//!     println!("User 7 owns {} albums", albums.len());
//!
//!     Ok(())
//! }
//! ```

mod albums;
mod client;
mod error;
mod operation;
mod result;
mod types;
mod users;

// Re-export main types
pub use client::PppClient;
pub use error::{ClientError, Result};
pub use operation::{Operation, ResponseFormat, Route};
pub use result::{ApiResult, FailureKind, Payload};
pub use types::{Album, AlbumId, ClientConfig, User, UserId, DEFAULT_BASE_URL};

// Re-export sub-clients for direct use if needed
pub use albums::AlbumClient;
pub use users::UserClient;
