//! PPP Forms
//!
//! Connects the forms of the PPP page to [`ppp_client`] operations.
//!
//! The page itself stays behind the [`FormSurface`] trait: the controller
//! asks it to intercept submissions, toggle sections and show text, and the
//! surface hands submissions back through [`FormController::submit`].
//!
//! # Example
//!
//! ```ignore
//! use ppp_client::{ClientConfig, PppClient};
//! use ppp_forms::{ControllerSettings, FormController, FormData, FormId};
//! use std::sync::Arc;
//!
//! let client = Arc::new(PppClient::new(ClientConfig::default())?);
//! let mut controller = FormController::new(client, surface, ControllerSettings::default());
//! controller.setup();
//!
//! controller.select(FormId::AddUser);
//! let data = FormData::new().with("username", "foo").with("password", "bar");
//! controller.submit(FormId::AddUser, &data).await?;
//! ```

mod controller;
mod error;
mod fields;
mod form;
mod render;
mod surface;

pub use controller::{ControllerSettings, FormController, FORM_TABLE};
pub use error::{ControllerError, Result};
pub use fields::{FieldPolicy, DEFAULT_ALBUM_ID, DEFAULT_USER_ID};
pub use form::{FormData, FormId, Record};
pub use render::{render, to_pretty_json, OutputStyle};
pub use surface::FormSurface;
