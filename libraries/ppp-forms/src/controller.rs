//! Binding forms to client operations.

use crate::error::{ControllerError, Result};
use crate::fields::{text_or_empty, FieldPolicy, IdField};
use crate::form::{FormData, FormId, Record};
use crate::render::{render, OutputStyle};
use crate::surface::FormSurface;
use ppp_client::{ApiResult, FailureKind, Operation, PppClient};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Which operation each form submits to.
pub const FORM_TABLE: [(FormId, Operation); 12] = [
    (FormId::AddUser, Operation::CreateUser),
    (FormId::UpdateUser, Operation::UpdateUser),
    (FormId::GetAllUsers, Operation::ListUsers),
    (FormId::GetUserByUsername, Operation::GetUserByUsername),
    (
        FormId::GetUserByUsernameAndPassword,
        Operation::GetUserByUsernameAndPassword,
    ),
    (FormId::DeleteUser, Operation::DeleteUser),
    (FormId::AddAlbum, Operation::CreateAlbum),
    (FormId::UpdateAlbum, Operation::UpdateAlbum),
    (FormId::GetAllAlbums, Operation::ListAlbums),
    (FormId::GetAlbumById, Operation::GetAlbumById),
    (FormId::GetAlbumsByUserId, Operation::ListAlbumsByUser),
    (FormId::DeleteAlbum, Operation::DeleteAlbum),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControllerSettings {
    pub field_policy: FieldPolicy,
    pub output_style: OutputStyle,
}

#[derive(Debug, Clone)]
struct Binding {
    operation: Operation,
    output_id: String,
}

/// Routes form submissions to the shared [`PppClient`] and renders the
/// results back onto the page.
///
/// Built once at startup next to the client. Submissions take `&self`, so
/// several may be in flight at once; each writes only its own form's output
/// and the last to complete is what stays on screen.
pub struct FormController<S> {
    client: Arc<PppClient>,
    surface: Arc<S>,
    settings: ControllerSettings,
    bindings: HashMap<FormId, Binding>,
}

impl<S: FormSurface> FormController<S> {
    pub fn new(client: Arc<PppClient>, surface: Arc<S>, settings: ControllerSettings) -> Self {
        Self {
            client,
            surface,
            settings,
            bindings: HashMap::new(),
        }
    }

    /// Bind every form in [`FORM_TABLE`], have the surface intercept their
    /// submissions and hide all sections until one is selected.
    pub fn setup(&mut self) {
        for (form, operation) in FORM_TABLE {
            self.surface.intercept(form);
            self.surface.set_visible(form, false);
            self.bindings.insert(
                form,
                Binding {
                    operation,
                    output_id: form.output_id(),
                },
            );
            debug!(form = %form, operation = %operation, "Bound form");
        }

        info!(
            forms = self.bindings.len(),
            field_policy = ?self.settings.field_policy,
            output_style = ?self.settings.output_style,
            "Form controller ready"
        );
    }

    pub fn is_bound(&self, form: FormId) -> bool {
        self.bindings.contains_key(&form)
    }

    /// The operation a bound form submits to.
    pub fn operation_for(&self, form: FormId) -> Option<Operation> {
        self.bindings.get(&form).map(|binding| binding.operation)
    }

    /// Show the section of `form` and hide every other one.
    pub fn select(&self, form: FormId) {
        for candidate in FormId::ALL {
            self.surface.set_visible(candidate, candidate == form);
        }
        debug!(form = %form, "Selected form");
    }

    /// [`select`](Self::select) driven by the selector control's raw value.
    pub fn select_value(&self, value: &str) -> Result<FormId> {
        let form = value.parse()?;
        self.select(form);
        Ok(form)
    }

    /// Handle a submission of `form`: build the record, call the bound
    /// operation and render the result into the form's output.
    pub async fn submit(&self, form: FormId, data: &FormData) -> Result<ApiResult> {
        let binding = self
            .bindings
            .get(&form)
            .ok_or(ControllerError::NotBound(form))?;

        let record = data.to_record();
        debug!(form = %form, fields = record.len(), "Form submitted");

        let result = match self.invoke(binding.operation, record).await {
            Ok(result) => result,
            Err(err) => {
                warn!(form = %form, error = %err, "Rejected form submission");
                ApiResult::failure(FailureKind::Validation, err.to_string(), None)
            }
        };

        let text = render(&result, self.settings.output_style)?;
        self.surface.render(&binding.output_id, &text);

        Ok(result)
    }

    async fn invoke(&self, operation: Operation, mut record: Record) -> Result<ApiResult> {
        let policy = self.settings.field_policy;
        let users = self.client.users();
        let albums = self.client.albums();

        let result = match operation {
            Operation::CreateUser => users.add_user(&record).await,
            Operation::UpdateUser => {
                let user_id = policy.id(&record, IdField::UserId)?;
                users.update_user(user_id, &record).await
            }
            Operation::ListUsers => users.get_all_users().await,
            Operation::GetUserByUsername => {
                let username = policy.username(&record)?;
                users.get_user_by_username(&username).await
            }
            Operation::GetUserByUsernameAndPassword => {
                let username = policy.username(&record)?;
                let password = text_or_empty(&record, "password");
                users
                    .get_user_by_username_and_password(&username, &password)
                    .await
            }
            Operation::DeleteUser => {
                let user_id = policy.id(&record, IdField::UserId)?;
                users.delete_user(user_id).await
            }
            Operation::CreateAlbum => {
                let user_id = policy.id(&record, IdField::UserId)?;
                // The owner goes in the path, not the album
                record.shift_remove(IdField::UserId.name());
                albums.add_album(&record, user_id).await
            }
            Operation::UpdateAlbum => {
                let album_id = policy.id(&record, IdField::AlbumId)?;
                albums.update_album(album_id, &record).await
            }
            Operation::ListAlbums => albums.get_all_albums().await,
            Operation::GetAlbumById => {
                let album_id = policy.id(&record, IdField::AlbumId)?;
                albums.get_album_by_id(album_id).await
            }
            Operation::ListAlbumsByUser => {
                let user_id = policy.id(&record, IdField::UserId)?;
                albums.get_albums_by_user_id(user_id).await
            }
            Operation::DeleteAlbum => {
                let album_id = policy.id(&record, IdField::AlbumId)?;
                albums.delete_album(album_id).await
            }
        };

        Ok(result)
    }
}
