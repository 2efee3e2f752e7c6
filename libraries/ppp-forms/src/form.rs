//! Form identifiers and submitted field values.

use crate::error::{ControllerError, Result};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// A flat record built from a form's fields.
pub type Record = Map<String, Value>;

/// The forms declared on the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FormId {
    AddUser,
    UpdateUser,
    GetAllUsers,
    GetUserByUsername,
    GetUserByUsernameAndPassword,
    DeleteUser,
    AddAlbum,
    UpdateAlbum,
    GetAllAlbums,
    GetAlbumById,
    GetAlbumsByUserId,
    DeleteAlbum,
}

impl FormId {
    pub const ALL: [FormId; 12] = [
        FormId::AddUser,
        FormId::UpdateUser,
        FormId::GetAllUsers,
        FormId::GetUserByUsername,
        FormId::GetUserByUsernameAndPassword,
        FormId::DeleteUser,
        FormId::AddAlbum,
        FormId::UpdateAlbum,
        FormId::GetAllAlbums,
        FormId::GetAlbumById,
        FormId::GetAlbumsByUserId,
        FormId::DeleteAlbum,
    ];

    /// The element id of the form on the page.
    pub fn as_str(self) -> &'static str {
        match self {
            FormId::AddUser => "addUser",
            FormId::UpdateUser => "updateUser",
            FormId::GetAllUsers => "getAllUsers",
            FormId::GetUserByUsername => "getUserByUsername",
            FormId::GetUserByUsernameAndPassword => "getUserByUsernameAndPassword",
            FormId::DeleteUser => "deleteUser",
            FormId::AddAlbum => "addAlbum",
            FormId::UpdateAlbum => "updateAlbum",
            FormId::GetAllAlbums => "getAllAlbums",
            FormId::GetAlbumById => "getAlbumById",
            FormId::GetAlbumsByUserId => "getAlbumsByUserId",
            FormId::DeleteAlbum => "deleteAlbum",
        }
    }

    /// The element id the form's results are written into.
    pub fn output_id(self) -> String {
        format!("{}Resp", self.as_str())
    }
}

impl fmt::Display for FormId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormId {
    type Err = ControllerError;

    fn from_str(s: &str) -> Result<Self> {
        FormId::ALL
            .into_iter()
            .find(|form| form.as_str() == s)
            .ok_or_else(|| ControllerError::UnknownForm(s.to_string()))
    }
}

/// Field values of one submission, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormData {
    entries: Vec<(String, String)>,
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append(name, value);
        self
    }

    /// Parse `name=value` pairs as typed on a command line.
    ///
    /// Only the first `=` separates; the value may contain more.
    pub fn parse_pairs<I, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut data = FormData::new();
        for pair in pairs {
            let pair = pair.as_ref();
            match pair.split_once('=') {
                Some((name, value)) if !name.is_empty() => data.append(name, value),
                _ => return Err(ControllerError::MalformedField(pair.to_string())),
            }
        }
        Ok(data)
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    /// Build the flat record sent to the backend. A later field with the
    /// same name overwrites an earlier one.
    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        for (name, value) in &self.entries {
            record.insert(name.clone(), Value::String(value.clone()));
        }
        record
    }
}

impl<K, V> FromIterator<(K, V)> for FormData
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut data = FormData::new();
        for (name, value) in iter {
            data.append(name, value);
        }
        data
    }
}
