use std::fmt;

use serde::Serialize;
use sqlx::FromRow;

/// A row in the `client_users` table, identified by email.
///
/// This crate never creates or deletes these rows; registration owns the
/// lifecycle. Updates touch exactly one column at a time.
#[derive(Clone, Serialize, FromRow, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ClientUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub zip: String,
    pub country: String,
    pub img_base64: String,
}

impl fmt::Debug for ClientUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientUser")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[redacted]")
            .field("phone", &self.phone)
            .field("address", &self.address)
            .field("city", &self.city)
            .field("zip", &self.zip)
            .field("country", &self.country)
            .field("img_base64", &self.img_base64)
            .finish()
    }
}
