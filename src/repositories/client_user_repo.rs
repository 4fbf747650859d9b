use sqlx::SqlitePool;

use crate::domain::{
    address_is_valid, check_phone, password_is_valid, ClientUser, UpdateAddressStatus,
    UpdatePasswordStatus, UpdatePhoneStatus, UpdateStatus,
};

use super::repo_error::RepositoryError;

/// Columns of `client_users` that a profile update may touch. Column names
/// reach the SQL text only through this enum, never from caller input.
#[derive(Debug, Clone, Copy)]
enum ProfileField {
    Name,
    Password,
    Phone,
    Address,
    City,
    Zip,
    Country,
    ImgBase64,
}

impl ProfileField {
    fn column(self) -> &'static str {
        match self {
            ProfileField::Name => "name",
            ProfileField::Password => "password",
            ProfileField::Phone => "phone",
            ProfileField::Address => "address",
            ProfileField::City => "city",
            ProfileField::Zip => "zip",
            ProfileField::Country => "country",
            ProfileField::ImgBase64 => "img_base64",
        }
    }
}

pub trait ProfileRepository {
    async fn user_exists(&self, email: &str) -> Result<bool, RepositoryError>;
    async fn find_user(&self, email: &str) -> Result<Option<ClientUser>, RepositoryError>;
    async fn update_name(
        &self,
        email: &str,
        new_name: &str,
    ) -> Result<UpdateStatus, RepositoryError>;
    async fn update_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<UpdatePasswordStatus, RepositoryError>;
    async fn update_phone(
        &self,
        email: &str,
        new_phone: &str,
    ) -> Result<UpdatePhoneStatus, RepositoryError>;
    async fn update_address(
        &self,
        email: &str,
        new_address: &str,
    ) -> Result<UpdateAddressStatus, RepositoryError>;
    async fn update_city(
        &self,
        email: &str,
        new_city: &str,
    ) -> Result<UpdateStatus, RepositoryError>;
    async fn update_zip(&self, email: &str, new_zip: &str)
        -> Result<UpdateStatus, RepositoryError>;
    async fn update_country(
        &self,
        email: &str,
        new_country: &str,
    ) -> Result<UpdateStatus, RepositoryError>;
    async fn update_img_base64(
        &self,
        email: &str,
        new_img_base64: &str,
    ) -> Result<UpdateStatus, RepositoryError>;
}

pub struct ClientUserRepository {
    pool: SqlitePool,
}

impl ClientUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Applies a single-column update matching on email. Re-checks existence
    /// first and treats a vanished user as a no-op rather than an error;
    /// there is no transaction around the check and the update, so that race
    /// surfaces here as `false`. Returns true iff exactly one row changed.
    async fn update_field(
        &self,
        email: &str,
        field: ProfileField,
        value: &str,
    ) -> Result<bool, RepositoryError> {
        if !self.user_exists(email).await? {
            return Ok(false);
        }

        let statement = format!(
            "UPDATE client_users SET {} = ? WHERE email = ?",
            field.column()
        );
        let result = sqlx::query(&statement)
            .bind(value)
            .bind(email)
            .execute(&self.pool)
            .await?;

        let rows = result.rows_affected();
        if rows > 1 {
            tracing::warn!(
                "update of {} for {} affected {} rows, expected 1",
                field.column(),
                email,
                rows
            );
        }

        Ok(rows == 1)
    }

    /// Shared skeleton for the fields with no validation rule.
    async fn update_plain(
        &self,
        email: &str,
        field: ProfileField,
        value: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        if !self.user_exists(email).await? {
            return Ok(UpdateStatus::UserNotFound);
        }

        if self.update_field(email, field, value).await? {
            Ok(UpdateStatus::Success)
        } else {
            Ok(UpdateStatus::Failure)
        }
    }
}

impl ProfileRepository for ClientUserRepository {
    async fn user_exists(&self, email: &str) -> Result<bool, RepositoryError> {
        let row = sqlx::query(
            r#"
            SELECT 1
            FROM client_users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    async fn find_user(&self, email: &str) -> Result<Option<ClientUser>, RepositoryError> {
        let user = sqlx::query_as::<_, ClientUser>(
            r#"
            SELECT name, email, password, phone, address, city, zip, country, img_base64
            FROM client_users
            WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn update_name(
        &self,
        email: &str,
        new_name: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        self.update_plain(email, ProfileField::Name, new_name).await
    }

    /// The password rule is checked before the existence lookup, so a too
    /// short password reports `PasswordTooShort` even for unknown emails.
    async fn update_password(
        &self,
        email: &str,
        new_password: &str,
    ) -> Result<UpdatePasswordStatus, RepositoryError> {
        if !password_is_valid(new_password) {
            return Ok(UpdatePasswordStatus::PasswordTooShort);
        }

        if !self.user_exists(email).await? {
            return Ok(UpdatePasswordStatus::UserNotFound);
        }

        if self
            .update_field(email, ProfileField::Password, new_password)
            .await?
        {
            Ok(UpdatePasswordStatus::Success)
        } else {
            Ok(UpdatePasswordStatus::Failure)
        }
    }

    async fn update_phone(
        &self,
        email: &str,
        new_phone: &str,
    ) -> Result<UpdatePhoneStatus, RepositoryError> {
        if !self.user_exists(email).await? {
            return Ok(UpdatePhoneStatus::UserNotFound);
        }

        let validity = check_phone(new_phone);
        if validity != UpdatePhoneStatus::Success {
            return Ok(validity);
        }

        if self
            .update_field(email, ProfileField::Phone, new_phone)
            .await?
        {
            Ok(UpdatePhoneStatus::Success)
        } else {
            Ok(UpdatePhoneStatus::Failure)
        }
    }

    async fn update_address(
        &self,
        email: &str,
        new_address: &str,
    ) -> Result<UpdateAddressStatus, RepositoryError> {
        if !self.user_exists(email).await? {
            return Ok(UpdateAddressStatus::UserNotFound);
        }

        if !address_is_valid(new_address) {
            return Ok(UpdateAddressStatus::AddressIsNone);
        }

        if self
            .update_field(email, ProfileField::Address, new_address)
            .await?
        {
            Ok(UpdateAddressStatus::Success)
        } else {
            Ok(UpdateAddressStatus::Failure)
        }
    }

    async fn update_city(
        &self,
        email: &str,
        new_city: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        self.update_plain(email, ProfileField::City, new_city).await
    }

    async fn update_zip(
        &self,
        email: &str,
        new_zip: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        self.update_plain(email, ProfileField::Zip, new_zip).await
    }

    async fn update_country(
        &self,
        email: &str,
        new_country: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        self.update_plain(email, ProfileField::Country, new_country)
            .await
    }

    async fn update_img_base64(
        &self,
        email: &str,
        new_img_base64: &str,
    ) -> Result<UpdateStatus, RepositoryError> {
        self.update_plain(email, ProfileField::ImgBase64, new_img_base64)
            .await
    }
}
