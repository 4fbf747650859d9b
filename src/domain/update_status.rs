use serde::Serialize;

/// Outcome of a profile update with no field-specific validation.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateStatus {
    Success,
    Failure,
    UserNotFound,
}

/// Outcome of a password update.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdatePasswordStatus {
    Success,
    Failure,
    UserNotFound,
    PasswordTooShort,
}

/// Outcome of a phone number update.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdatePhoneStatus {
    Success,
    Failure,
    UserNotFound,
    NumberTooShort,
    NumberTooLong,
}

/// Outcome of an address update.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UpdateAddressStatus {
    Success,
    Failure,
    UserNotFound,
    AddressIsNone,
}
