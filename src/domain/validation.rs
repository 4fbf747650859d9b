use super::UpdatePhoneStatus;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Required phone number length, counted in characters.
pub const PHONE_LEN: usize = 10;

pub fn password_is_valid(password: &str) -> bool {
    password.chars().count() >= MIN_PASSWORD_LEN
}

/// Classifies a phone number by length; anything other than exactly ten
/// characters is rejected.
pub fn check_phone(phone: &str) -> UpdatePhoneStatus {
    let len = phone.chars().count();
    if len < PHONE_LEN {
        UpdatePhoneStatus::NumberTooShort
    } else if len > PHONE_LEN {
        UpdatePhoneStatus::NumberTooLong
    } else {
        UpdatePhoneStatus::Success
    }
}

/// Only an empty address passes; every non-empty value is rejected.
// TODO: this rule refuses all real addresses and only accepts "". Confirm
// the intended rule with the owning team before touching it; callers
// currently observe ADDRESS_IS_NONE for any non-empty input.
pub fn address_is_valid(address: &str) -> bool {
    address.is_empty()
}
