use tracing::debug;

use crate::error::{FifteenAllError, Result};

/// Zip used when a phone's area code is not in [`AREA_CODE_ZIPS`].
pub const FALLBACK_AREA_ZIP: &str = "10001";

/// Representative zip code for a handful of US area codes.
pub const AREA_CODE_ZIPS: &[(&str, &str)] = &[
    ("212", "10001"),
    ("646", "10001"),
    ("718", "11201"),
    ("202", "20001"),
    ("305", "33101"),
    ("312", "60601"),
    ("404", "30303"),
    ("415", "94102"),
    ("512", "78701"),
    ("617", "02108"),
    ("206", "98101"),
    ("303", "80202"),
    ("310", "90210"),
    ("213", "90012"),
    ("713", "77002"),
    ("602", "85004"),
];

/// Area code taken from the last ten digits of a phone number.
///
/// Formatting characters and a leading country code are ignored. Numbers
/// shorter than ten digits yield their first three digits.
pub fn extract_area_code(phone: &str) -> Result<String> {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return Err(FifteenAllError::InvalidAreaCode {
            phone: phone.to_string(),
        });
    }
    let national = &digits[digits.len().saturating_sub(10)..];
    Ok(national.chars().take(3).collect())
}

pub fn zip_for_area_code(area_code: &str) -> &'static str {
    AREA_CODE_ZIPS
        .iter()
        .find(|(code, _)| *code == area_code)
        .map(|(_, zip)| *zip)
        .unwrap_or_else(|| {
            debug!(area_code, "unknown area code, using fallback zip");
            FALLBACK_AREA_ZIP
        })
}

pub fn zip_for_phone(phone: &str) -> Result<&'static str> {
    extract_area_code(phone).map(|code| zip_for_area_code(&code))
}
