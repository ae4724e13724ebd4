//! Parser for the external user document.
//!
//! The gateway hands back a JSON document shaped like [`UserProfile`]. This
//! module turns it into typed records and reports the first offending field
//! path as [`BurrowError::SchemaMismatch`] instead of letting a missing field
//! surface later as an empty value.
//!
//! A document may declare `"schema-version"`; when it does, the value must be
//! [`DOCUMENT_VERSION`]. Documents without it are read as the current
//! version, which is what the backend serves today.

use log::warn;
use serde::Deserialize;

use crate::{
    error::{BurrowError, Result},
    models::UserProfile,
};

/// Version of the user document layout this parser understands.
pub const DOCUMENT_VERSION: u32 = 1;

#[derive(Deserialize)]
struct VersionProbe {
    #[serde(rename = "schema-version")]
    schema_version: Option<u32>,
}

/// Parse a user document from JSON text.
///
/// # Errors
///
/// Returns `BurrowError::SchemaMismatch` if a required field is missing or
/// has the wrong type, if the document declares an unsupported version, or
/// if a day number is zero.
pub fn parse_profile(text: &str) -> Result<UserProfile> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| BurrowError::schema("$", e.to_string()))?;
    profile_from_value(value)
}

/// Parse a user document that has already been decoded into a JSON value.
///
/// # Errors
///
/// See [`parse_profile`].
pub fn profile_from_value(value: serde_json::Value) -> Result<UserProfile> {
    let probe = VersionProbe::deserialize(&value)
        .map_err(|e| BurrowError::schema("schema-version", e.to_string()))?;
    if let Some(version) = probe.schema_version {
        if version != DOCUMENT_VERSION {
            return Err(BurrowError::schema(
                "schema-version",
                format!("unsupported version {version}, expected {DOCUMENT_VERSION}"),
            ));
        }
    }

    let profile: UserProfile = serde_path_to_error::deserialize(value).map_err(|e| {
        let path = e.path().to_string();
        BurrowError::schema(path, e.into_inner().to_string())
    })?;

    check_day_numbers(&profile)?;
    Ok(profile)
}

/// Serialize a profile back into the external document layout.
///
/// # Errors
///
/// Returns `BurrowError::Serialization` if encoding fails.
pub fn to_document(profile: &UserProfile) -> Result<String> {
    Ok(serde_json::to_string_pretty(profile)?)
}

fn check_day_numbers(profile: &UserProfile) -> Result<()> {
    let Some(plan) = &profile.plan else {
        return Ok(());
    };

    for (index, day) in plan.days.iter().enumerate() {
        if day.day_number == 0 {
            return Err(BurrowError::schema(
                format!("plan.days[{index}].day-number"),
                "day numbers start at 1",
            ));
        }
        if day.day_number as usize != index + 1 {
            warn!(
                "day at position {} is numbered {}; roadmap order follows position",
                index + 1,
                day.day_number
            );
        }
    }
    Ok(())
}
