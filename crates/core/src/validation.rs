//! Field-level validation errors.
//!
//! Requests are rejected with a structured list of `(field, kind)` pairs
//! collected into a single [`ValidationErrors`] value, so clients get every
//! applicable diagnostic in one round trip instead of one failure at a time.

use serde::Serialize;

// Wire field names. `priceRageId` keeps the legacy client spelling.
pub const FIELD_ROOM: &str = "room";
pub const FIELD_ROOM_ID: &str = "roomId";
pub const FIELD_ID: &str = "id";
pub const FIELD_PRICE_RANGE_ID: &str = "priceRageId";
pub const FIELD_ACREAGE_RANGE_ID: &str = "acreageRangeId";
pub const FIELD_STREET_ID: &str = "streetId";
pub const FIELD_ACCOUNT_ID: &str = "accountId";

/// What went wrong with a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A required value was absent or referenced a record that does not exist.
    NotNull,
    /// The value collides with an existing record.
    Duplicate,
    /// The value must reference an existing record but does not.
    NotFound,
}

/// A single `(field, kind)` validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub kind: ErrorKind,
}

/// An accumulating collection of [`FieldError`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure for `field`.
    pub fn push(&mut self, field: &'static str, kind: ErrorKind) {
        self.0.push(FieldError { field, kind });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn fields(&self) -> &[FieldError] {
        &self.0
    }

    /// Build a single-field failure.
    pub fn single(field: &'static str, kind: ErrorKind) -> Self {
        let mut errors = Self::new();
        errors.push(field, kind);
        errors
    }

    /// `Ok(())` if nothing was recorded, otherwise the collected failures.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for err in &self.0 {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", err.field, err.kind)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_accumulator_is_ok() {
        assert!(ValidationErrors::new().into_result().is_ok());
    }

    #[test]
    fn collected_errors_preserve_order() {
        let mut errors = ValidationErrors::new();
        errors.push(FIELD_PRICE_RANGE_ID, ErrorKind::NotNull);
        errors.push(FIELD_ACCOUNT_ID, ErrorKind::NotNull);

        let errors = errors.into_result().unwrap_err();
        assert_eq!(errors.fields().len(), 2);
        assert_eq!(errors.fields()[0].field, FIELD_PRICE_RANGE_ID);
        assert_eq!(errors.fields()[1].field, FIELD_ACCOUNT_ID);
    }

    #[test]
    fn single_builds_one_entry() {
        let errors = ValidationErrors::single(FIELD_ID, ErrorKind::NotNull);
        assert_eq!(
            errors.fields(),
            &[FieldError {
                field: FIELD_ID,
                kind: ErrorKind::NotNull
            }]
        );
    }

    #[test]
    fn serializes_as_field_kind_pairs() {
        let errors = ValidationErrors::single(FIELD_ROOM_ID, ErrorKind::Duplicate);
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{"field": "roomId", "kind": "Duplicate"}])
        );
    }

    #[test]
    fn display_joins_entries() {
        let mut errors = ValidationErrors::new();
        errors.push(FIELD_ROOM, ErrorKind::NotNull);
        errors.push(FIELD_ROOM_ID, ErrorKind::Duplicate);
        assert_eq!(errors.to_string(), "room: NotNull, roomId: Duplicate");
    }
}
