/// All entity primary keys are opaque strings (room ids are server-generated
/// UUIDs; lookup ids are seeded externally).
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
