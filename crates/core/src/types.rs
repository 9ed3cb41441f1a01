/// Primary keys of the Sakila tables are PostgreSQL INTEGER columns.
pub type DbId = i32;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
