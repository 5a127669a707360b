/// Record ids are the hex ObjectId strings issued by the backing REST API.
pub type EntityId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
