//! Common types for the shared crate

/// Dining table identifier (snowflake style, see [`crate::util::snowflake_id`])
pub type TableId = i64;

/// Guest identifier, issued by the guest-list feature
pub type GuestId = i64;

/// Timestamp type (Unix milliseconds)
pub type Timestamp = i64;
