//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Handle identifiers
pub const FIELD_PATH: &str = "path";
pub const FIELD_ABSOLUTE_PATH: &str = "absolute_path";
pub const FIELD_ATTACH_STATE: &str = "attach_state";

// Routing fields
pub const FIELD_URL: &str = "url";
pub const FIELD_STATUS: &str = "status";

// Collection sizes
pub const FIELD_PENDING_COUNT: &str = "pending_count";

// Error fields
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
