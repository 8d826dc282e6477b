// Client configuration
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_NOTICE_DURATION_MS: u64 = 1000;
pub const DEFAULT_MAX_MINUTES_PER_DAY: u64 = 2000;
pub const DEFAULT_LOG_FILTER: &str = "info";

// Pagination
pub const FIRST_PAGE: u32 = 1;

// Wire formats
pub const TIME_QUERY_DATE_PREFIX: &str = "1970/01/01";

// Validation messages
pub const ERR_MISSING_DATE: &str = "Both from and to dates are needed";
pub const ERR_FROM_DATE_AFTER_TO_DATE: &str = "From date cannot be larger than to date";
pub const ERR_FROM_TIME_AFTER_TO_TIME: &str =
    "Inside same day, from time cannot be larger than to time";
pub const ERR_NEGATIVE_THRESHOLD: &str = "Max minutes per day cannot be negative";

// Backend error messages
pub const ERR_FETCH_WORKS: &str = "Error retrieving list of works";
pub const ERR_SAVE_WORKS: &str = "Error saving works";
pub const ERR_DELETE_WORKS: &str = "Error deleting works";
pub const ERR_USER_INFO: &str = "Error retrieving user info";
pub const ERR_UPDATE_THRESHOLD: &str = "Error saving max minutes per day";
pub const ERR_LOGOUT: &str = "Logout failed";
pub const ERR_DELETION_FAILED: &str = "deletion failed.";

// Info notices
pub const INFO_NO_RESULTS: &str = "No results found.";
pub const INFO_SAVED: &str = "Changes saved successfully";
pub const INFO_DELETED: &str = "deletion successful.";
