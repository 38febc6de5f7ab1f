// src/constants.rs
//
// Application-wide constants.

/// Storage key the bookmark set is persisted under.
///
/// Used in: `application/bookmark_store.rs`
pub const BOOKMARKS_STORAGE_KEY: &str = "hr-bookmarks";

/// Base URL of the demo users API.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_API_BASE_URL: &str = "https://dummyjson.com";

/// Number of users requested from the API.
pub const DEFAULT_USER_LIMIT: u32 = 20;

/// Request timeout for the users fetch, in seconds.
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

/// Directory name used under the platform config and data directories.
pub const APP_DIR_NAME: &str = "hrview";

/// File holding the persisted key/value items.
///
/// Used in: `infrastructure/local_storage.rs`
pub const STORAGE_FILE_NAME: &str = "local-storage.json";

/// Config file name inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";
