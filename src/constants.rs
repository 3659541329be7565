//! Build-time constants: the admin secret, localStorage keys, and the
//! registrations collection name.

pub const PRODUCT_NAME: &str = "xClass NOW";

/// Shared admin secret. Compared verbatim; there is no token or session model.
pub const ADMIN_PASSWORD: &str = "xclass2024!";

pub const STORAGE_KEY_LIVE_LINK: &str = "xclass_live_link_v1";
pub const STORAGE_KEY_WEBINAR_INFO: &str = "xclass_webinar_info_v1";
pub const STORAGE_KEY_BACKEND_CONFIG: &str = "xclass_backend_config_v1";

/// Document collection holding sign-ups in the remote store.
pub const REGISTRATIONS_COLLECTION: &str = "registrations";
