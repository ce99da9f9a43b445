/// Application name
pub const APP_NAME: &str = "Carte";

/// Display title of the hosted list backing the business cards
pub const DEFAULT_LIST_NAME: &str = "DigitalBusinessCards";

/// File-name prefix for downloaded QR images
pub const DOWNLOAD_PREFIX: &str = "QR_Code_";

/// Download file name used when the record's first name is blank
pub const DOWNLOAD_FALLBACK_NAME: &str = "QR_Code.png";

/// Default cap on the client-side fallback scan (items fetched per lookup)
pub const DEFAULT_FALLBACK_SCAN_LIMIT: usize = 500;
