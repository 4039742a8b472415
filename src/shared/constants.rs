/// Cap on the number of translation records returned by the query listing
pub const RECENT_QUERIES_LIMIT: usize = 10;

/// Maximum introduction video size in bytes (100MB)
pub const MAX_VIDEO_SIZE: usize = 100 * 1024 * 1024;

/// Maximum resume document size in bytes (10MB)
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Role claimed by tokens issued to the employer/admin account
pub const EMPLOYER_ROLE: &str = "employer";
