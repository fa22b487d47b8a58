/// Default page size for pagination
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Maximum page size allowed
pub const MAX_PAGE_SIZE: i64 = 100;

// =============================================================================
// ADMIN ACTIVITY FEED
// =============================================================================

/// Rows fetched from each source (registrations, submissions, investments)
pub const ACTIVITY_PER_SOURCE: i64 = 5;

/// Entries returned after merging all sources
pub const ACTIVITY_FEED_LIMIT: usize = 10;
