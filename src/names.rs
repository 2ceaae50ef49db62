// Listing defaults
pub const QUESTIONS_PER_PAGE: usize = 10;

// Quiz draw category selector meaning "any category"
pub const ALL_CATEGORIES: i64 = 0;

pub const DEFAULT_DIFFICULTY: i64 = 1;
