use std::num::NonZeroUsize;

/// Page size used when the caller does not choose one
pub const DEFAULT_PER_PAGE: NonZeroUsize = NonZeroUsize::new(12).unwrap();

/// Configuration for paginated requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginationConfig {
    /// Serve page 1 instead of failing on malformed or out-of-range numbers
    pub show_first_page_when_invalid: bool,
    pub default_per_page: NonZeroUsize,
    pub default_orphans: usize,
}

impl PaginationConfig {
    pub fn new() -> Self {
        Self {
            show_first_page_when_invalid: false,
            default_per_page: DEFAULT_PER_PAGE,
            default_orphans: 0,
        }
    }

    pub fn with_show_first_page_when_invalid(mut self, enabled: bool) -> Self {
        self.show_first_page_when_invalid = enabled;
        self
    }

    pub fn with_default_per_page(mut self, per_page: NonZeroUsize) -> Self {
        self.default_per_page = per_page;
        self
    }

    pub fn with_default_orphans(mut self, orphans: usize) -> Self {
        self.default_orphans = orphans;
        self
    }
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self::new()
    }
}
