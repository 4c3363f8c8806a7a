pub const DEFAULT_PAGE_SIZE: u32 = 25;
pub const MAX_PAGE: u32 = 20;

/// Page size and highest reachable page, shared by every listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paging {
    page_size: u32,
    max_page: u32,
}

impl Paging {
    pub fn new(page_size: u32, max_page: u32) -> Self {
        Self {
            page_size: page_size.max(1),
            max_page: max_page.max(1),
        }
    }

    /// Clamps a requested page into `[1, max_page]`. The ceiling does not
    /// depend on how many pages actually hold data.
    pub fn clamp_page(&self, requested: i64) -> u32 {
        requested.clamp(1, i64::from(self.max_page)) as u32
    }

    /// `total_count / page_size + 1`. Always at least one page, and an exact
    /// multiple of the page size yields an empty trailing page.
    pub fn total_pages(&self, total_count: u64) -> u64 {
        total_count / u64::from(self.page_size) + 1
    }

    pub fn request(&self, requested: i64) -> PageRequest {
        PageRequest {
            page: self.clamp_page(requested),
            size: self.page_size,
        }
    }
}

impl Default for Paging {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, MAX_PAGE)
    }
}

/// A 1-based page handed to the stores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
}

impl PageRequest {
    pub fn offset(&self) -> i64 {
        i64::from(self.page.saturating_sub(1)) * i64::from(self.size)
    }

    pub fn limit(&self) -> i64 {
        i64::from(self.size)
    }
}
