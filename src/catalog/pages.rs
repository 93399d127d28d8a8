//! Listing pagination

/// Products shown per listing page.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PerPage {
    /// 15 per page
    #[default]
    Fifteen,

    /// 30 per page
    Thirty,

    /// 45 per page
    FortyFive,
}

impl PerPage {
    /// Number of products per page.
    pub fn count(self) -> usize {
        match self {
            Self::Fifteen => 15,
            Self::Thirty => 30,
            Self::FortyFive => 45,
        }
    }

    /// Parse a page size offered by the listing page.
    pub fn from_count(count: usize) -> Option<Self> {
        match count {
            15 => Some(Self::Fifteen),
            30 => Some(Self::Thirty),
            45 => Some(Self::FortyFive),
            _ => None,
        }
    }
}

/// The 1-based `page` of `items`. Pages past the end, and page 0, are empty.
pub fn paginate<T>(items: &[T], per_page: PerPage, page: usize) -> &[T] {
    let size = per_page.count();

    let Some(start) = page.checked_sub(1).and_then(|p| p.checked_mul(size)) else {
        return &[];
    };

    let Some(rest) = items.get(start..) else {
        return &[];
    };

    rest.get(..size).unwrap_or(rest)
}
