use std::fmt;
use std::num::NonZeroU32;

/// Where the list is in its page-loading lifecycle.
///
/// `Idle` is terminal: the server reported no further pages. `Ready` and
/// `Loading` carry the page number that is next to request or currently in
/// flight, which is never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// No more pages exist
    Idle,
    /// `page` can be fetched
    Ready { page: NonZeroU32 },
    /// `page` is being fetched
    Loading { page: NonZeroU32 },
}

impl PageState {
    /// First page of a fresh listing
    pub const FIRST: PageState = PageState::Ready {
        page: NonZeroU32::MIN,
    };

    /// `Ready` for the given page, or `Idle` for page 0
    pub fn ready(page: u32) -> Self {
        match NonZeroU32::new(page) {
            Some(page) => PageState::Ready { page },
            None => PageState::Idle,
        }
    }

    /// Page number view of the state: 0 when idle, otherwise the next or
    /// in-flight page
    pub fn page(&self) -> u32 {
        match self {
            PageState::Idle => 0,
            PageState::Ready { page } | PageState::Loading { page } => page.get(),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading { .. })
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, PageState::Idle)
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageState::Idle => f.write_str("idle"),
            PageState::Ready { page } => write!(f, "ready(page {})", page),
            PageState::Loading { page } => write!(f, "loading(page {})", page),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_view() {
        assert_eq!(PageState::Idle.page(), 0);
        assert_eq!(PageState::FIRST.page(), 1);
        assert_eq!(PageState::ready(4).page(), 4);
        assert_eq!(PageState::ready(0), PageState::Idle);
    }

    #[test]
    fn test_loading_flag() {
        let loading = PageState::Loading {
            page: NonZeroU32::new(2).unwrap(),
        };
        assert!(loading.is_loading());
        assert!(!loading.is_idle());
        assert!(!PageState::FIRST.is_loading());
        assert!(PageState::Idle.is_idle());
    }

    #[test]
    fn test_display() {
        assert_eq!(PageState::Idle.to_string(), "idle");
        assert_eq!(PageState::ready(3).to_string(), "ready(page 3)");
    }
}
