use serde::Serialize;
use utoipa::ToSchema;

use crate::error::PageError;
use crate::window::{self, PageControl, DEFAULT_VISIBLE_PAGES};

/// Display metadata for the current page.
///
/// This is the single source of truth a renderer uses for the
/// "Showing X–Y of Z" line and for enabling or disabling the previous/next
/// controls. Consumers must not recompute any of these fields themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PageInfo {
    /// 1-based ordinal of the first item on the current page, 0 when the
    /// collection is empty.
    pub start_item: usize,
    /// 1-based ordinal of the last item on the current page.
    pub end_item: usize,
    pub total_items: usize,
    pub current_page: usize,
    pub total_pages: usize,
    pub has_next: bool,
    pub has_previous: bool,
}

/// Fixed-size page windowing over an owned collection.
///
/// The cursor is 1-based and satisfies `1 <= current_page <= max(1, total_pages)`
/// after every mutation. An empty collection still has a valid, inert page 1.
#[derive(Debug, Clone)]
pub struct Paginator<T> {
    items: Vec<T>,
    page_size: usize,
    current_page: usize,
}

impl<T> Paginator<T> {
    /// Create a paginator over `items`, starting on page 1.
    ///
    /// A zero `page_size` is a caller bug and is rejected rather than coerced.
    pub fn new(items: Vec<T>, page_size: usize) -> Result<Self, PageError> {
        if page_size == 0 {
            return Err(PageError::InvalidPageSize(page_size));
        }
        Ok(Self {
            items,
            page_size,
            current_page: 1,
        })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size)
    }

    /// Replace the backing collection wholesale.
    ///
    /// The cursor is preserved when it still points at an existing page, so a
    /// data refresh does not bounce the user back to page 1. It is clamped
    /// down only when the dataset shrank under it, e.g. a filter removed the
    /// page being viewed.
    pub fn update_items(&mut self, new_items: Vec<T>) {
        self.items = new_items;
        let total_pages = self.total_pages();
        if self.current_page > total_pages {
            let clamped = total_pages.max(1);
            tracing::debug!(
                stale = self.current_page,
                clamped,
                "page cursor clamped after refresh"
            );
            self.current_page = clamped;
        }
    }

    /// The slice of items on the current page.
    ///
    /// Total over every cursor/collection combination: a window past the end
    /// of the collection yields an empty slice, never a panic.
    pub fn current_page_items(&self) -> &[T] {
        let len = self.items.len();
        let start = (self.current_page - 1)
            .saturating_mul(self.page_size)
            .min(len);
        let end = start.saturating_add(self.page_size).min(len);
        &self.items[start..end]
    }

    /// Move the cursor to `page`.
    ///
    /// Returns `false` and leaves the cursor untouched when `page` is outside
    /// `1..=total_pages`. Requesting the current page again succeeds as a
    /// no-op.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        let total_pages = self.total_pages();
        if page >= 1 && page <= total_pages {
            self.current_page = page;
            true
        } else {
            tracing::debug!(requested = page, total_pages, "page navigation rejected");
            false
        }
    }

    /// Advance one page; rejected on the last page.
    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    /// Step back one page; rejected on page 1.
    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    /// Derive the display metadata for the current page.
    pub fn info(&self) -> PageInfo {
        let total_items = self.items.len();
        let total_pages = self.total_pages();
        let start_item = if total_items == 0 {
            0
        } else {
            (self.current_page - 1) * self.page_size + 1
        };
        let end_item = (self.current_page * self.page_size).min(total_items);

        PageInfo {
            start_item,
            end_item,
            total_items,
            current_page: self.current_page,
            total_pages,
            has_next: self.current_page < total_pages,
            has_previous: self.current_page > 1,
        }
    }

    /// The page-number control strip at the default width of
    /// [`DEFAULT_VISIBLE_PAGES`].
    pub fn page_controls(&self) -> Vec<PageControl> {
        self.page_controls_sized(DEFAULT_VISIBLE_PAGES)
    }

    /// The page-number control strip with at most `max_visible` contiguous
    /// page buttons.
    pub fn page_controls_sized(&self, max_visible: usize) -> Vec<PageControl> {
        window::page_controls(self.current_page, self.total_pages(), max_visible)
    }
}
