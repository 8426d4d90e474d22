//! Visible page-number window with ellipsis truncation.
//!
//! Decides which page-number buttons a view shows when the page count is
//! large, bounding the control strip to a fixed number of contiguous buttons
//! while keeping page 1 and the last page reachable.

use serde::Serialize;
use utoipa::ToSchema;

/// Default width of the page-number control strip.
pub const DEFAULT_VISIBLE_PAGES: usize = 5;

/// One element of the page-number control strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageControl {
    /// A selectable page button; `active` marks the page currently shown.
    Page { number: usize, active: bool },
    /// A truncation marker standing in for an omitted run of pages.
    Ellipsis,
}

/// Build the control strip for `current_page` of `total_pages`.
///
/// At most `max_visible` contiguous page buttons are emitted, centered on the
/// cursor and re-anchored against the tail near the end so the strip keeps
/// its full width whenever `total_pages` permits. Omitted runs collapse into
/// [`PageControl::Ellipsis`] markers with page 1 and the last page kept
/// reachable. One page or fewer yields no control at all.
pub fn page_controls(
    current_page: usize,
    total_pages: usize,
    max_visible: usize,
) -> Vec<PageControl> {
    if total_pages <= 1 {
        return Vec::new();
    }
    // a window always shows at least the current page
    let max_visible = max_visible.max(1);
    // callers may hand in a cursor that outlived a shrink; treat it as the
    // last page so the window stays total
    let current_page = current_page.min(total_pages);

    let mut start = current_page.saturating_sub(max_visible / 2).max(1);
    let end = (start + max_visible - 1).min(total_pages);
    if end - start < max_visible - 1 {
        start = end.saturating_sub(max_visible - 1).max(1);
    }

    let mut controls = Vec::new();
    if start > 1 {
        controls.push(PageControl::Page {
            number: 1,
            active: false,
        });
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }
    for number in start..=end {
        controls.push(PageControl::Page {
            number,
            active: number == current_page,
        });
    }
    if end < total_pages {
        if end < total_pages - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page {
            number: total_pages,
            active: false,
        });
    }
    controls
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: usize) -> PageControl {
        PageControl::Page {
            number,
            active: false,
        }
    }

    fn active(number: usize) -> PageControl {
        PageControl::Page {
            number,
            active: true,
        }
    }

    #[test]
    fn one_page_or_fewer_emits_no_control() {
        assert!(page_controls(1, 0, 5).is_empty());
        assert!(page_controls(1, 1, 5).is_empty());
    }

    #[test]
    fn few_pages_show_everything_without_ellipsis() {
        assert_eq!(
            page_controls(2, 4, 5),
            vec![page(1), active(2), page(3), page(4)],
        );
        assert_eq!(
            page_controls(5, 5, 5),
            vec![page(1), page(2), page(3), page(4), active(5)],
        );
    }

    #[test]
    fn middle_window_truncates_both_sides() {
        assert_eq!(
            page_controls(10, 20, 5),
            vec![
                page(1),
                PageControl::Ellipsis,
                page(8),
                page(9),
                active(10),
                page(11),
                page(12),
                PageControl::Ellipsis,
                page(20),
            ],
        );
    }

    #[test]
    fn head_window_keeps_full_width() {
        assert_eq!(
            page_controls(1, 20, 5),
            vec![
                active(1),
                page(2),
                page(3),
                page(4),
                page(5),
                PageControl::Ellipsis,
                page(20),
            ],
        );
    }

    #[test]
    fn tail_window_reanchors_against_the_end() {
        assert_eq!(
            page_controls(19, 20, 5),
            vec![
                page(1),
                PageControl::Ellipsis,
                page(16),
                page(17),
                page(18),
                active(19),
                page(20),
            ],
        );
    }

    #[test]
    fn adjacent_boundaries_omit_redundant_ellipsis() {
        // the window starts on page 2 and ends on the last page: both
        // boundary pages are shown but neither gap needs a marker
        assert_eq!(
            page_controls(4, 6, 5),
            vec![page(1), page(2), page(3), active(4), page(5), page(6)],
        );
    }

    #[test]
    fn cursor_beyond_total_is_treated_as_the_last_page() {
        assert_eq!(page_controls(10, 2, 5), vec![page(1), active(2)]);
        assert_eq!(
            page_controls(100, 3, 5),
            vec![page(1), page(2), active(3)],
        );
    }

    #[test]
    fn zero_width_request_still_shows_the_current_page() {
        assert_eq!(
            page_controls(3, 6, 0),
            vec![
                page(1),
                PageControl::Ellipsis,
                active(3),
                PageControl::Ellipsis,
                page(6),
            ],
        );
    }
}
