//! Framework-agnostic pagination for fleet console list views.
//!
//! [`Paginator`] owns an ordered collection, tracks a 1-based page cursor,
//! and derives everything a list renderer needs: the current slice of items,
//! display metadata ([`PageInfo`], the "Showing X–Y of Z" line and
//! enable/disable state for navigation buttons), and a width-bounded
//! page-number control strip with ellipsis truncation ([`PageControl`]).
//!
//! Rendering and transport stay with the caller: a view layer calls the
//! navigation methods in response to user interaction, then re-queries
//! [`Paginator::current_page_items`] and [`Paginator::info`] to redraw.

mod error;
mod paginator;
pub mod window;

pub use error::PageError;
pub use paginator::{PageInfo, Paginator};
pub use window::{page_controls, PageControl, DEFAULT_VISIBLE_PAGES};
