//! Layout dimension constants for TUI rendering.
//!
//! Centralized location for all layout-related numeric values to enable
//! consistent tuning across the screens.

/// Height of the navigation bar at the top of the screen.
pub const NAV_BAR_HEIGHT: u16 = 1;

/// Height of the status bar in lines.
///
/// Single line for keyboard hints at the bottom of the screen.
pub const STATUS_BAR_HEIGHT: u16 = 1;

/// Height of the success banner when one is showing.
pub const BANNER_HEIGHT: u16 = 1;

/// Height of a bordered single-line text input.
pub const INPUT_HEIGHT: u16 = 3;

/// Height of the listing filter panel (border + two rows of controls).
pub const FILTER_PANEL_HEIGHT: u16 = 4;

/// Height of the pagination bar.
pub const PAGINATION_HEIGHT: u16 = 1;

/// Cards per row on the home and listing grids.
///
/// With six cards per page the listing shows a 3×2 grid.
pub const GRID_COLUMNS: usize = 3;

/// Height of a listing or featured card (border + badge, date, venue, city).
pub const CARD_HEIGHT: u16 = 6;

/// Height of a similar-event card (border + date, venue).
pub const SIMILAR_CARD_HEIGHT: u16 = 4;

/// Width of the facts sidebar on the detail screen.
pub const DETAIL_SIDEBAR_WIDTH: u16 = 36;

/// Width of the event preview next to the RSVP form.
pub const RSVP_PREVIEW_WIDTH: u16 = 36;

/// Width percentage for help overlay popup.
pub const HELP_POPUP_WIDTH_PERCENT: u16 = 70;

/// Height percentage for help overlay popup.
pub const HELP_POPUP_HEIGHT_PERCENT: u16 = 80;
