//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Screen navigation
    /// Go to the home screen. Default: 1
    GoHome,
    /// Go to the events listing. Default: 2
    GoEvents,
    /// Go to the about screen. Default: 3
    GoAbout,
    /// Go to the contact form. Default: 4
    GoContact,
    /// Open the RSVP form for the event on screen. Default: r
    OpenRsvp,
    /// Return to the previous screen. Default: b/Backspace
    Back,

    // Card selection
    /// Select the next card. Default: j/↓
    SelectNext,
    /// Select the previous card. Default: k/↑
    SelectPrev,
    /// Open the selected card's detail screen. Default: Enter
    OpenSelected,

    // Listing filters
    /// Start typing in the search box. Default: /
    StartSearch,
    /// Cycle the category filter through the store's categories. Default: c
    CycleCategory,
    /// Cycle the location filter through the store's cities. Default: l
    CycleCity,
    /// Edit the "from" date. Default: f
    EditFromDate,
    /// Edit the "to" date. Default: t
    EditToDate,
    /// Cycle the sort mode. Default: s
    CycleSort,
    /// Reset every filter to its default. Default: x
    ClearFilters,

    // Pagination
    /// Next page. Default: ]/→/Page Down
    NextPage,
    /// Previous page. Default: [/←/Page Up
    PrevPage,
    /// First page. Default: g/Home
    FirstPage,
    /// Last page. Default: G/End
    LastPage,
    /// Type a page number to jump to. Default: p
    GoToPage,

    // Application
    /// Exit the application. Default: q/Ctrl+c
    Quit,
    /// Show help overlay with keyboard shortcuts. Default: ?
    Help,
}

impl KeyAction {
    /// True for actions that change the listing's filter state.
    pub fn is_filter_action(self) -> bool {
        matches!(
            self,
            KeyAction::StartSearch
                | KeyAction::CycleCategory
                | KeyAction::CycleCity
                | KeyAction::EditFromDate
                | KeyAction::EditToDate
                | KeyAction::CycleSort
                | KeyAction::ClearFilters
        )
    }

    /// True for pagination actions.
    pub fn is_page_action(self) -> bool {
        matches!(
            self,
            KeyAction::NextPage
                | KeyAction::PrevPage
                | KeyAction::FirstPage
                | KeyAction::LastPage
                | KeyAction::GoToPage
        )
    }
}
