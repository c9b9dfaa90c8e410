//! Header UI flags: expandable search box and mobile menu.

/// Height of the fixed header; scroll targets land this far below the top.
pub const HEADER_OFFSET_PX: u32 = 64;

/// Pause before focusing the search input so its width transition starts first.
pub const SEARCH_FOCUS_DELAY_MS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderState {
    search_open: bool,
    menu_open: bool,
    query: String,
}

impl HeaderState {
    pub fn search_open(&self) -> bool {
        self.search_open
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Flips the search box. Returns `true` when it just expanded and the
    /// input should receive focus.
    pub fn toggle_search(&mut self) -> bool {
        self.search_open = !self.search_open;
        self.search_open
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// A navigation link was activated.
    pub fn navigated(&mut self) {
        self.menu_open = false;
    }
}
