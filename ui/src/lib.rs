//! Shared UI crate for the Steingauquartier site. Content, interaction state
//! and every section component live here; platform crates only launch [`Site`].

pub mod content;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Fixed header with navigation and the language switch (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;
}

pub use views::Site;

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
