//! Shared UI crate for Polyglot. The translator widget and its supporting
//! pieces live here; the web and desktop shells only launch it.

pub mod core;
pub mod i18n;
pub mod translator;
pub mod views;

pub mod components {
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;
}

#[cfg(test)]
mod tests {
    mod i18n_completeness;
}
