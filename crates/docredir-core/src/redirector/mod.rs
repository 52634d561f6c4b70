//! Page-load redirect: normalize the current location, look it up, navigate.
//!
//! The table is passed in explicitly and navigation goes through the
//! [`Navigator`] trait, so the whole step runs without a browser.

mod table;

pub use table::RedirectTable;

use serde::{Deserialize, Serialize};

use crate::location::Location;

/// Which lookup key the redirect step builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Key is `<filename>#<anchor>`; used by the single site-wide script.
    #[default]
    Page,
    /// Key is `<anchor>`; used by per-page scripts.
    Anchor,
}

/// Receiver of the navigation side effect (the browser's `location.href`).
pub trait Navigator {
    fn navigate(&mut self, target: &str);
}

/// Navigator that only records where it was sent.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    pub target: Option<String>,
}

impl Navigator for RecordingNavigator {
    fn navigate(&mut self, target: &str) {
        self.target = Some(target.to_string());
    }
}

/// Redirect step bound to one table and variant.
#[derive(Debug, Clone, Copy)]
pub struct Redirector<'a> {
    table: &'a RedirectTable,
    variant: Variant,
}

impl<'a> Redirector<'a> {
    pub fn new(table: &'a RedirectTable, variant: Variant) -> Self {
        Self { table, variant }
    }

    /// Target for `location`, if one applies. Empty targets count as absent.
    pub fn resolve(&self, location: &Location) -> Option<&'a str> {
        let key = location.lookup_key(self.variant);
        let target = self.table.get(&key).filter(|t| !t.is_empty());
        tracing::trace!(key = %key, hit = target.is_some(), "redirect lookup");
        target
    }

    /// Navigates when a redirect applies. Returns whether it navigated.
    pub fn run<N: Navigator>(&self, location: &Location, navigator: &mut N) -> bool {
        match self.resolve(location) {
            Some(target) => {
                navigator.navigate(target);
                true
            }
            None => false,
        }
    }
}
