//! Semantic checks over redirect declarations and table derivation.

use std::collections::{BTreeMap, BTreeSet};

use super::{RedirectError, Redirects, XrefTargets};
use crate::redirector::RedirectTable;

/// Declarations that passed [`Redirects::validate`], with the flattened
/// client-side and server-side source -> destination maps.
#[derive(Debug, Clone)]
pub struct ValidatedRedirects {
    redirects: Redirects,
    targets: XrefTargets,
    client_side: BTreeMap<String, String>,
    server_side: BTreeMap<String, String>,
}

impl Redirects {
    /// Checks the declarations against the identifiers present in the source.
    ///
    /// Rejects, in this order: identifiers declared but not in the source;
    /// source identifiers with neither an entry nor a historical anchor naming
    /// them; entries whose first location is not the current output path;
    /// locations claimed by more than one identifier; historical anchors that
    /// collide with live identifiers; client-side redirects from pages that
    /// already redirect server-side.
    pub fn validate(self, targets: XrefTargets) -> Result<ValidatedRedirects, RedirectError> {
        let orphans: Vec<String> = self
            .raw
            .keys()
            .filter(|id| !targets.contains_key(*id))
            .cloned()
            .collect();
        if !orphans.is_empty() {
            return Err(RedirectError::MissingInSource(orphans));
        }

        let historical_anchors: BTreeSet<&str> = self
            .raw
            .values()
            .flat_map(|locations| locations.iter().skip(1))
            .map(|location| location.rsplit('#').next().unwrap_or(location))
            .collect();
        let without_redirect: Vec<String> = targets
            .keys()
            .filter(|id| !self.raw.contains_key(*id) && !historical_anchors.contains(id.as_str()))
            .cloned()
            .collect();
        if !without_redirect.is_empty() {
            return Err(RedirectError::MissingRedirect(without_redirect));
        }

        let mut client_side = BTreeMap::new();
        let mut server_side = BTreeMap::new();
        let mut divergent = BTreeSet::new();
        let mut redirect_anchors = BTreeSet::new();
        for (identifier, locations) in &self.raw {
            let current = &targets[identifier].path;
            match locations.first() {
                Some(first) if first == current => {}
                _ => {
                    return Err(RedirectError::WrongCurrentPath {
                        identifier: identifier.clone(),
                    })
                }
            }

            for location in &locations[1..] {
                let claimed = match location.split_once('#') {
                    Some((_, anchor)) => {
                        redirect_anchors.insert(anchor.to_string());
                        claim(&mut client_side, location, format!("{current}#{identifier}"))
                    }
                    None => claim(&mut server_side, location, current.clone()),
                };
                if !claimed {
                    divergent.insert(location.clone());
                }
            }
        }
        if !divergent.is_empty() {
            return Err(RedirectError::Divergent(divergent.into_iter().collect()));
        }

        let conflicting: Vec<String> = redirect_anchors
            .into_iter()
            .filter(|anchor| self.raw.contains_key(anchor))
            .collect();
        if !conflicting.is_empty() {
            return Err(RedirectError::ConflictingAnchors(conflicting));
        }

        let mut transitive = Vec::new();
        for (server_from, server_to) in &server_side {
            for client_from in client_side.keys() {
                if let Some((path, anchor)) = client_from.split_once('#') {
                    if path == server_from {
                        transitive.push((client_from.clone(), format!("{server_to}#{anchor}")));
                    }
                }
            }
        }
        if !transitive.is_empty() {
            return Err(RedirectError::Transitive(transitive));
        }

        tracing::debug!(
            client = client_side.len(),
            server = server_side.len(),
            "redirect declarations validated"
        );
        Ok(ValidatedRedirects {
            redirects: self,
            targets,
            client_side,
            server_side,
        })
    }
}

/// Inserts `location -> dest` unless `location` is already claimed.
fn claim(map: &mut BTreeMap<String, String>, location: &str, dest: String) -> bool {
    if map.contains_key(location) {
        return false;
    }
    map.insert(location.to_string(), dest);
    true
}

impl ValidatedRedirects {
    /// Anchor-keyed table for the per-page script of `page`.
    ///
    /// Holds every historical `page#anchor` location, mapped to the
    /// identifier's current `path#identifier`.
    pub fn client_redirects(&self, page: &str) -> RedirectTable {
        let mut entries = Vec::new();
        for (identifier, locations) in &self.redirects.raw {
            let current = &self.targets[identifier].path;
            for (path, anchor) in locations.iter().skip(1).filter_map(|l| l.split_once('#')) {
                if path == page {
                    entries.push((anchor.to_string(), format!("{current}#{identifier}")));
                }
            }
        }
        entries.into_iter().collect()
    }

    /// `path#anchor`-keyed table of every client-side redirect, for the
    /// site-wide script.
    pub fn client_side_table(&self) -> RedirectTable {
        self.client_side
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect()
    }

    /// Whole pages that moved: old path -> current path.
    pub fn server_side_redirects(&self) -> &BTreeMap<String, String> {
        &self.server_side
    }

    pub fn client_side_len(&self) -> usize {
        self.client_side.len()
    }
}
