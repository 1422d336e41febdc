// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event names with dotted namespaces: parsing and trigger-time filtering.
//!
//! ## Usage
//!
//! 1) Parse a dotted name such as `"tap.menu.analytics"` with [`EventName::parse`].
//! 2) Register listeners under the parsed name.
//! 3) At trigger time, [`EventName::reaches`] decides which listeners a
//!    namespaced trigger can reach.
//!
//! ## Minimal example
//!
//! ```
//! use tapkit_bus::name::EventName;
//!
//! let listener = EventName::parse("tap.menu.analytics").unwrap();
//! // A bare trigger reaches every listener of the kind.
//! assert!(EventName::from_kind("tap").reaches(&listener));
//! // A namespaced trigger reaches listeners carrying all its namespaces.
//! assert!(EventName::parse("tap.menu").unwrap().reaches(&listener));
//! assert!(!EventName::parse("tap.overlay").unwrap().reaches(&listener));
//! ```

use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// An event name: a kind plus a sorted, deduplicated namespace set.
///
/// Filtering rule: a trigger carrying namespaces `N` reaches a listener
/// registered with namespaces `L` iff `N ⊆ L`. A trigger with no namespaces
/// reaches every listener of the same kind.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct EventName {
    kind: String,
    namespaces: Vec<String>,
}

impl EventName {
    /// Parse a dotted event name (`"kind.ns1.ns2"`).
    ///
    /// Returns `None` for an empty kind or empty namespace segment.
    /// Namespaces are sorted and deduplicated; `"tap.b.a"` equals `"tap.a.b"`.
    pub fn parse(input: &str) -> Option<Self> {
        let mut parts = input.split('.');
        let kind = parts.next()?;
        if kind.is_empty() {
            return None;
        }
        let mut namespaces = Vec::new();
        for ns in parts {
            if ns.is_empty() {
                return None;
            }
            namespaces.push(ns.to_string());
        }
        namespaces.sort_unstable();
        namespaces.dedup();
        Some(Self {
            kind: kind.to_string(),
            namespaces,
        })
    }

    /// An event name with no namespaces.
    pub fn from_kind(kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            namespaces: Vec::new(),
        }
    }

    /// The event kind (`"tap"` in `"tap.menu"`).
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The sorted namespace set.
    pub fn namespaces(&self) -> &[String] {
        &self.namespaces
    }

    /// Whether a trigger carrying `self` reaches a listener registered as
    /// `listener`: kinds must match and every trigger namespace must appear
    /// on the listener.
    pub fn reaches(&self, listener: &Self) -> bool {
        self.kind == listener.kind
            && self
                .namespaces
                .iter()
                .all(|ns| listener.namespaces.binary_search(ns).is_ok())
    }
}
