// Copyright 2026 the Tapkit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Delegation selectors: compound simple selectors over element data.
//!
//! ## Scope
//!
//! A selector is any combination of a tag name, an `#id`, and `.class`
//! segments applied to a single element (`"button.primary"`, `"#send"`,
//! `".row.selected"`). Combinators (descendant, child, sibling) are out of
//! scope; delegated listeners match individual nodes on the bubble path.
//!
//! ## Minimal example
//!
//! ```
//! use tapkit_bus::selector::Selector;
//! use tapkit_bus::tree::ElementData;
//!
//! let sel = Selector::parse("button.primary").unwrap();
//! let el = ElementData::tag("button").with_class("primary");
//! assert!(sel.matches(&el));
//! assert!(!sel.matches(&ElementData::tag("button")));
//! ```

use alloc::string::String;
use alloc::vec::Vec;

use crate::tree::ElementData;

/// A parsed compound simple selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selector {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

fn ident_end(input: &str) -> usize {
    input
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '-' || c == '_'))
        .unwrap_or(input.len())
}

impl Selector {
    /// Parse a compound simple selector.
    ///
    /// Returns `None` for empty input, whitespace, combinators, or empty
    /// `#`/`.` segments.
    pub fn parse(input: &str) -> Option<Self> {
        if input.is_empty() {
            return None;
        }
        let mut tag = None;
        let mut id = None;
        let mut classes = Vec::new();
        let mut rest = input;

        // Optional leading tag name.
        let end = ident_end(rest);
        if end > 0 {
            tag = Some(String::from(&rest[..end]));
            rest = &rest[end..];
        }

        while let Some(marker) = rest.chars().next() {
            let tail = &rest[marker.len_utf8()..];
            let end = ident_end(tail);
            if end == 0 {
                return None;
            }
            let ident = String::from(&tail[..end]);
            match marker {
                '#' => {
                    if id.replace(ident).is_some() {
                        return None;
                    }
                }
                '.' => classes.push(ident),
                _ => return None,
            }
            rest = &tail[end..];
        }

        if tag.is_none() && id.is_none() && classes.is_empty() {
            return None;
        }
        classes.sort_unstable();
        classes.dedup();
        Some(Self { tag, id, classes })
    }

    /// Whether `element` satisfies every segment of the selector.
    pub fn matches(&self, element: &ElementData) -> bool {
        if let Some(tag) = &self.tag
            && element.tag != *tag
        {
            return false;
        }
        if let Some(id) = &self.id
            && element.id.as_deref() != Some(id.as_str())
        {
            return false;
        }
        self.classes
            .iter()
            .all(|c| element.classes.iter().any(|have| have == c))
    }
}
