/**
 * Link Book
 *
 * The client's in-memory view of the caller's links, newest first. Search
 * and category filtering run here, over what the server last returned plus
 * any optimistic local changes.
 *
 * # Search
 *
 * - category filter: exact case-insensitive match against the link's
 *   category or any of its tags
 * - text query: trimmed, case-insensitive substring of title, url or notes
 *
 * Both filters compose; an empty query or category is no filter.
 */

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::client::category::{self, PREDEFINED};
use crate::shared::Link;

/// Local edit of a link; `None` leaves a field unchanged
#[derive(Debug, Clone, Default)]
pub struct LinkEdit {
    pub title: Option<String>,
    pub url: Option<String>,
    pub notes: Option<String>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default)]
pub struct LinkBook {
    links: Vec<Link>,
}

impl LinkBook {
    /// Book over `links`, which are expected newest first
    pub fn new(links: Vec<Link>) -> Self {
        Self { links }
    }

    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    pub fn get(&self, id: Uuid) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    /// Add a just-saved link at the top
    pub fn insert_front(&mut self, link: Link) {
        self.links.insert(0, link);
    }

    pub fn remove(&mut self, id: Uuid) -> Option<Link> {
        let index = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(index))
    }

    /// Apply `edit` to the local copy only; returns whether the link exists
    pub fn update_local(&mut self, id: Uuid, edit: LinkEdit) -> bool {
        let Some(link) = self.links.iter_mut().find(|l| l.id == id) else {
            return false;
        };

        if let Some(title) = edit.title {
            link.title = title;
        }
        if let Some(url) = edit.url {
            link.url = url;
        }
        if let Some(notes) = edit.notes {
            link.notes = notes;
        }
        if let Some(tags) = edit.tags {
            link.tags = tags;
        }
        true
    }

    /// Predefined labels plus every category and tag in use
    ///
    /// Deduplicated case-insensitively (the first spelling seen wins,
    /// predefined labels first) and sorted by label.
    pub fn categories(&self) -> Vec<String> {
        let mut labels: BTreeMap<String, String> = BTreeMap::new();

        for label in PREDEFINED {
            labels.insert(label.to_lowercase(), label.to_string());
        }

        for link in &self.links {
            let derived = category::category_of(link);
            let tags = link.tags.iter().map(|t| t.trim().to_string());
            for raw in derived.into_iter().chain(tags).filter(|t| !t.is_empty()) {
                labels.entry(raw.to_lowercase()).or_insert(raw);
            }
        }

        let mut out: Vec<String> = labels.into_values().collect();
        out.sort_by(|a, b| a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b)));
        out
    }

    pub fn search(&self, query: &str, category: Option<&str>) -> Vec<&Link> {
        let query = query.trim().to_lowercase();
        let category = category
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());

        self.links
            .iter()
            .filter(|link| match &category {
                Some(selected) => in_category(link, selected),
                None => true,
            })
            .filter(|link| query.is_empty() || matches_query(link, &query))
            .collect()
    }
}

fn in_category(link: &Link, selected: &str) -> bool {
    let by_category = category::category_of(link)
        .map(|c| c.to_lowercase() == selected)
        .unwrap_or(false);

    by_category || link.tags.iter().any(|t| t.trim().to_lowercase() == selected)
}

fn matches_query(link: &Link, query: &str) -> bool {
    [&link.title, &link.url, &link.notes]
        .iter()
        .any(|field| field.to_lowercase().contains(query))
}
