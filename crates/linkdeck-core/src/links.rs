//! Link sequence management
//!
//! The ordered, user-controlled list of links on a page. Each link carries a
//! stable unique id assigned at creation; order is significant and edited by
//! explicit move operations. All mutation goes through named operations so
//! callers can mirror every change to storage in one place.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identifier for a link, unique within its sequence
pub type LinkId = Uuid;

/// A single link on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub id: LinkId,
    pub title: String,
    pub url: String,
    /// Inactive links are hidden on the public page
    pub active: bool,
}

impl Link {
    /// Create an active link with a fresh id
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            url: url.into(),
            active: true,
        }
    }
}

/// Ordered sequence of links with id-keyed editing
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LinkList {
    links: Vec<Link>,
}

impl LinkList {
    /// Create an empty sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// The starter sequence offered to a fresh page
    pub fn starter() -> Self {
        Self {
            links: vec![
                Link::new("My Website", "#"),
                Link::new("YouTube", "https://www.youtube.com"),
                Link::new("Instagram", "https://www.instagram.com"),
                Link::new("TikTok", "https://www.tiktok.com"),
                Link::new("X (Twitter)", "https://x.com"),
                Link::new("Telegram", "https://t.me"),
            ],
        }
    }

    /// Build a sequence from loaded links, enforcing id uniqueness
    ///
    /// Later duplicates of an already-seen id are dropped with a warning so
    /// the uniqueness invariant holds even over hand-edited storage.
    pub fn from_links(links: Vec<Link>) -> Self {
        let mut seen = Vec::with_capacity(links.len());
        let mut unique = Vec::with_capacity(links.len());
        for link in links {
            if seen.contains(&link.id) {
                log::warn!("Dropping link '{}' with duplicate id {}", link.title, link.id);
                continue;
            }
            seen.push(link.id);
            unique.push(link);
        }
        Self { links: unique }
    }

    /// Prepend a new empty link and return its id
    pub fn add(&mut self) -> LinkId {
        let link = Link::new("", "");
        let id = link.id;
        self.links.insert(0, link);
        id
    }

    /// Remove the link with the given id
    ///
    /// Returns the removed link, or `None` (a no-op) when the id is unknown.
    pub fn remove(&mut self, id: LinkId) -> Option<Link> {
        let index = self.links.iter().position(|l| l.id == id)?;
        Some(self.links.remove(index))
    }

    /// Move the element at `from` so it ends up at index `to`
    ///
    /// Splice semantics: the element is removed and reinserted at `to`,
    /// shifting the elements in between by one. `[A,B,C,D]` with
    /// `move_link(0, 2)` yields `[B,C,A,D]`. Equal indices are a no-op;
    /// out-of-bounds indices are a checked no-op returning `false`.
    pub fn move_link(&mut self, from: usize, to: usize) -> bool {
        if from >= self.links.len() || to >= self.links.len() {
            log::debug!(
                "Ignoring out-of-bounds reorder {} -> {} (len {})",
                from,
                to,
                self.links.len()
            );
            return false;
        }
        if from != to {
            let link = self.links.remove(from);
            self.links.insert(to, link);
        }
        true
    }

    /// Update a link's title
    pub fn set_title(&mut self, id: LinkId, title: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(link) => {
                link.title = title.into();
                true
            }
            None => false,
        }
    }

    /// Update a link's target URL (accepted as free text)
    pub fn set_url(&mut self, id: LinkId, url: impl Into<String>) -> bool {
        match self.get_mut(id) {
            Some(link) => {
                link.url = url.into();
                true
            }
            None => false,
        }
    }

    /// Toggle whether a link shows on the public page
    pub fn set_active(&mut self, id: LinkId, active: bool) -> bool {
        match self.get_mut(id) {
            Some(link) => {
                link.active = active;
                true
            }
            None => false,
        }
    }

    /// Get a link by id
    pub fn get(&self, id: LinkId) -> Option<&Link> {
        self.links.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: LinkId) -> Option<&mut Link> {
        self.links.iter_mut().find(|l| l.id == id)
    }

    /// Get the position of a link by id
    pub fn index_of(&self, id: LinkId) -> Option<usize> {
        self.links.iter().position(|l| l.id == id)
    }

    /// All links in order
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    pub fn iter(&self) -> impl Iterator<Item = &Link> {
        self.links.iter()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}
