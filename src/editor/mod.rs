//! Admin editor - the in-memory working copy of the content document
//!
//! The editor owns a working copy loaded from the store at construction and
//! mutates only that copy. Nothing reaches the persisted slot until an
//! explicit `commit`; in particular a delete that is never followed by a
//! commit is discarded when the editor goes away. That matches the observed
//! behavior of the original tool and is kept deliberately.

use anyhow::Result;
use chrono::Utc;

use crate::content::{
    default_content, About, BlogPost, Contacts, ContentStore, Hero, PortfolioImage, Review,
    Service, SiteContent,
};

/// Mints list-entry ids from the wall clock
///
/// Ids are millisecond timestamps rendered as decimal strings. When the
/// clock has not advanced past the previously issued token the mint bumps by
/// one, so ids stay strictly increasing and are never reused within a
/// session.
#[derive(Debug, Default)]
pub struct IdMint {
    last: i64,
}

impl IdMint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next(&mut self) -> String {
        let now = Utc::now().timestamp_millis();
        self.last = now.max(self.last + 1);
        self.last.to_string()
    }
}

/// Editing session over a working copy of the site document
pub struct Editor<S: ContentStore> {
    store: S,
    content: SiteContent,
    baseline: SiteContent,
    mint: IdMint,
}

/// Outcome of an upsert, for user-facing reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Created,
    Updated,
}

impl<S: ContentStore> Editor<S> {
    /// Start a session with a working copy loaded from the store
    pub fn new(store: S) -> Self {
        let content = store.load();
        Self {
            baseline: content.clone(),
            content,
            store,
            mint: IdMint::new(),
        }
    }

    /// The current working copy
    pub fn content(&self) -> &SiteContent {
        &self.content
    }

    /// Whether the working copy differs from the last loaded/committed state
    pub fn is_dirty(&self) -> bool {
        self.content != self.baseline
    }

    /// Write the entire working copy to the store
    pub fn commit(&mut self) -> Result<()> {
        self.store.save(&self.content)?;
        self.baseline = self.content.clone();
        Ok(())
    }

    /// Replace both the working copy and the persisted slot with the
    /// hard-coded default document. The confirmation gate lives in the CLI.
    pub fn reset(&mut self) -> Result<()> {
        self.content = default_content();
        self.store.save(&self.content)?;
        self.baseline = self.content.clone();
        Ok(())
    }

    // Per-list contract: an item with an empty id (or an id matching no
    // existing entry) is appended with a freshly minted id; an item whose id
    // matches an existing entry replaces it in place, order preserved.

    pub fn upsert_service(&mut self, mut item: Service) -> Upsert {
        if let Some(slot) = self.content.services.iter_mut().find(|s| s.id == item.id) {
            *slot = item;
            return Upsert::Updated;
        }
        item.id = self.mint.next();
        self.content.services.push(item);
        Upsert::Created
    }

    pub fn upsert_review(&mut self, mut item: Review) -> Upsert {
        if let Some(slot) = self.content.reviews.iter_mut().find(|r| r.id == item.id) {
            *slot = item;
            return Upsert::Updated;
        }
        item.id = self.mint.next();
        self.content.reviews.push(item);
        Upsert::Created
    }

    pub fn upsert_blog_post(&mut self, mut item: BlogPost) -> Upsert {
        if let Some(slot) = self.content.blog_posts.iter_mut().find(|p| p.id == item.id) {
            *slot = item;
            return Upsert::Updated;
        }
        item.id = self.mint.next();
        self.content.blog_posts.push(item);
        Upsert::Created
    }

    pub fn upsert_portfolio_image(&mut self, mut item: PortfolioImage) -> Upsert {
        if let Some(slot) = self
            .content
            .portfolio_images
            .iter_mut()
            .find(|i| i.id == item.id)
        {
            *slot = item;
            return Upsert::Updated;
        }
        item.id = self.mint.next();
        self.content.portfolio_images.push(item);
        Upsert::Created
    }

    // Deletes mutate the working copy only; returns whether an entry matched.

    pub fn delete_service(&mut self, id: &str) -> bool {
        let before = self.content.services.len();
        self.content.services.retain(|s| s.id != id);
        self.content.services.len() != before
    }

    pub fn delete_review(&mut self, id: &str) -> bool {
        let before = self.content.reviews.len();
        self.content.reviews.retain(|r| r.id != id);
        self.content.reviews.len() != before
    }

    pub fn delete_blog_post(&mut self, id: &str) -> bool {
        let before = self.content.blog_posts.len();
        self.content.blog_posts.retain(|p| p.id != id);
        self.content.blog_posts.len() != before
    }

    pub fn delete_portfolio_image(&mut self, id: &str) -> bool {
        let before = self.content.portfolio_images.len();
        self.content.portfolio_images.retain(|i| i.id != id);
        self.content.portfolio_images.len() != before
    }

    // Singleton substructures are edited by direct field replacement.

    pub fn hero_mut(&mut self) -> &mut Hero {
        &mut self.content.hero
    }

    pub fn about_mut(&mut self) -> &mut About {
        &mut self.content.about
    }

    pub fn contacts_mut(&mut self) -> &mut Contacts {
        &mut self.content.contacts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::MemoryStore;

    fn service(id: &str, title: &str) -> Service {
        Service {
            id: id.to_string(),
            title: title.to_string(),
            price: "10000".to_string(),
            duration: "2h".to_string(),
            description: "x".to_string(),
            icon: "Camera".to_string(),
        }
    }

    #[test]
    fn mint_is_strictly_increasing() {
        let mut mint = IdMint::new();
        let ids: Vec<String> = (0..100).map(|_| mint.next()).collect();
        for pair in ids.windows(2) {
            let a: i64 = pair[0].parse().unwrap();
            let b: i64 = pair[1].parse().unwrap();
            assert!(b > a);
        }
    }

    #[test]
    fn empty_id_creates_and_appends_last() {
        let mut editor = Editor::new(MemoryStore::new());
        let before = editor.content().services.clone();

        let outcome = editor.upsert_service(service("", "Video"));
        assert_eq!(outcome, Upsert::Created);

        let services = &editor.content().services;
        assert_eq!(services.len(), before.len() + 1);
        assert_eq!(&services[..before.len()], &before[..]);

        let added = services.last().unwrap();
        assert_eq!(added.title, "Video");
        assert!(!added.id.is_empty());
        assert!(services[..before.len()].iter().all(|s| s.id != added.id));
    }

    #[test]
    fn matching_id_updates_in_place() {
        let mut editor = Editor::new(MemoryStore::new());
        let target = editor.content().services[1].id.clone();
        let others: Vec<_> = editor
            .content()
            .services
            .iter()
            .filter(|s| s.id != target)
            .cloned()
            .collect();

        let outcome = editor.upsert_service(service(&target, "Переименовано"));
        assert_eq!(outcome, Upsert::Updated);

        let services = &editor.content().services;
        assert_eq!(services.len(), 4);
        assert_eq!(services[1].id, target);
        assert_eq!(services[1].title, "Переименовано");
        let rest: Vec<_> = services.iter().filter(|s| s.id != target).cloned().collect();
        assert_eq!(rest, others);
    }

    #[test]
    fn unknown_id_falls_through_to_create() {
        let mut editor = Editor::new(MemoryStore::new());
        editor.upsert_service(service("does-not-exist", "Orphan"));
        let added = editor.content().services.last().unwrap();
        assert_eq!(added.title, "Orphan");
        assert_ne!(added.id, "does-not-exist");
    }

    #[test]
    fn delete_removes_exactly_one_and_needs_commit_to_persist() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        let target = editor.content().reviews[0].id.clone();
        let remaining: Vec<_> = editor.content().reviews[1..].to_vec();

        assert!(editor.delete_review(&target));
        assert_eq!(editor.content().reviews, remaining);
        assert!(!editor.delete_review(&target));

        // Not committed: a fresh read still sees the deleted entry.
        assert_eq!(store.load().reviews.len(), 3);

        editor.commit().unwrap();
        assert_eq!(store.load().reviews, remaining);
    }

    #[test]
    fn commit_writes_whole_working_copy() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        editor.hero_mut().title = "Другой заголовок".to_string();
        editor.upsert_service(service("", "Video"));
        assert!(editor.is_dirty());

        editor.commit().unwrap();
        assert!(!editor.is_dirty());

        let persisted = store.load();
        assert_eq!(persisted.hero.title, "Другой заголовок");
        assert_eq!(persisted.services.len(), 5);
        assert_eq!(persisted, *editor.content());
    }

    #[test]
    fn reset_restores_defaults_everywhere() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        editor.contacts_mut().email = "other@example.com".to_string();
        let first = editor.content().services[0].id.clone();
        editor.delete_service(&first);
        editor.commit().unwrap();

        editor.reset().unwrap();
        assert_eq!(*editor.content(), crate::content::default_content());
        assert_eq!(store.load(), crate::content::default_content());
        assert!(!editor.is_dirty());
    }

    #[test]
    fn spec_scenario_add_video_service() {
        let store = MemoryStore::new();
        let mut editor = Editor::new(&store);
        editor.upsert_service(service("", "Video"));
        editor.commit().unwrap();

        let persisted = store.load();
        assert_eq!(persisted.services.len(), 5);
        let last = persisted.services.last().unwrap();
        assert_eq!(last.title, "Video");
        assert!(!last.id.is_empty());
    }
}
