//! Content module - document model, defaults and the persisted store

mod default;
pub mod model;
pub mod store;

pub use default::default_content;
pub use model::{
    About, AboutStats, BlogPost, Category, Contacts, Hero, PortfolioImage, Review, Service,
    SiteContent, UnknownCategory,
};
pub use store::{ContentStore, FileStore, MemoryStore, CONTENT_FILE};
