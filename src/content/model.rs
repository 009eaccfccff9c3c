//! Site content document and its entities
//!
//! `SiteContent` is the single root document the whole application shares:
//! the admin editor mutates a working copy of it and the public page renders
//! it. Field names in the serialized form match the JSON payloads written by
//! earlier versions of the site, so an existing persisted slot keeps parsing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A bookable service with display pricing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Service {
    /// Unique id within the services list; empty on a not-yet-saved item
    pub id: String,
    pub title: String,
    /// Display price, free text ("от 5 000 ₽")
    pub price: String,
    /// Display duration, free text ("1-2 часа")
    pub duration: String,
    pub description: String,
    /// Lookup key into the external icon catalog
    pub icon: String,
}

/// A customer review
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub name: String,
    pub text: String,
    /// 1 to 5; the UI input constrains the range, the model does not
    pub rating: u8,
}

/// A blog entry; `date` is an opaque display string, never parsed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub date: String,
    pub excerpt: String,
    pub image: String,
}

/// Portfolio gallery category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Portrait,
    Wedding,
    Product,
    #[default]
    All,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Portrait,
        Category::Wedding,
        Category::Product,
        Category::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Portrait => "portrait",
            Category::Wedding => "wedding",
            Category::Product => "product",
            Category::All => "all",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for category values outside the closed set
#[derive(Debug, thiserror::Error)]
#[error("unknown category: {0} (expected portrait, wedding, product or all)")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "portrait" => Ok(Category::Portrait),
            "wedding" => Ok(Category::Wedding),
            "product" => Ok(Category::Product),
            "all" => Ok(Category::All),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// An image in the portfolio gallery
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PortfolioImage {
    pub id: String,
    pub url: String,
    pub category: Category,
    pub title: String,
}

/// Studio contact details (singleton substructure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contacts {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub hours: String,
}

/// Hero section text (singleton substructure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub badge: String,
    pub title: String,
    pub subtitle: String,
}

/// Headline statistics shown in the about section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutStats {
    pub years: String,
    pub shoots: String,
    pub satisfaction: String,
}

/// About section (singleton substructure)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct About {
    pub description: String,
    pub stats: AboutStats,
}

/// The root content document
///
/// Always fully populated: every substructure exists even when individual
/// text fields are empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    pub services: Vec<Service>,
    pub reviews: Vec<Review>,
    #[serde(rename = "blogPosts")]
    pub blog_posts: Vec<BlogPost>,
    #[serde(rename = "portfolioImages")]
    pub portfolio_images: Vec<PortfolioImage>,
    pub contacts: Contacts,
    pub hero: Hero,
    pub about: About,
}

impl SiteContent {
    /// Portfolio images visible under a gallery tab
    pub fn portfolio_in(&self, category: Category) -> Vec<&PortfolioImage> {
        self.portfolio_images
            .iter()
            .filter(|img| category == Category::All || img.category == category)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_lowercase() {
        for cat in Category::ALL {
            let json = serde_json::to_string(&cat).unwrap();
            assert_eq!(json, format!("\"{}\"", cat.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, cat);
        }
    }

    #[test]
    fn category_rejects_unknown_values() {
        assert!("landscape".parse::<Category>().is_err());
        assert!(serde_json::from_str::<Category>("\"landscape\"").is_err());
    }

    #[test]
    fn document_uses_original_field_names() {
        let doc = crate::content::default_content();
        let value = serde_json::to_value(&doc).unwrap();
        assert!(value.get("blogPosts").is_some());
        assert!(value.get("portfolioImages").is_some());
        assert!(value.get("blog_posts").is_none());
    }

    #[test]
    fn portfolio_filter_honors_all() {
        let doc = crate::content::default_content();
        assert_eq!(
            doc.portfolio_in(Category::All).len(),
            doc.portfolio_images.len()
        );
        for img in doc.portfolio_in(Category::Wedding) {
            assert_eq!(img.category, Category::Wedding);
        }
    }
}
