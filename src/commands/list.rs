//! List site content from the persisted document

use anyhow::Result;

use crate::content::ContentStore;
use crate::Studio;

/// Print the current document's lists by kind
pub fn run(studio: &Studio, kind: &str) -> Result<()> {
    let content = studio.store().load();

    match kind {
        "services" | "service" => {
            println!("Услуги ({}):", content.services.len());
            for s in &content.services {
                println!("  {} - {} ({}, {})", s.id, s.title, s.price, s.duration);
            }
        }
        "reviews" | "review" => {
            println!("Отзывы ({}):", content.reviews.len());
            for r in &content.reviews {
                println!("  {} - {} [{}/5] {}", r.id, r.name, r.rating, r.text);
            }
        }
        "posts" | "post" | "blog" => {
            println!("Статьи ({}):", content.blog_posts.len());
            for p in &content.blog_posts {
                println!("  {} - {} ({})", p.id, p.title, p.date);
            }
        }
        "portfolio" | "images" | "image" => {
            println!("Портфолио ({}):", content.portfolio_images.len());
            for i in &content.portfolio_images {
                println!("  {} - {} [{}] {}", i.id, i.title, i.category, i.url);
            }
        }
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: services, reviews, posts, portfolio",
                kind
            );
        }
    }

    Ok(())
}
