//! Public page templates using the Tera template engine
//!
//! All templates are embedded directly in the binary; rendering is a pure
//! function of the content document and the studio config.

use anyhow::Result;
use std::collections::HashMap;
use tera::{Context, Tera, Value};

use crate::config::StudioConfig;
use crate::content::{Category, SiteContent};

/// Template renderer with the embedded studio theme
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all studio templates loaded
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();

        tera.add_raw_templates(vec![
            ("layout.html", include_str!("studio/layout.html")),
            ("index.html", include_str!("studio/index.html")),
        ])?;

        tera.register_filter("stars", stars_filter);
        tera.register_filter("category_label", category_label_filter);

        Ok(Self { tera })
    }

    /// Render the public page from the current document
    pub fn render_index(&self, config: &StudioConfig, content: &SiteContent) -> Result<String> {
        let mut ctx = Context::new();
        ctx.insert("site_title", &config.title);
        ctx.insert("language", &config.language);
        ctx.insert("content", content);

        let categories: Vec<&str> = Category::ALL.iter().map(|c| c.as_str()).collect();
        ctx.insert("categories", &categories);

        Ok(self.tera.render("index.html", &ctx)?)
    }
}

/// `rating | stars` renders a 1-5 rating as filled/empty stars
fn stars_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let rating = value.as_u64().unwrap_or(0).min(5) as usize;
    let rendered = "★".repeat(rating) + &"☆".repeat(5 - rating);
    Ok(Value::String(rendered))
}

/// Russian display label for a gallery category key
fn category_label_filter(value: &Value, _: &HashMap<String, Value>) -> tera::Result<Value> {
    let label = match value.as_str() {
        Some("portrait") => "Портрет",
        Some("wedding") => "Свадьба",
        Some("product") => "Предметка",
        Some("all") => "Все",
        _ => return Err(tera::Error::msg("category_label expects a category key")),
    };
    Ok(Value::String(label.to_string()))
}
