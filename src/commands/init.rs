//! Initialize a new studio directory

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::config::StudioConfig;
use crate::content::{default_content, ContentStore, FileStore};

const DEFAULT_CSS: &str = r#"body {
  margin: 0;
  font-family: "Golos Text", system-ui, sans-serif;
  color: #1c1917;
}
.container { max-width: 1100px; margin: 0 auto; padding: 0 1rem; }
.hero { padding: 8rem 0 5rem; text-align: center; }
.badge { display: inline-block; padding: .25rem .75rem; border-radius: 999px; background: #f5f0ea; }
.cards { display: grid; grid-template-columns: repeat(auto-fit, minmax(240px, 1fr)); gap: 1.5rem; }
.card { border: 1px solid #e7e5e4; border-radius: 12px; padding: 1.5rem; }
.gallery { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1rem; }
.gallery-item img, .blog-card img { width: 100%; border-radius: 8px; }
.stats { display: flex; gap: 3rem; justify-content: center; }
.rating { color: #d4a373; }
"#;

/// Scaffold a studio directory: config, assets and the seeded content slot
pub fn init_studio(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("studio.yml");
    if config_path.exists() {
        anyhow::bail!("Already a studio directory: {:?}", target_dir);
    }

    fs::create_dir_all(target_dir)?;

    let config = StudioConfig::default();
    fs::write(&config_path, serde_yaml::to_string(&config)?)?;

    let css_dir = target_dir.join(&config.assets_dir).join("css");
    fs::create_dir_all(&css_dir)?;
    fs::write(css_dir.join("site.css"), DEFAULT_CSS)?;

    // Seed the slot so the first admin session edits the defaults it sees.
    FileStore::new(target_dir).save(&default_content())?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn init_scaffolds_config_assets_and_slot() {
        let dir = tempdir().unwrap();
        init_studio(dir.path()).unwrap();

        assert!(dir.path().join("studio.yml").exists());
        assert!(dir.path().join("assets/css/site.css").exists());

        let store = FileStore::new(dir.path());
        assert!(store.path().exists());
        assert_eq!(store.load(), default_content());
    }

    #[test]
    fn init_refuses_an_existing_studio() {
        let dir = tempdir().unwrap();
        init_studio(dir.path()).unwrap();
        assert!(init_studio(dir.path()).is_err());
    }
}
