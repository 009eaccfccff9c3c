//! Reset the content document to the hard-coded defaults

use anyhow::Result;
use std::io::{self, BufRead, Write};

use crate::content::{default_content, ContentStore};
use crate::Studio;

/// Overwrite the persisted slot with the default document, gated by a
/// confirmation prompt unless `yes` is set.
pub fn run(studio: &Studio, yes: bool) -> Result<()> {
    if !yes && !confirm_on_stdin()? {
        println!("Отменено");
        return Ok(());
    }

    studio.store().save(&default_content())?;
    println!("Настройки сброшены");
    Ok(())
}

fn confirm_on_stdin() -> Result<bool> {
    print!("Сбросить все изменения к начальным настройкам? (y/N): ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y"))
}
