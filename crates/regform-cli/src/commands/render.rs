use anyhow::{Context, Result};
use colored::Colorize;
use regform::{render_page, Config, FormState};
use std::fs;
use std::path::Path;

pub fn execute(config: &Config, out: Option<&Path>, no_script: bool) -> Result<()> {
    let mut page = config.page.clone();
    if no_script {
        page.client_validation = false;
    }

    let html = render_page(&FormState::new(), &page).into_string();

    match out {
        Some(path) => {
            fs::write(path, &html).with_context(|| format!("Failed to write page: {:?}", path))?;
            tracing::debug!("wrote {} bytes", html.len());
            println!("{} {}", "✓".green(), path.display());
            if page.client_validation {
                println!(
                    "  {} serve the wasm-pack output so {} resolves",
                    "ℹ".cyan(),
                    page.script
                );
            }
        }
        None => println!("{}", html),
    }

    Ok(())
}
