use crate::config::Config;
use anyhow::{Context, Result};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::Path;

// Pinned commit so a re-fetch always yields the same word list.
const WORDLIST_BASE_URL: &str =
    "https://raw.githubusercontent.com/dwyl/english-words/6e4bc58ad764c3e6df8b5be4048671962c9d6a23";

pub fn list_dictionaries() -> Result<()> {
    let data_dir = Config::data_dir().context("Failed to get data directory")?;

    if !data_dir.exists() {
        println!("{}", "No dictionaries installed.".yellow());
        println!(
            "Run {} to fetch one.",
            "spellmark dict fetch".cyan()
        );
        return Ok(());
    }

    println!("{}", "Installed dictionaries:".bold());
    println!();

    let mut found_any = false;
    for entry in fs::read_dir(&data_dir)? {
        let path = entry?.path();

        if path.extension().and_then(|s| s.to_str()) == Some("dict") {
            found_any = true;
            let language = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("unknown");

            let size_kb = fs::metadata(&path)?.len() / 1024;
            println!(
                "  {} {} ({})",
                "✓".green(),
                language.cyan().bold(),
                format!("{}KB", size_kb).dimmed()
            );
        }
    }

    if !found_any {
        println!("{}", "No dictionaries found.".yellow());
    }

    println!();
    println!(
        "Data directory: {}",
        data_dir.display().to_string().dimmed()
    );

    Ok(())
}

/// Build the compiled dictionary from the configured word-list resource:
/// a local file path, or a URL to download from. With no resource
/// configured, English falls back to a pinned public word list.
pub fn fetch_dictionary(config: &Config) -> Result<()> {
    let resource = match &config.wordlist {
        Some(resource) => resource.clone(),
        None if config.language.starts_with("en") => {
            format!("{}/words_alpha.txt", WORDLIST_BASE_URL)
        }
        None => anyhow::bail!(
            "No word-list resource configured for '{}'. Set `wordlist` in the config.",
            config.language
        ),
    };

    println!(
        "{} dictionary for {}...",
        "Building".cyan().bold(),
        config.language.yellow()
    );
    println!("Source: {}", resource.dimmed());

    let content = if resource.starts_with("http://") || resource.starts_with("https://") {
        download_wordlist(&resource)?
    } else {
        fs::read_to_string(Path::new(&resource))
            .with_context(|| format!("Failed to read word list: {}", resource))?
    };

    let words: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|line| !line.is_empty() && line.len() > 1)
        .collect();

    println!("Found {} words", words.len().to_string().yellow());

    let dict_path = config.dictionary_path()?;
    if let Some(parent) = dict_path.parent() {
        fs::create_dir_all(parent).context("Failed to create data directory")?;
    }
    crate::checker::dictionary::Dictionary::build_from_words(&words, &dict_path)?;

    println!(
        "{} Dictionary installed: {}",
        "✓".green().bold(),
        dict_path.display().to_string().cyan()
    );

    Ok(())
}

fn download_wordlist(url: &str) -> Result<String> {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        pb.set_style(style);
    }
    pb.set_message("Downloading...");

    let response = reqwest::blocking::get(url).context("Failed to download word list")?;
    if !response.status().is_success() {
        anyhow::bail!("Failed to download word list: HTTP {}", response.status());
    }

    let content = response.text()?;
    pb.finish_with_message("Download complete");
    Ok(content)
}

pub fn show_info(config: &Config) -> Result<()> {
    let dict_path = config.dictionary_path()?;

    if !dict_path.exists() {
        println!(
            "{} Dictionary for {} not found.",
            "✗".red().bold(),
            config.language.yellow()
        );
        println!("Run {} to build it.", "spellmark dict fetch".cyan());
        return Ok(());
    }

    let metadata = fs::metadata(&dict_path)?;

    println!("{}", format!("Dictionary: {}", config.language).bold());
    println!("  Path: {}", dict_path.display());
    println!("  Size: {} KB", metadata.len() / 1024);
    println!("  Format: FST (Finite State Transducer)");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_from_local_wordlist() {
        let dir = tempdir().unwrap();
        let list_path = dir.path().join("words.txt");
        fs::write(&list_path, "hello\nworld\nx\n").unwrap();

        let config = Config {
            wordlist: Some(list_path.display().to_string()),
            dictionary: Some(dir.path().join("en_US.dict")),
            ..Default::default()
        };

        fetch_dictionary(&config).unwrap();

        let dict =
            crate::checker::dictionary::Dictionary::load_from_path(&config.dictionary_path().unwrap())
                .unwrap();
        assert!(dict.check_word("hello"));
        // Single characters are filtered out of the word list.
        assert!(!dict.check_word("x"));
    }

    #[test]
    fn test_fetch_without_resource_for_unknown_language_fails() {
        let config = Config {
            language: "xx_XX".to_string(),
            ..Default::default()
        };
        assert!(fetch_dictionary(&config).is_err());
    }
}
