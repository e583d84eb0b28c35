use crate::CheckOutcome;
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonMisspelling {
    word: String,
    suggestion: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct JsonReport {
    document: String,
    total: usize,
    misspellings: Vec<JsonMisspelling>,
}

pub fn print_report(
    document: &Path,
    outcome: &CheckOutcome,
    colored_output: bool,
    format: &OutputFormat,
) {
    match format {
        OutputFormat::Text => print_text_report(document, outcome, colored_output),
        OutputFormat::Json => print_json_report(document, outcome),
    }
}

fn print_text_report(document: &Path, outcome: &CheckOutcome, colored_output: bool) {
    if outcome.is_clean() {
        return;
    }

    let name = document.display().to_string();
    if colored_output {
        println!("\n{}", name.bold().underline());
    } else {
        println!("\n{}", name);
    }

    for word in &outcome.misspelled {
        let suggestion = outcome.suggestion_for(word);

        if colored_output {
            if suggestion.is_empty() {
                println!("  {}", word.red().bold());
            } else {
                println!("  {} {} {}", word.red().bold(), "→".dimmed(), suggestion.green());
            }
        } else if suggestion.is_empty() {
            println!("  {}", word);
        } else {
            println!("  {} → {}", word, suggestion);
        }
    }
}

fn print_json_report(document: &Path, outcome: &CheckOutcome) {
    let misspellings: Vec<JsonMisspelling> = outcome
        .misspelled
        .iter()
        .map(|word| JsonMisspelling {
            word: word.clone(),
            suggestion: outcome.suggestion_for(word).to_string(),
        })
        .collect();

    let report = JsonReport {
        document: document.display().to_string(),
        total: misspellings.len(),
        misspellings,
    };

    match serde_json::to_string_pretty(&report) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize report: {}", e),
    }
}

pub fn print_summary(total_misspelled: usize, colored: bool) {
    println!();
    if total_misspelled == 0 {
        if colored {
            println!("{}", "✓ No spelling errors found!".green().bold());
        } else {
            println!("✓ No spelling errors found!");
        }
    } else {
        let noun = if total_misspelled == 1 { "word" } else { "words" };
        if colored {
            println!(
                "{} {} misspelled {}",
                "✗".red().bold(),
                total_misspelled.to_string().red().bold(),
                noun
            );
        } else {
            println!("✗ {} misspelled {}", total_misspelled, noun);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("text".parse(), Ok(OutputFormat::Text)));
        assert!(matches!("JSON".parse(), Ok(OutputFormat::Json)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }
}
