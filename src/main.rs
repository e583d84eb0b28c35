use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell};
use spellmark::cli::output::{self, OutputFormat};
use spellmark::editor::HtmlBuffer;
use spellmark::settings::SettingsClient;
use spellmark::{dict, markup, CheckMode, Config, SpellChecker};
use std::fs;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "spellmark")]
#[command(version, about = "Spell-check and annotate rendered HTML documents", long_about = None)]
struct Cli {
    /// HTML document to check
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Compute suggestions for misspelled words (slower)
    #[arg(short, long)]
    suggest: bool,

    /// Write the annotated document back in place
    #[arg(short, long)]
    annotate: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if misspellings are found
    #[arg(long)]
    no_fail: bool,

    /// Language/dictionary to use (e.g., en_US, en_GB)
    #[arg(short, long, default_value = "en_US")]
    language: String,

    /// Output format (text, json)
    #[arg(short = 'o', long, default_value = "text")]
    format: OutputFormat,

    /// Compiled dictionary file
    #[arg(long)]
    dictionary: Option<PathBuf>,

    /// Base URL of the user-settings service (custom word list)
    #[arg(long)]
    settings_url: Option<String>,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Parser, Debug)]
enum Commands {
    /// Remove every annotation marker from a document, in place
    Strip {
        /// Annotated HTML document
        file: PathBuf,
    },
    /// Add a word to the user's custom dictionary
    AddWord {
        /// Word to accept from now on
        word: String,
    },
    /// Dictionary management
    Dict {
        #[command(subcommand)]
        action: DictCommands,
    },
}

#[derive(Parser, Debug)]
enum DictCommands {
    /// List installed dictionaries
    List,
    /// Build the dictionary from the configured word-list resource
    Fetch,
    /// Show dictionary info
    Info,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "spellmark", &mut io::stdout());
        return Ok(());
    }

    let config = Config::load(
        cli.language.clone(),
        cli.dictionary.clone(),
        cli.settings_url.clone(),
    )?;

    if let Some(command) = cli.command {
        return handle_command(command, &config);
    }

    let Some(file) = &cli.file else {
        anyhow::bail!("No document specified. Use --help for usage information.");
    };

    let mut checker = SpellChecker::new(&config)?;

    // User's custom words override the base dictionary for this run.
    // A failed fetch degrades to an empty augmentation set.
    if let Some(url) = &config.settings_url {
        let client = SettingsClient::new(url)?;
        checker.augment(client.fetch_custom_words());
    }

    let content = fs::read_to_string(file)
        .with_context(|| format!("Failed to read document: {}", file.display()))?;

    let mode = if cli.suggest {
        CheckMode::Slow
    } else {
        CheckMode::Fast
    };

    let mut editor = HtmlBuffer::new(content);
    let outcome = checker.check_document(&mut editor, mode);

    output::print_report(file, &outcome, !cli.no_color, &cli.format);
    output::print_summary(outcome.misspelled.len(), !cli.no_color);

    if cli.annotate && !outcome.is_clean() {
        fs::write(file, editor.into_content())
            .with_context(|| format!("Failed to write document: {}", file.display()))?;
    }

    if !outcome.is_clean() && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Strip { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read document: {}", file.display()))?;
            let stripped = markup::strip(&content);
            fs::write(&file, stripped)
                .with_context(|| format!("Failed to write document: {}", file.display()))?;
        }
        Commands::AddWord { word } => {
            let url = config
                .settings_url
                .as_deref()
                .context("No settings service configured; set `settings_url`.")?;
            SettingsClient::new(url)?.add_word(&word)?;
            println!("Added \"{}\" to the custom dictionary.", word);
        }
        Commands::Dict { action } => match action {
            DictCommands::List => dict::manager::list_dictionaries()?,
            DictCommands::Fetch => dict::manager::fetch_dictionary(config)?,
            DictCommands::Info => dict::manager::show_info(config)?,
        },
    }
    Ok(())
}
