// ── Command-line front end ────────────────────────────────────────────────────
//
// Thin wrapper over the library: reads files (or stdin), prints the detected
// language, and exposes the extension table and picker list for scripting.
#![deny(unsafe_code)]

use std::{
    io::{self, Read},
    path::PathBuf,
    process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use hilite::{
    config::settings_dir, language_for_extension, list_all_languages, session::recent,
    Classifier, ClassifierConfig, LanguageId,
};

/// Guess the language of source files from their content
#[derive(Parser, Debug)]
#[command(name = "hilite", version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Print machine-readable JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Print internal definition names instead of display names
    #[arg(long, global = true)]
    id: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect the language of each file from its content (stdin if none)
    #[command(visible_alias = "c")]
    Classify(ClassifyArgs),

    /// Look up the language for each path by its extension
    Ext {
        #[arg(required = true)]
        paths: Vec<PathBuf>,
    },

    /// List every language offered in the picker
    Languages,

    /// Show or clear the recent-files list
    Recent {
        #[arg(long)]
        clear: bool,
    },
}

#[derive(Args, Debug)]
struct ClassifyArgs {
    files: Vec<PathBuf>,

    /// JSON file with classifier settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Characters sampled from the start of each file
    #[arg(long, env = "HILITE_SAMPLE_CAP")]
    sample_cap: Option<usize>,

    /// Minimum score for a confident verdict
    #[arg(long)]
    min_score: Option<i32>,

    /// Add the classified files to the recent-files list
    #[arg(long)]
    remember: bool,
}

impl ClassifyArgs {
    fn classifier(&self) -> hilite::Result<Classifier> {
        let mut config = match &self.config {
            Some(path) => ClassifierConfig::load(path)?,
            None => ClassifierConfig::default(),
        };
        if let Some(cap) = self.sample_cap {
            config.sample_cap = cap;
        }
        if let Some(min) = self.min_score {
            config.min_score = min;
        }
        Ok(Classifier::new(config.validate()?))
    }
}

#[derive(Serialize)]
struct Row {
    source: String,
    id: Option<String>,
    name: String,
}

impl Row {
    fn new(source: String, language: &LanguageId) -> Self {
        Self {
            source,
            id: language.definition_name().map(str::to_owned),
            name: language.display_name().to_owned(),
        }
    }

    fn label(&self, by_id: bool) -> &str {
        match (&self.id, by_id) {
            (Some(id), true) => id,
            _ => &self.name,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("hilite=warn")),
        )
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run() -> hilite::Result<()> {
    let cli = Cli::parse();

    let rows = match &cli.command {
        Command::Classify(args) => classify(args)?,
        Command::Ext { paths } => paths
            .iter()
            .map(|p| Row::new(p.display().to_string(), &language_for_extension(p)))
            .collect(),
        Command::Languages => list_all_languages()
            .into_iter()
            .map(|(name, id)| Row {
                source: String::new(),
                id,
                name,
            })
            .collect(),
        Command::Recent { clear } => return show_recent(*clear, cli.json),
    };

    print_rows(&rows, &cli)
}

fn classify(args: &ClassifyArgs) -> hilite::Result<Vec<Row>> {
    let classifier = args.classifier()?;

    if args.files.is_empty() {
        let mut content = String::new();
        io::stdin().read_to_string(&mut content)?;
        let language = LanguageId::from(classifier.classify(&content));
        return Ok(vec![Row::new("-".to_owned(), &language)]);
    }

    let mut rows = Vec::with_capacity(args.files.len());
    for path in &args.files {
        let bytes = std::fs::read(path)?;
        let content = String::from_utf8_lossy(&bytes);
        let language = LanguageId::from(classifier.classify(&content));
        rows.push(Row::new(path.display().to_string(), &language));
    }

    if args.remember {
        if let Some(dir) = settings_dir() {
            for path in &args.files {
                let absolute = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
                recent::add(&dir, &absolute.to_string_lossy());
            }
        }
    }
    Ok(rows)
}

fn show_recent(clear: bool, json: bool) -> hilite::Result<()> {
    let Some(dir) = settings_dir() else {
        return Ok(());
    };
    if clear {
        recent::clear(&dir);
        return Ok(());
    }
    let files = recent::load(&dir);
    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in files {
            println!("{file}");
        }
    }
    Ok(())
}

fn print_rows(rows: &[Row], cli: &Cli) -> hilite::Result<()> {
    if cli.json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }
    for row in rows {
        let label = row.label(cli.id);
        if row.source.is_empty() {
            println!("{label}");
        } else {
            println!("{}: {label}", row.source);
        }
    }
    Ok(())
}
