use std::path::PathBuf;

use clap::{Parser, Subcommand};

use conj_cli::commands::{config_ops, conjugate_ops, dict_ops};
use conj_cli::trace_init::init_tracing;

#[derive(Parser)]
#[command(name = "conjtool", about = "Japanese conjugation dictionary tool")]
struct Cli {
    /// Write JSON-lines trace output to this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download the raw dictionary file
    Fetch {
        /// Dictionary source
        #[arg(long, default_value = "jmdict")]
        source: String,
        /// Download even if the file already exists
        #[arg(long)]
        force: bool,
        /// Output directory
        output_dir: String,
    },
    /// Conjugate a single headword
    Conjugate {
        /// Headword (dictionary form)
        word: String,
        /// Part-of-speech tag (v5b, v1, adj-i, ...)
        tag: String,
        /// Rule table TSV (default: embedded table)
        #[arg(long)]
        rules: Option<String>,
        /// Print the paradigm as JSON
        #[arg(long)]
        json: bool,
    },
    /// Conjugate a dictionary and export it as JSON sections
    Export {
        /// Dictionary source
        #[arg(long, default_value = "jmdict")]
        source: String,
        /// Rule table TSV (default: embedded table)
        #[arg(long)]
        rules: Option<String>,
        /// Settings TOML (default: embedded settings)
        #[arg(long)]
        settings: Option<String>,
        /// Dictionary file (gzip or plain XML)
        dict_file: String,
        /// Output directory
        out_dir: String,
    },
    /// Show the conjugation class and label of a part-of-speech tag
    Pos {
        /// Part-of-speech tag
        tag: String,
    },
    /// Export the embedded rule table as TSV
    RulesExport,
    /// Validate a rule table TSV file
    RulesValidate {
        /// Path to the TSV file
        file: String,
    },
    /// Export default settings as TOML
    SettingsExport,
    /// Validate a custom settings TOML file
    SettingsValidate {
        /// Path to the TOML file
        file: String,
    },
}

fn main() {
    let cli = Cli::parse();
    let _guard = init_tracing(cli.log_dir.as_deref());

    match cli.command {
        Command::Fetch {
            source,
            force,
            output_dir,
        } => dict_ops::fetch(&source, &output_dir, force),
        Command::Conjugate {
            word,
            tag,
            rules,
            json,
        } => conjugate_ops::conjugate_cmd(&word, &tag, rules.as_deref(), json),
        Command::Export {
            source,
            rules,
            settings,
            dict_file,
            out_dir,
        } => dict_ops::export(
            &source,
            &dict_file,
            &out_dir,
            rules.as_deref(),
            settings.as_deref(),
        ),
        Command::Pos { tag } => conjugate_ops::pos_cmd(&tag),
        Command::RulesExport => config_ops::rules_export(),
        Command::RulesValidate { file } => config_ops::rules_validate(&file),
        Command::SettingsExport => config_ops::settings_export(),
        Command::SettingsValidate { file } => config_ops::settings_validate(&file),
    }
}
