//! mkdiary CLI tool
//!
//! Resolves compact date arguments into a diary entry path, creates the
//! directories it needs, and opens it in an editor.

use chrono::Local;
use clap::Parser;
use std::path::PathBuf;
use std::process;

use mkdiary::{config, entry, open};

/// mkdiary - Open diary entries by date
#[derive(Parser)]
#[command(name = "mkdiary")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # Open today's entry
    mkdiary

    # Open the entry three days from now
    mkdiary +3d

    # Open this month's directory
    mkdiary ..

    # Open a specific entry
    mkdiary 2023 12 24

    # Same month last year (. is today's value of a field, +/- offsets it)
    mkdiary -1 .

    # Print the resolved path instead of opening an editor
    mkdiary --print 2023 12")]
struct Cli {
    /// Date arguments: empty for today; `.`, `..`, `...` for this year, month,
    /// or day; `+3d`/`-10d` for a day offset; or year [month [day]]
    #[arg(allow_hyphen_values = true)]
    date: Vec<String>,

    /// Diary base directory (overrides the config file)
    #[arg(long)]
    base_dir: Option<PathBuf>,

    /// Entry file extension, starting with a dot (overrides the config file)
    #[arg(long)]
    ext: Option<String>,

    /// Editor command (overrides the config file and $VISUAL/$EDITOR)
    #[arg(long)]
    editor: Option<String>,

    /// Resolve and create the entry path, print it, and exit without opening
    /// an editor
    #[arg(long)]
    print: bool,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let mut config = config::read();
    if let Some(base_dir) = cli.base_dir {
        config.base_dir = base_dir;
    }
    if let Some(ext) = cli.ext {
        config.file_ext = ext;
    }
    if let Some(editor) = cli.editor {
        config.editor = Some(editor);
    }

    // Parse first: a bad date argument must not touch the filesystem
    let tokens: Vec<&str> = cli.date.iter().map(String::as_str).collect();
    let entry = entry::parse(&tokens, Local::now().date_naive())?;

    let full_path = open::prepare(&entry, &config.base_dir, &config.file_ext)?;

    if cli.print {
        println!("{}", full_path.display());
        return Ok(());
    }

    let editor = open::editor_command(config.editor.as_deref());
    open::open_in_editor(&full_path, &config.base_dir, &editor)?;

    Ok(())
}
