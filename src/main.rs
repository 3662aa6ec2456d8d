//! CLI entry point for treels

use std::env;
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use treels::{DEFAULT_DOCUMENT, Detail, ListingConfig, OutputConfig, OutputMode, Settings};

/// When to color directory names
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
enum ColorMode {
    /// Decide from the environment and whether stdout is a terminal
    #[default]
    Auto,
    Always,
    Never,
}

/// The parts of the process environment that bear on coloring.
#[derive(Debug, Clone, Default)]
struct Terminal {
    no_color: bool,
    force_color: bool,
    dumb: bool,
    tty: bool,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            // https://no-color.org/
            no_color: env::var_os("NO_COLOR").is_some(),
            force_color: env::var_os("FORCE_COLOR").is_some(),
            dumb: env::var_os("TERM").is_some_and(|t| t == "dumb"),
            tty: io::stdout().is_terminal(),
        }
    }
}

impl ColorMode {
    /// NO_COLOR beats FORCE_COLOR, which beats a dumb terminal.
    fn enabled(self, term: &Terminal) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto if term.no_color => false,
            ColorMode::Auto if term.force_color => true,
            ColorMode::Auto => term.tty && !term.dumb,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "treels")]
#[command(about = "List the contents of a directory tree stored as JSON")]
#[command(version)]
struct Args {
    /// Path to a directory or file within the tree
    path: Option<String>,

    /// All entries, with hidden ones
    #[arg(short = 'A')]
    all: bool,

    /// Use a long listing format
    #[arg(short = 'l')]
    long: bool,

    /// Reverse the order
    #[arg(short = 'r')]
    reverse: bool,

    /// Sort by time (oldest first)
    #[arg(short = 't')]
    time: bool,

    /// Filter by type: dir or file
    #[arg(long = "filter", value_name = "TYPE")]
    filter: Option<String>,

    /// Output entries as JSON
    #[arg(long = "json", conflicts_with = "tree")]
    json: bool,

    /// Show the whole subtree
    #[arg(long = "tree")]
    tree: bool,

    /// Descend only N levels deep (with --tree)
    #[arg(short = 'L', long = "level", requires = "tree")]
    level: Option<usize>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Tree document to read
    #[arg(short = 'f', long = "file", value_name = "FILE", default_value = DEFAULT_DOCUMENT)]
    file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let settings = Settings {
        document: args.file,
        target: args.path.unwrap_or_default(),
    };

    let listing = ListingConfig {
        include_hidden: args.all,
        reverse: args.reverse,
        sort_by_time: args.time,
        type_filter: args.filter,
        detail: if args.long { Detail::Long } else { Detail::Brief },
    };

    let mode = if args.json {
        OutputMode::Json
    } else if args.tree {
        OutputMode::Tree
    } else {
        OutputMode::Lines
    };

    let output = OutputConfig {
        use_color: mode != OutputMode::Json && args.color.enabled(&Terminal::detect()),
        mode,
        max_depth: args.level,
    };

    if let Err(e) = treels::run(&settings, listing, &output) {
        eprintln!("treels: {}", e);
        process::exit(1);
    }
}
