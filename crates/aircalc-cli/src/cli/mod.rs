//! CLI argument definitions using the clap derive API.
//!
//! Argument names, help text and value enums live here. No pricing logic.

use clap::{Args, Parser, Subcommand, ValueEnum};

use aircalc_core::domain::Insolation;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "aircalc",
    bin_name = "aircalc",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Air-conditioning installation price calculator",
    long_about = "Aircalc prices air-conditioning installation jobs from a \
                  service catalog and keeps a host form up to date with the \
                  running total.",
    after_help = "EXAMPLES:\n\
        \x20 aircalc quote --qty 1=1 --qty 7=4\n\
        \x20 aircalc catalog --categorized\n\
        \x20 aircalc session\n\
        \x20 aircalc room --area 20 --height 2.7 --insolation strong",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Price a set of quantities in one go.
    #[command(
        visible_alias = "q",
        about = "Price a set of services",
        after_help = "EXAMPLES:\n\
            \x20 aircalc quote --qty 1=1\n\
            \x20 aircalc quote --qty 1=2 --qty 10=15 --format json"
    )]
    Quote(QuoteArgs),

    /// Show the service catalog.
    #[command(
        visible_alias = "ls",
        about = "Show the service catalog",
        after_help = "EXAMPLES:\n\
            \x20 aircalc catalog\n\
            \x20 aircalc catalog --categorized\n\
            \x20 aircalc catalog --format json"
    )]
    Catalog(CatalogArgs),

    /// Interactive calculator reading commands from stdin.
    #[command(
        about = "Start an interactive calculator session",
        after_help = "COMMANDS (one per line):\n\
            \x20 set ID VALUE   set a quantity (0 removes the service)\n\
            \x20 inc ID         add one\n\
            \x20 dec ID         remove one\n\
            \x20 clear          reset every quantity\n\
            \x20 show           print the current summary\n\
            \x20 help           list commands\n\
            \x20 quit           leave the session"
    )]
    Session(SessionArgs),

    /// Submit room parameters for a capacity calculation.
    #[command(
        about = "Submit room parameters",
        after_help = "EXAMPLES:\n\
            \x20 aircalc room --area 20 --height 2.7\n\
            \x20 aircalc room --area 35 --height 3 --insolation strong --mansard"
    )]
    Room(RoomArgs),

    /// Initialise an Aircalc configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 aircalc init                     # default location\n\
            \x20 aircalc init --force             # overwrite\n\
            \x20 aircalc -c ./aircalc.toml init   # explicit path"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 aircalc completions bash > ~/.local/share/bash-completion/completions/aircalc\n\
            \x20 aircalc completions zsh  > ~/.zfunc/_aircalc\n\
            \x20 aircalc completions fish > ~/.config/fish/completions/aircalc.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Aircalc configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 aircalc config get display.currency\n\
            \x20 aircalc config list\n\
            \x20 aircalc config path"
    )]
    Config(ConfigCommands),
}

// ── quote ─────────────────────────────────────────────────────────────────────

/// Arguments for `aircalc quote`.
#[derive(Debug, Args)]
pub struct QuoteArgs {
    /// Quantity for one service, as `ID=VALUE`. Repeatable.
    ///
    /// VALUE is read the way a form field is: leading digits count,
    /// anything else becomes 0.
    #[arg(
        long = "qty",
        value_name = "ID=VALUE",
        value_parser = parse_qty_arg,
        help = "Service quantity as ID=VALUE (repeatable)"
    )]
    pub quantities: Vec<QtyArg>,

    #[arg(short = 'f', long = "format", value_enum, help = "Output format")]
    pub format: Option<ViewFormat>,
}

/// One `ID=VALUE` pair from the command line. The value stays raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QtyArg {
    pub id: String,
    pub value: String,
}

fn parse_qty_arg(raw: &str) -> Result<QtyArg, String> {
    match raw.split_once('=') {
        Some((id, value)) if !id.trim().is_empty() => Ok(QtyArg {
            id: id.trim().to_string(),
            value: value.to_string(),
        }),
        _ => Err(format!("expected ID=VALUE, got '{raw}'")),
    }
}

// ── catalog ───────────────────────────────────────────────────────────────────

/// Arguments for `aircalc catalog`.
#[derive(Debug, Args)]
pub struct CatalogArgs {
    /// Group services into installation / maintenance / construction / other.
    #[arg(long = "categorized", help = "Group services by category")]
    pub categorized: bool,

    #[arg(short = 'f', long = "format", value_enum, help = "Output format")]
    pub format: Option<ViewFormat>,
}

/// Per-command rendering. Falls back to `--output-format` when omitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum ViewFormat {
    Table,
    Json,
}

// ── session ───────────────────────────────────────────────────────────────────

/// Arguments for `aircalc session`.
#[derive(Debug, Args)]
pub struct SessionArgs {
    /// Don't print the prompt (for piping commands in).
    #[arg(long = "no-prompt", help = "Do not print a prompt")]
    pub no_prompt: bool,
}

// ── room ──────────────────────────────────────────────────────────────────────

/// Arguments for `aircalc room`.
///
/// Area and height are taken as raw text and checked by the room form, so a
/// missing value is reported the same way the form reports it.
#[derive(Debug, Args)]
pub struct RoomArgs {
    #[arg(long = "area", value_name = "M2", help = "Room area in square meters")]
    pub area: Option<String>,

    #[arg(long = "height", value_name = "M", help = "Ceiling height in meters")]
    pub height: Option<String>,

    #[arg(
        long = "insolation",
        value_enum,
        default_value = "medium",
        help = "Sun exposure of the room"
    )]
    pub insolation: InsolationArg,

    #[arg(long = "mansard", help = "Room is under a mansard roof")]
    pub mansard: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum InsolationArg {
    Weak,
    Medium,
    Strong,
}

impl From<InsolationArg> for Insolation {
    fn from(arg: InsolationArg) -> Self {
        match arg {
            InsolationArg::Weak => Insolation::Weak,
            InsolationArg::Medium => Insolation::Medium,
            InsolationArg::Strong => Insolation::Strong,
        }
    }
}

impl std::fmt::Display for InsolationArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Weak => write!(f, "weak"),
            Self::Medium => write!(f, "medium"),
            Self::Strong => write!(f, "strong"),
        }
    }
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `aircalc init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration file.
    #[arg(long = "force", help = "Overwrite existing config")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `aircalc completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Target shell")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// `aircalc config` subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        #[arg(value_name = "KEY", help = "Dotted key, e.g. display.currency")]
        key: String,
    },

    /// Print the effective configuration as TOML.
    List,

    /// Print the configuration file location.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────
