mod load;
pub use load::{LoadError, load};
#[cfg(test)]
mod test;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use tracing::Level;
use tripod::Symbol;

/// Store keys in a trie and search them by prefix.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub trie: OptsTrie,

    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub cmd: Cmd,
}

impl Cli {
    pub fn level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Cmd {
    /// Check whether keys are stored.
    Exists(OptsExists),
    /// List the stored keys starting with a prefix.
    Prefix(OptsPrefix),
    /// Display statistics about the trie.
    Stats(OptsStats),
}

#[derive(Debug, Args)]
pub struct OptsTrie {
    /// File of keys to load, one per line. Defaults to stdin.
    #[arg(short, long, value_parser, default_value = "-")]
    pub input: clio::Input,
    /// Maximum length of a key, in symbols.
    #[arg(short, long, default_value_t = 128)]
    pub max_key_length: usize,
    /// Unit a key is made of.
    #[arg(short, long, value_enum, default_value_t = Symbols::Chars)]
    pub symbols: Symbols,
    /// Split every line into words and store each word as a key.
    #[arg(short, long, default_value_t = false)]
    pub words: bool,
    /// Fail on keys longer than the maximum instead of skipping them.
    #[arg(long, default_value_t = false)]
    pub strict: bool,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Symbols {
    /// Each UTF-8 byte is one symbol.
    Bytes,
    /// Each unicode scalar value is one symbol.
    #[default]
    Chars,
}

#[derive(Debug, Args)]
pub struct OptsExists {
    /// Keys to look up.
    #[arg(required = true)]
    pub keys: Vec<String>,
}

#[derive(Debug, Args)]
pub struct OptsPrefix {
    /// Prefix to search for. Lists every key when empty.
    #[arg(default_value = "")]
    pub prefix: String,
    /// Sort the matches.
    #[arg(long, default_value_t = false)]
    pub sorted: bool,
    /// Only print the number of matches.
    #[arg(short, long, default_value_t = false, conflicts_with = "sorted")]
    pub count: bool,
}

#[derive(Debug, Args)]
pub struct OptsStats {
    #[arg(short, long, value_enum, default_value_t = StatFormat::Human)]
    pub format: StatFormat,
}

#[derive(Debug, Default, Clone, PartialEq, Eq, ValueEnum)]
pub enum StatFormat {
    /// Print the stats in a human-readable format.
    #[default]
    Human,
    /// Print the stats in a machine-readable format (JSON).
    Json,
}

/// Turns a stored key back into text for printing.
pub trait Render: Symbol {
    fn render(key: &[Self]) -> String;
}

impl Render for u8 {
    fn render(key: &[Self]) -> String {
        String::from_utf8_lossy(key).into_owned()
    }
}

impl Render for char {
    fn render(key: &[Self]) -> String {
        key.iter().collect()
    }
}
