mod cli;

use std::io::Write;

use clap::Parser;
use cli::{Cli, Cmd, LoadError, Render, StatFormat, Symbols, load};
use itertools::Itertools;
use thiserror::Error;
use tracing::debug;
use tripod::{ByteTrie, CharTrie, Key, Stats, Trie};

#[derive(Debug, Error)]
enum Error {
    #[error("Unable to load the keys: {0}")]
    Load(#[from] LoadError),
    #[error("Unable to write the output: {0}")]
    Output(#[from] std::io::Error),
    #[error("Unable to serialise the stats: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(cli.level())
        .init();

    if let Err(err) = entry(cli) {
        eprintln!("{}", err);
        std::process::exit(1)
    }
}

fn entry(cli: Cli) -> Result<(), Error> {
    let max_key_length = cli.trie.max_key_length;
    match cli.trie.symbols {
        Symbols::Bytes => run(ByteTrie::new(max_key_length), cli),
        Symbols::Chars => run(CharTrie::new(max_key_length), cli),
    }
}

fn run<S: Render>(mut trie: Trie<S>, mut cli: Cli) -> Result<(), Error>
where
    str: Key<S>,
{
    debug!(
        max_key_length = trie.max_key_length(),
        symbols = ?cli.trie.symbols,
        "loading keys"
    );
    load(
        &mut trie,
        cli.trie.input.lock(),
        cli.trie.words,
        cli.trie.strict,
    )?;

    let mut f = std::io::stdout().lock();
    match cli.cmd {
        Cmd::Exists(opts) => {
            for key in opts.keys {
                writeln!(f, "{}\t{}", key, trie.exists(key.as_str()))?;
            }
        }
        Cmd::Prefix(opts) => {
            let keys = trie.collect_with_prefix(opts.prefix.as_str());
            if opts.count {
                writeln!(f, "{}", keys.len())?;
            } else if opts.sorted {
                for key in keys.iter().map(|key| S::render(key)).sorted() {
                    writeln!(f, "{}", key)?;
                }
            } else {
                for key in keys {
                    writeln!(f, "{}", S::render(&key))?;
                }
            }
        }
        Cmd::Stats(opts) => {
            let stats = Stats::from(&trie);
            match opts.format {
                StatFormat::Human => writeln!(f, "{}", stats)?,
                StatFormat::Json => {
                    serde_json::to_writer_pretty(&mut f, &stats)?;
                    writeln!(f)?;
                }
            }
        }
    }
    Ok(())
}
