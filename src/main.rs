//! Load a word list into every trie encoding and compare their size.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::Level;

use wordtrie::config::DEFAULT_DICT_PATH;
use wordtrie::{Config, Dictionary, Report, TrieKind};

/// Compare trie encodings on a word list
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Word list, one key per line
    #[arg(short, long, default_value = DEFAULT_DICT_PATH)]
    dict: PathBuf,

    /// Encoding to build; repeat to pick several (default: all)
    #[arg(short = 't', long = "variant", value_enum)]
    variants: Vec<TrieKind>,

    /// Render every trie as a tree after loading
    #[arg(short, long)]
    print: bool,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        Config {
            dict_path: args.dict,
            variants: args.variants,
            print_trees: args.print,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let level = match args.verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    run(&Config::from(args))
}

fn run(config: &Config) -> Result<()> {
    let dict = Dictionary::open(&config.dict_path)
        .with_context(|| format!("loading {}", config.dict_path.display()))?;

    let mut tries = config.build_tries();
    let entries = dict.load_into(&mut tries)?;

    if config.print_trees {
        for trie in &tries {
            println!("{}:", trie.kind());
            trie.print().context("printing trie")?;
            println!();
        }
    }

    print!("{}", Report::collect(&dict, entries, &tries));
    Ok(())
}
