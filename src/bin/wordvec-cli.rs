//! WORDVEC CLI
//!
//! Look up word vectors and compare words from the command line.

use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{fmt, EnvFilter};
use wordvec::{Embedding, RetrieverConfig, RetrieverHandle};

/// WORDVEC - Disk-Backed Word Vector Lookup
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Vocabulary file (one word per line, most frequent first)
    #[arg(long, default_value = "models/cbow/glove.840B.300d.vocab.txt")]
    vocab: PathBuf,

    /// Vector file (one line per vocabulary entry)
    #[arg(long, default_value = "models/cbow/glove.840B.300d.txt")]
    vectors: PathBuf,

    /// Number of vectors kept in the cache
    #[arg(long, default_value_t = 1000)]
    cache_size: usize,

    /// Expected vector length
    #[arg(long, default_value_t = 300)]
    dim: usize,

    /// Load at most this many words
    #[arg(long, default_value_t = 1_000_000)]
    max_words: usize,

    /// Vector lines have no leading word label
    #[arg(long, default_value_t = false)]
    no_label: bool,

    /// Number of components to print per vector
    #[arg(long, default_value_t = 8)]
    show: usize,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Print the vector of each word
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the cosine similarity of two words
    Similarity { a: String, b: String },
    /// Interactive prompt
    Repl,
}

impl Args {
    fn config(&self) -> RetrieverConfig {
        RetrieverConfig::new(&self.vocab, &self.vectors)
            .with_cache_capacity(self.cache_size)
            .with_expected_vector_length(self.dim)
            .with_max_words(self.max_words)
            .with_skip_first_column(!self.no_label)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("wordvec=info".parse()?))
        .init();

    let args = Args::parse();
    let handle = RetrieverHandle::open(args.config())?;
    info!(
        vocab = %args.vocab.display(),
        vectors = %args.vectors.display(),
        "Retriever loaded"
    );

    match &args.command {
        Cmd::Lookup { words } => {
            let vectors = handle.resolve_async(words.clone()).await?;
            print_vectors(words, &vectors, args.show);
        }
        Cmd::Similarity { a, b } => print_similarity(&handle, a, b)?,
        Cmd::Repl => repl(&handle, args.show).await?,
    }

    debug!("{}", handle.with(|r| r.metrics().summary()));
    Ok(())
}

async fn repl(handle: &RetrieverHandle, show: usize) -> anyhow::Result<()> {
    println!("Type 'help' for available commands, 'quit' to exit.\n");

    loop {
        print!("wordvec> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let parts: Vec<&str> = input.split_whitespace().collect();
        let Some((cmd, rest)) = parts.split_first() else {
            continue;
        };

        match cmd.to_lowercase().as_str() {
            "quit" | "exit" => break,
            "help" => print_help(),
            "stats" => println!("{}", handle.with(|r| r.metrics().summary())),
            "get" if !rest.is_empty() => {
                let words: Vec<String> = rest.iter().map(|w| w.to_string()).collect();
                match handle.resolve_async(words.clone()).await {
                    Ok(vectors) => print_vectors(&words, &vectors, show),
                    Err(e) => eprintln!("Error: {}", e),
                }
            }
            "sim" if rest.len() == 2 => {
                if let Err(e) = print_similarity(handle, rest[0], rest[1]) {
                    eprintln!("Error: {}", e);
                }
            }
            "get" => eprintln!("GET requires at least one word: get <word>..."),
            "sim" => eprintln!("SIM requires two words: sim <a> <b>"),
            other => eprintln!(
                "Unknown command: {}. Type 'help' for available commands.",
                other
            ),
        }
    }

    Ok(())
}

fn print_vectors(words: &[String], vectors: &[Option<Embedding>], show: usize) {
    for (word, vector) in words.iter().zip(vectors) {
        match vector {
            Some(v) => {
                let head: Vec<String> = v
                    .iter()
                    .take(show)
                    .map(|x| format!("{:.4}", x))
                    .collect();
                let more = if v.len() > show { ", ..." } else { "" };
                println!("{}\t[{}{}] (dim={})", word, head.join(", "), more, v.len());
            }
            None => println!("{}\t<oov>", word),
        }
    }
}

fn print_similarity(handle: &RetrieverHandle, a: &str, b: &str) -> anyhow::Result<()> {
    match handle.similarity(a, b)? {
        Some(sim) => println!("{} {}\t{:.4}", a, b, sim),
        None => println!("{} {}\t<oov>", a, b),
    }
    Ok(())
}

fn print_help() {
    println!(
        r#"
Available commands:

  get <word>...     - Print the vector of each word
  sim <a> <b>       - Cosine similarity of two words
  stats             - Cache and disk counters

  help              - Show this help
  quit / exit       - Exit the CLI

Examples:
  get man woman
  sim man woman
"#
    );
}
