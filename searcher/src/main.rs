use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use retrieval::{AndPolicy, EngineConfig, Model, Session};
use searcher::loader::{self, Source};
use searcher::{load_config, run_query, SearchReport};
use tracing_subscriber::{fmt, EnvFilter};

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "searcher")]
#[command(about = "Query a document corpus with the Boolean, Extended Boolean or Vector Space model", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a single query and print the matching document ids
    Query {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[command(flatten)]
        output: OutputArgs,
        /// Query text, e.g. "cat and dog or not bird"
        query: String,
    },
    /// Read one query per line from stdin, print one result line per query
    Repl {
        #[command(flatten)]
        corpus: CorpusArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Args)]
struct CorpusArgs {
    /// Directory of documents (defaults to $SEARCHER_DOCS)
    #[arg(long)]
    docs: Option<String>,
    /// JSON or JSONL file of {"id", "body"} records instead of a directory
    #[arg(long, conflicts_with_all = ["docs", "files"])]
    input: Option<String>,
    /// Only load files with this extension (repeatable)
    #[arg(long = "ext")]
    extensions: Vec<String>,
    /// Fixed, comma separated list of file names to load from the docs directory
    #[arg(long, value_delimiter = ',')]
    files: Vec<String>,
    /// Engine config JSON file
    #[arg(long)]
    config: Option<String>,
    /// Fuzzy `and` key policy for the extended model
    #[arg(long, value_enum)]
    and_policy: Option<AndPolicyArg>,
}

#[derive(Args)]
struct OutputArgs {
    /// Retrieval model: boolean, extended or vector
    #[arg(long, default_value = "boolean")]
    model: Model,
    /// Print a JSON report instead of the id list
    #[arg(long, default_value_t = false)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AndPolicyArg {
    Intersection,
    ZeroDefaultUnion,
}

impl From<AndPolicyArg> for AndPolicy {
    fn from(arg: AndPolicyArg) -> Self {
        match arg {
            AndPolicyArg::Intersection => AndPolicy::Intersection,
            AndPolicyArg::ZeroDefaultUnion => AndPolicy::ZeroDefaultUnion,
        }
    }
}

fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Query { corpus, output, query } => {
            let session = open_session(&corpus)?;
            let report = run_query(&session, output.model, &query);
            print_report(&report, output.json)
        }
        Commands::Repl { corpus, output } => {
            let session = open_session(&corpus)?;
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line?;
                if line.trim().is_empty() { continue; }
                let report = run_query(&session, output.model, line.trim());
                print_report(&report, output.json)?;
            }
            Ok(())
        }
    }
}

fn open_session(args: &CorpusArgs) -> Result<Session> {
    let source = corpus_source(args)?;
    let corpus = loader::load(&source)?;

    let mut config = match &args.config {
        Some(path) => load_config(Path::new(path))?,
        None => EngineConfig::default(),
    };
    if let Some(policy) = args.and_policy {
        config.and_policy = policy.into();
    }
    tracing::debug!(?config, "engine config");
    Ok(Session::with_config(corpus, config))
}

fn corpus_source(args: &CorpusArgs) -> Result<Source> {
    if let Some(input) = &args.input {
        return Ok(Source::Input(PathBuf::from(input)));
    }
    let root = match args.docs.clone().or_else(|| std::env::var("SEARCHER_DOCS").ok()) {
        Some(dir) => PathBuf::from(dir),
        None => bail!("no corpus given: pass --docs or --input, or set SEARCHER_DOCS"),
    };
    if args.files.is_empty() {
        Ok(Source::Dir { root, extensions: args.extensions.clone() })
    } else {
        Ok(Source::Files { root, names: args.files.clone() })
    }
}

fn print_report(report: &SearchReport, json: bool) -> Result<()> {
    let mut out = io::stdout().lock();
    if json {
        writeln!(out, "{}", serde_json::to_string(report)?)?;
    } else {
        writeln!(out, "{}", report.render())?;
    }
    Ok(())
}
