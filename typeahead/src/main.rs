use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use typeahead::{
    feed_keys, load_corpus, parse_key_script, render_panels, AppConfig, InputSession,
    NGramModel, DEFAULT_PANEL_WIDTH,
};

#[derive(Parser)]
#[command(name = "typeahead")]
#[command(about = "Word completion from a character n-gram model, driven by key scripts")]
#[command(version)]
struct Cli {
    /// Training corpus: a text file or a directory of text files
    corpus: PathBuf,

    /// N-gram order (overrides the config file)
    #[arg(short = 'n', long)]
    order: Option<usize>,

    /// Number of suggestions (overrides the config file)
    #[arg(short = 'k', long = "top-k")]
    top_k: Option<usize>,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference text file the typing statistics are measured against
    #[arg(long)]
    reference: Option<PathBuf>,

    /// Lowercase the current word before predicting
    #[arg(long)]
    lowercase_prefix: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    /// Wrap width for the reference text panel
    #[arg(long, default_value_t = DEFAULT_PANEL_WIDTH)]
    width: usize,

    /// Debug logging on stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the ranked completions of a prefix
    Predict {
        /// Word prefix to complete
        prefix: String,
    },
    /// Run a key script through a fresh session and print the final state
    Replay {
        /// Key script, e.g. "sl<tab><enter> we"
        script: String,
    },
    /// Read key scripts from stdin, one per line (default)
    Repl,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init()
        .ok();
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    if let Some(order) = cli.order {
        config.base_mut().order = order;
    }
    if let Some(k) = cli.top_k {
        config.base_mut().suggestion_limit = k;
    }
    if cli.lowercase_prefix {
        config.base_mut().lowercase_prefix = true;
    }
    if let Some(reference) = &cli.reference {
        config.reference_file = Some(reference.clone());
    }
    config
        .base()
        .validate()
        .context("invalid configuration")?;
    Ok(config)
}

fn print_content(session: &InputSession, json: bool, width: usize) -> Result<()> {
    let content = session.content();
    if json {
        println!("{}", serde_json::to_string(content)?);
    } else {
        println!("{}", render_panels(content, session.reference_text(), width));
    }
    Ok(())
}

fn run_predict(model: &NGramModel, prefix: &str, k: usize, json: bool) -> Result<()> {
    let candidates = model.predict_top_candidates(prefix, k);
    if json {
        println!("{}", serde_json::to_string(&candidates)?);
        return Ok(());
    }
    if candidates.is_empty() {
        println!("(no candidates found)");
    }
    for (i, c) in candidates.iter().enumerate() {
        println!("{}. {} score={:.6e}", i + 1, c.text, c.score);
    }
    Ok(())
}

fn run_replay(mut session: InputSession, script: &str, json: bool, width: usize) -> Result<()> {
    let keys = parse_key_script(script)?;
    feed_keys(&mut session, &keys);
    print_content(&session, json, width)
}

fn run_repl(mut session: InputSession, json: bool, width: usize) -> Result<()> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("reading stdin")?;
        let keys = match parse_key_script(&line) {
            Ok(keys) => keys,
            Err(e) => {
                eprintln!("error: {:#}", e);
                continue;
            }
        };
        let result = feed_keys(&mut session, &keys);
        print_content(&session, json, width)?;
        io::stdout().flush()?;
        if !result.should_continue() {
            debug!("session ended by escape");
            break;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(&cli)?;
    let corpus = load_corpus(&cli.corpus)?;
    if corpus.trim().is_empty() {
        warn!(path = %cli.corpus.display(), "corpus contains no text; no completions will be offered");
    }
    let model = Arc::new(NGramModel::train(&corpus, config.base().order)?);
    info!(
        words = model.word_count(),
        order = model.order(),
        "model trained"
    );

    let reference = config.resolve_reference()?;
    let session = InputSession::with_config(Arc::clone(&model), reference, config.base());

    match cli.command.unwrap_or(Commands::Repl) {
        Commands::Predict { prefix } => {
            run_predict(&model, &prefix, config.base().suggestion_limit, cli.json)
        }
        Commands::Replay { script } => run_replay(session, &script, cli.json, cli.width),
        Commands::Repl => run_repl(session, cli.json, cli.width),
    }
}
