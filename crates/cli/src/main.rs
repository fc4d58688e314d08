use anyhow::{bail, Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use sense_lexicon::MemoryInventory;
use sense_wsd::{DisambiguatorConfig, PassageDisambiguator};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

mod render;

#[derive(Parser)]
#[command(name = "lesk")]
#[command(about = "Word-sense disambiguation by gloss overlap", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Sense inventory file (JSON or TOML)
    #[arg(long, global = true)]
    inventory: Option<PathBuf>,

    /// Disambiguator config file (JSON or TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Disambiguate every content word of a passage
    Passage(PassageArgs),

    /// Disambiguate a single word in a sentence
    Word(WordArgs),
}

#[derive(Args)]
struct PassageArgs {
    /// Passage text (read from stdin when omitted)
    text: Option<String>,

    /// Pair each sense with its gloss
    #[arg(long)]
    glosses: bool,

    /// Score sentences on the thread pool
    #[arg(long)]
    parallel: bool,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct WordArgs {
    /// Word to disambiguate
    word: String,

    /// Sentence the word occurs in
    sentence: String,

    /// Also print every candidate with its overlap
    #[arg(long)]
    explain: bool,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let Some(inventory_path) = cli.inventory.as_deref() else {
        bail!("--inventory <PATH> is required");
    };
    let inventory = load_inventory(inventory_path)?;
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Passage(args) => run_passage(args, inventory, config),
        Commands::Word(args) => run_word(&args, inventory, config),
    }
}

fn load_inventory(path: &Path) -> Result<MemoryInventory> {
    let inventory = MemoryInventory::from_path(path)
        .with_context(|| format!("Failed to load inventory {}", path.display()))?;
    log::info!("Loaded {} inventory words", inventory.len());
    Ok(inventory)
}

fn load_config(path: Option<&Path>) -> Result<DisambiguatorConfig> {
    match path {
        Some(path) => DisambiguatorConfig::from_path(path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(DisambiguatorConfig::default()),
    }
}

fn run_passage(
    args: PassageArgs,
    inventory: MemoryInventory,
    mut config: DisambiguatorConfig,
) -> Result<()> {
    let text = match args.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read passage from stdin")?;
            buf
        }
    };

    if args.parallel {
        config.execution = DisambiguatorConfig::for_throughput().execution;
    }

    let disambiguator = PassageDisambiguator::new(inventory, config)?;
    let sentences = disambiguator.disambiguate_passage(&text, args.glosses)?;

    if args.json {
        println!("{}", render::passage_json(&sentences)?);
    } else {
        print!("{}", render::passage_text(&sentences));
    }
    Ok(())
}

fn run_word(args: &WordArgs, inventory: MemoryInventory, config: DisambiguatorConfig) -> Result<()> {
    let disambiguator = PassageDisambiguator::new(inventory, config)?;
    let scorer = disambiguator.scorer();

    let result = scorer.disambiguate(&args.word, &args.sentence)?;
    let gloss = result.gloss(&disambiguator.config().unknown_gloss);
    let scores = if args.explain {
        Some(scorer.score_candidates(&args.word, &args.sentence)?)
    } else {
        None
    };

    if args.json {
        println!(
            "{}",
            render::word_json(&args.word, &args.sentence, &result, gloss, scores.as_deref())?
        );
    } else {
        print!("{}", render::word_text(&result, gloss, scores.as_deref()));
    }
    Ok(())
}
