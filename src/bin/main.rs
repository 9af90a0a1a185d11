use abbrev_core::prompt::Prompt;
use abbrev_core::{ErrorPolicy, LookupConfig, LookupEngine, LookupResult};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "abbrev_lookup")]
#[command(about = "Look up abbreviations and their definitions", long_about = None)]
#[command(version)]
struct Cli {
    /// Directory holding the corpus files
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// JSON config file (flags override its values)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Extension of corpus files
    #[arg(long)]
    ext: Option<String>,

    /// Also read corpus files in subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Report every malformed line before failing instead of stopping at the first
    #[arg(long)]
    collect_errors: bool,

    /// Look up TEXT and exit instead of prompting (repeatable)
    #[arg(long = "query", value_name = "TEXT")]
    queries: Vec<String>,

    /// Print one-shot results as JSON lines
    #[arg(long)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Log only errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "warn"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> abbrev_core::Result<LookupConfig> {
    let mut config = match &cli.config {
        Some(path) => LookupConfig::from_json_file(path)?,
        None => LookupConfig::default(),
    };
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }
    if let Some(ext) = &cli.ext {
        config.extension = ext.clone();
    }
    if cli.recursive {
        config.recursive = true;
    }
    if cli.collect_errors {
        config.error_policy = ErrorPolicy::Collect;
    }
    Ok(config)
}

fn run(cli: &Cli) -> abbrev_core::Result<()> {
    let config = resolve_config(cli)?;
    let engine = LookupEngine::from_config(&config)?;
    log::debug!("Index holds {} entries", engine.index().len());

    if !cli.queries.is_empty() {
        let mut stdout = io::stdout().lock();
        for query in &cli.queries {
            let result = engine.lookup(query);
            if cli.json {
                let line = serde_json::to_string(&result).map_err(io::Error::from)?;
                writeln!(stdout, "{line}")?;
            } else {
                print_result(&mut stdout, &result)?;
            }
        }
        return Ok(());
    }

    run_prompt(&engine)
}

fn print_result(out: &mut impl Write, result: &LookupResult) -> io::Result<()> {
    if !result.definitions.is_empty() {
        writeln!(out, "{}", result.definitions.join(" | "))?;
    }
    for line in &result.abbreviations {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

fn run_prompt(engine: &LookupEngine) -> abbrev_core::Result<()> {
    println!("Hit Ctrl-C or Ctrl-D to exit");
    let mut prompt = Prompt::new("lookup > ");

    loop {
        println!();
        let Some(text) = prompt.read_line()? else {
            break;
        };
        if text.trim().is_empty() {
            continue;
        }
        print_result(&mut io::stdout().lock(), &engine.lookup(&text))?;
    }

    log::debug!("Session ended after {} queries", prompt.history().len());
    Ok(())
}
