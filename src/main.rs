use anyhow::{bail, Context, Result};
use clap::{ArgAction, Parser};
use colored::*;
use devfix::config::{self, Config};
use devfix::render::render;
use devfix::rules::COMMON_ERRORS;
use devfix::sound::{self, Cue, SoundManager};
use devfix::theme::Theme;
use devfix::{Analyzer, Category, Solution, Strategy};
use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::time::Instant;
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "devfix", version, about = "Explains error messages and suggests fixes")]
struct Cli {
    /// Error text to analyze, `-` to read it from stdin. Starts an interactive session when omitted.
    error: Vec<String>,

    /// How local rules and the remote search are combined
    #[arg(long, value_enum)]
    strategy: Option<Strategy>,

    /// Print the solution as JSON
    #[arg(long)]
    json: bool,

    /// Print the JSON schema of the --json output and exit
    #[arg(long)]
    schema: bool,

    /// List sample errors and exit
    #[arg(long)]
    examples: bool,

    /// Config file to use instead of the platform default
    #[arg(long)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

struct Output {
    json: bool,
    theme: Theme,
    show_execution_time: bool,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.schema {
        let schema = schemars::schema_for!(Solution);
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    if cli.examples {
        print_examples();
        return Ok(());
    }

    let config_path = match cli.config {
        Some(path) => path,
        None => config::get_config_path()?,
    };
    let mut config = Config::load_or_create(&config_path)?;
    config.apply_env_overrides()?;
    if let Some(strategy) = cli.strategy {
        config.classifier.strategy = strategy;
    }

    if cli.json || !config.display.color_output {
        colored::control::set_override(false);
    }
    SoundManager::init(config.sound.enabled && !cli.json);

    let analyzer = Analyzer::from_config(&config);
    let output = Output {
        json: cli.json,
        theme: Theme::named(config.display.theme),
        show_execution_time: config.display.show_execution_time,
    };

    if !cli.error.is_empty() {
        let error_text = if cli.error.len() == 1 && cli.error[0] == "-" {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read error text from stdin")?;
            buf
        } else {
            cli.error.join(" ")
        };

        if error_text.trim().is_empty() {
            bail!("No error text given");
        }

        return analyze_and_print(&analyzer, &error_text, &output).await;
    }

    run_interactive(&analyzer, &output).await
}

async fn run_interactive(analyzer: &Analyzer, output: &Output) -> Result<()> {
    println!("{}", "Devfix - Paste an error, get a fix".green().bold());
    println!("Strategy: {}", analyzer.strategy().to_string().blue());
    println!("Type 'examples' for sample errors, 'new' to start over, 'exit' to quit\n");

    loop {
        print!("devfix> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break;
        }
        let query = line.trim();

        match query {
            "" => continue,
            "exit" | "quit" => break,
            "new" => {
                sound::play(Cue::Click).await;
                println!("Ready for a new error.\n");
            }
            "examples" => print_examples(),
            error_text => analyze_and_print(analyzer, error_text, output).await?,
        }
    }

    Ok(())
}

async fn analyze_and_print(analyzer: &Analyzer, error_text: &str, output: &Output) -> Result<()> {
    let started = Instant::now();
    let solution = analyzer.analyze(error_text).await;
    let elapsed = started.elapsed();

    let failed = solution.sourced_externally && solution.category == Category::Network;
    sound::play(if failed { Cue::Error } else { Cue::Success }).await;

    if output.json {
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    println!("{}", render(&solution, &output.theme));
    if output.show_execution_time {
        println!(
            "{}",
            format!("Analyzed in {:.2?} ({})", elapsed, analyzer.strategy()).dimmed()
        );
    }
    println!();

    Ok(())
}

fn print_examples() {
    println!("{}", "Try one of these:".bold());
    for example in COMMON_ERRORS {
        println!("  {}", example);
    }
}
