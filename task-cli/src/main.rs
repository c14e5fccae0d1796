use clap::Parser;
use std::io;
use std::path::PathBuf;
use task_cli::config::DEMO_TASKS;
use task_cli::{Config, Session};
use task_list::TaskList;
use tracing_subscriber::EnvFilter;

/// Interactive to-do list. Tasks live only for the current session.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long, default_value = "task-cli.toml")]
    config: PathBuf,
    /// Start with a few example tasks
    #[arg(long)]
    demo: bool,
    /// Prompt shown before each command
    #[arg(long)]
    prompt: Option<String>,
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let config = Config::load(&args.config)?;
    init_tracing(&config.log_level);

    let mut seed = config.session.seed;
    if args.demo {
        seed.extend(DEMO_TASKS.iter().map(|text| text.to_string()));
    }
    let prompt = args.prompt.unwrap_or(config.session.prompt);

    let mut session = Session::new(TaskList::with_tasks(&seed), prompt);
    session.run(io::stdin().lock(), io::stdout().lock())
}
