use std::io;
use std::process;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use ordered_tree::Menu;

/// Interactive binary search tree: insert, search, remove, and traverse integer keys
#[derive(Parser, Debug)]
#[command(name = "ordered-tree")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (repeat for more: -d -d -d)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Do not print menus and prompts, only results (for scripted input)
    #[arg(long)]
    no_prompt: bool,
}

fn main() {
    let cli = Cli::parse();

    setup_logging(cli.debug);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(stdin.lock(), stdout.lock()).prompts(!cli.no_prompt);

    if let Err(e) = menu.run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        3 => LevelFilter::TRACE,
        _ => {
            eprintln!("Don't be crazy, max is -d -d -d");
            LevelFilter::TRACE
        }
    };

    // RUST_LOG wins over the -d flags when it is set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    // stdout carries the menu, so logs go to stderr.
    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();

    match level {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
