//! imgcache - interactive shell over the LRU image cache

mod handler;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use imgcache::{CacheConfig, ImageCache, RepushPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::handler::{CommandHandler, Reply};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Cache capacity in bytes
    #[arg(short, long, default_value_t = 10)]
    capacity: u64,

    /// Move an image to most recent when it is pushed again
    #[arg(long)]
    promote_on_repush: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let policy = if args.promote_on_repush {
        RepushPolicy::Promote
    } else {
        RepushPolicy::Ignore
    };
    let config = CacheConfig::new(args.capacity).with_repush_policy(policy);

    info!("Starting imgcache v{}", env!("CARGO_PKG_VERSION"));
    info!("Cache capacity: {}", config.capacity);
    info!("Re-push policy: {:?}", config.repush_policy);

    let mut handler = CommandHandler::new(ImageCache::with_config(config));
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    println!("imgcache ready, capacity {} (type 'help')", args.capacity);

    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF
            break;
        }

        match handler.handle(&line) {
            Reply::Text(out) if out.is_empty() => {}
            Reply::Text(out) => println!("{}", out),
            Reply::Error(msg) => eprintln!("error: {}", msg),
            Reply::Quit => break,
        }
    }

    info!("Shutting down");
    Ok(())
}
