use std::io;
use std::path::PathBuf;
use undo_accumulator::driver;
use undo_accumulator::{EngineConfig, Session};

fn init_logging() {
    // `log` records from the library are forwarded through tracing-log
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();
}

fn main() {
    init_logging();

    let config_path = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match EngineConfig::resolve(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(1);
        }
    };

    println!("=== Undo Accumulator ===");
    println!(
        "History capacity: {}, initial value: {}\n",
        config.history_capacity, config.initial_value
    );

    let mut session = Session::new(&config);
    let stdin = io::stdin();
    if let Err(e) = driver::run(&mut session, stdin.lock(), io::stdout()) {
        eprintln!("ERROR: {}", e);
        std::process::exit(1);
    }
}
