use clap::Parser;
use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

use charla::core::config;
use charla::tui;

#[derive(Parser)]
#[command(name = "charla", about = "Minimal terminal chat client")]
struct Args {
    /// Chat server base URL (overrides config file and CHARLA_SERVER_URL)
    #[arg(short, long)]
    server: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("charla: {e}");
            std::process::exit(1);
        }
    };
    let resolved = config::resolve(&file_config, args.server.as_deref());

    // Initialize file logger - writes to charla.log in current directory
    let level: LevelFilter = resolved.log_level.parse().unwrap_or(LevelFilter::Info);
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create("charla.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    log::info!("Charla starting up (server: {})", resolved.server_url);

    tui::run(resolved)
}
