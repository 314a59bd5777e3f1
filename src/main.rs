//! Bingo card server binary
//!
//! Run with: cargo run -- [port] [options]
//!
//! Options:
//!   --bind <addr>  Bind to address (default: 0.0.0.0)
//!
//! Default port: 8000

use std::env;

use log::info;

use bingo_card_kit::Server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let mut port: u16 = 8000;
    let mut bind = "0.0.0.0".to_string();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                if i + 1 < args.len() {
                    bind = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                println!("Bingo Card Generator v0.1.0");
                println!();
                println!("Usage: bingo-server [port] [options]");
                println!();
                println!("Options:");
                println!("  --bind <addr>  Bind to address (default: 0.0.0.0)");
                println!("  --help, -h     Show this help");
                println!();
                println!("Examples:");
                println!("  bingo-server                       # Serve on port 8000");
                println!("  bingo-server 9000 --bind 127.0.0.1 # Local only, port 9000");
                std::process::exit(0);
            }
            arg => {
                if let Ok(p) = arg.parse::<u16>() {
                    port = p;
                }
                i += 1;
            }
        }
    }

    info!("Bingo Card Generator v0.1.0");
    info!("Open http://localhost:{} in a browser", port);

    let server = Server::new(port, bind);
    server.run().await?;

    Ok(())
}
