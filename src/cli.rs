//! CLI argument parsing and help text

use std::net::IpAddr;

use crate::config::ServerConfig;

/// Flags accepted on the command line; unset values defer to the environment
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub host: Option<IpAddr>,
    pub port: Option<u16>,
    pub help: bool,
    pub version: bool,
}

impl CliArgs {
    /// Parse arguments (without the program name)
    ///
    /// Unparseable values are ignored, leaving the environment setting in
    /// place.
    pub fn parse(args: &[String]) -> Self {
        Self {
            host: value_after(args, "--host").and_then(|h| h.parse().ok()),
            port: value_after(args, "--port").and_then(|p| p.parse().ok()),
            help: args.iter().any(|arg| arg == "--help" || arg == "-h"),
            version: args.iter().any(|arg| arg == "--version" || arg == "-v"),
        }
    }

    /// Apply command line overrides on top of an environment-derived config
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        config
    }
}

fn value_after<'a>(args: &'a [String], flag: &str) -> Option<&'a String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|pos| args.get(pos + 1))
}

pub fn print_help() {
    let version = env!("CARGO_PKG_VERSION");
    println!("Chicken-as-a-Service v{}", version);
    println!("The world's premier chicken delivery platform");
    println!();
    println!("USAGE:");
    println!("    chicken_server [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    --host <HOST>         Bind address (default: 0.0.0.0)");
    println!("    --port <PORT>         Server port (default: 3000)");
    println!("    -h, --help            Print this help message");
    println!("    -v, --version         Print version information");
    println!();
    println!("SERVER ENDPOINTS:");
    println!("    GET    /                      - Welcome and endpoint list");
    println!("    GET    /health                - Health check");
    println!("    GET    /chicken               - 1000 chickens as text");
    println!("    GET    /chicken/{{count}}       - Up to 50000 chickens as text");
    println!("    GET    /chicken/json          - Chickens as a JSON list (?count=)");
    println!("    GET    /ascii/rave            - ASCII animation frames");
    println!("    GET    /leaderboard           - Top 10 chicken consumers");
    println!("    GET    /leaderboard/{{client}}  - One client's tally");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    HOST                  - Bind address (default: 0.0.0.0)");
    println!("    PORT                  - Server port (default: 3000)");
    println!("    TRUST_FORWARDED_FOR   - Key the leaderboard on X-Forwarded-For (true/false)");
    println!("    CHICKEN_LOG_DIR       - Directory for the JSON access log");
    println!("    LOG_ACCESS_ENABLED    - Write the access log file (default: true)");
    println!("    LOG_FORMAT            - Console format (compact/pretty/json)");
    println!("    RUST_LOG              - Log level (error/warn/info/debug/trace)");
    println!();
    println!("CONFIGURATION:");
    println!("    Settings can also be placed in a .env file in the working directory.");
}

pub fn print_version() {
    println!("Chicken-as-a-Service v{}", env!("CARGO_PKG_VERSION"));
}
