#![forbid(unsafe_code)]
//! Interactive console for exercising the in-memory club registry.
//!
//! State lives only for the session; there is no persistence.

use clap::Parser;
use club_registry::config::load_config;
use club_registry::principal::Principal;
use club_registry::registry::ClubRegistry;
use colored::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the config file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override the initial contract admin from the config
    #[arg(long)]
    admin: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = load_config(&cli.config)?;
    if !config.console.colored_output {
        colored::control::set_override(false);
    }

    let contract_admin = cli
        .admin
        .unwrap_or(config.registry.contract_admin);
    let mut registry = ClubRegistry::new(Principal::from(contract_admin));

    println!(
        "{} contract admin is {}",
        "Club registry console.".bright_cyan(),
        registry.contract_admin().to_string().bright_yellow()
    );
    println!("Type 'help' for commands.");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts.as_slice() {
            [] => continue,
            ["quit"] | ["exit"] => break,
            ["help"] => print_help(),
            ["register", caller, uri, name @ ..] if !name.is_empty() => {
                match registry.register_club(
                    Principal::from(*caller),
                    name.join(" "),
                    uri.to_string(),
                ) {
                    Ok(id) => println!("{} club id {}", "ok:".green(), id),
                    Err(e) => println!("{} {}", "error:".red(), e),
                }
            }
            ["deactivate", caller, id] => match parse_id(id) {
                Ok(id) => match registry.deactivate_club(&Principal::from(*caller), id) {
                    Ok(()) => println!("{} club {} deactivated", "ok:".green(), id),
                    Err(e) => println!("{} {}", "error:".red(), e),
                },
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            ["update", caller, id, uri] => match parse_id(id) {
                Ok(id) => {
                    match registry.update_metadata(&Principal::from(*caller), id, uri.to_string())
                    {
                        Ok(()) => println!("{} metadata updated", "ok:".green()),
                        Err(e) => println!("{} {}", "error:".red(), e),
                    }
                }
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            ["transfer", caller, new_admin] => {
                match registry
                    .transfer_admin(&Principal::from(*caller), Principal::from(*new_admin))
                {
                    Ok(()) => println!(
                        "{} contract admin is now {}",
                        "ok:".green(),
                        registry.contract_admin().to_string().bright_yellow()
                    ),
                    Err(e) => println!("{} {}", "error:".red(), e),
                }
            }
            ["show", id] => match parse_id(id) {
                Ok(id) => match registry.club(id) {
                    Some(club) => println!("{}", serde_json::to_string_pretty(club)?),
                    None => println!("{} no club with id {}", "error:".red(), id),
                },
                Err(e) => println!("{} {}", "error:".red(), e),
            },
            ["state"] => println!("{}", serde_json::to_string_pretty(&registry)?),
            _ => println!("{} unrecognized command, try 'help'", "error:".red()),
        }
    }

    Ok(())
}

fn parse_id(raw: &str) -> Result<u64, String> {
    raw.parse::<u64>()
        .map_err(|_| format!("'{}' is not a club id", raw))
}

fn print_help() {
    println!("Commands:");
    println!("  register <caller> <metadata-uri> <name...>   register a new club");
    println!("  deactivate <caller> <club-id>                deactivate a club");
    println!("  update <caller> <club-id> <metadata-uri>     replace club metadata");
    println!("  transfer <caller> <new-admin>                transfer contract admin");
    println!("  show <club-id>                               print one club as JSON");
    println!("  state                                        print the full registry state");
    println!("  quit                                         exit");
}
