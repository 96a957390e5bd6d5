//! Terminal clock showing the current time in several timezones.

use anyhow::Result;
use chrono::Local;
use project_tracker::services::clock::{Clock, SystemClock};
use project_tracker::services::timezone::ZoneBoard;
use project_tracker::utils::validation::validate_zone_input;
use std::env;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

#[derive(Debug, PartialEq, Eq)]
enum Input {
    Add(String),
    Remove(String),
    List,
    Quit,
    Unknown(String),
}

fn parse_input(line: &str) -> Option<Input> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let input = if let Some(zone) = line.strip_prefix('+') {
        Input::Add(zone.to_string())
    } else if let Some(zone) = line.strip_prefix('-') {
        Input::Remove(zone.to_string())
    } else if let Some(zone) = line.strip_prefix("add ") {
        Input::Add(zone.to_string())
    } else if let Some(zone) = line.strip_prefix("remove ") {
        Input::Remove(zone.to_string())
    } else if line == "list" {
        Input::List
    } else if line == "quit" || line == "exit" {
        Input::Quit
    } else {
        Input::Unknown(line.to_string())
    };
    Some(input)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    if args.iter().any(|a| a == "help" || a == "--help" || a == "-h") {
        print_help();
        return Ok(());
    }

    let mut board = ZoneBoard::new(args);
    let clock = SystemClock;

    println!("🕐 Multi Timezone Clock");
    println!("Type +Zone to add, -Zone to remove, 'list' or 'quit'.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut ticker = tokio::time::interval(Duration::from_secs(1));
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = ticker.tick() => render(&board, &clock),
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                match parse_input(&line) {
                    Some(Input::Add(zone)) => match validate_zone_input(&zone) {
                        Ok(zone) => {
                            if !board.add(zone) {
                                println!("ℹ️ {zone} is already shown");
                            }
                        }
                        Err(e) => println!("❌ {e}"),
                    },
                    Some(Input::Remove(zone)) => {
                        if !board.remove(&zone) {
                            println!("ℹ️ {} is not shown", zone.trim());
                        }
                    }
                    Some(Input::List) => println!("{}", board.zones().join(", ")),
                    Some(Input::Quit) => break,
                    Some(Input::Unknown(other)) => println!("❌ Unknown command: {other}"),
                    None => {}
                }
            }
            _ = &mut ctrl_c => break,
        }
    }

    println!("Clock stopped");
    Ok(())
}

fn render(board: &ZoneBoard, clock: &dyn Clock) {
    let now = clock.now();
    println!();
    println!("Current local time: {}", now.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S"));
    for entry in board.render(now) {
        println!("  {:<24} {}", entry.timezone(), entry.display_text());
    }
}

fn print_help() {
    println!("🕐 Project Tracker - Multi Timezone Clock");
    println!();
    println!("USAGE:");
    println!("    clock [ZONE...]");
    println!();
    println!("Shows the current time in each zone, refreshed every second.");
    println!("Without zones the default list is shown.");
    println!();
    println!("COMMANDS (stdin):");
    println!("    +Zone, add Zone       Add a zone, e.g. +Asia/Kolkata");
    println!("    -Zone, remove Zone    Remove a zone");
    println!("    list                  Print the zones being shown");
    println!("    quit                  Stop the clock");
    println!();
    println!("EXAMPLES:");
    println!("    clock                          # Default zones");
    println!("    clock UTC Europe/Paris         # Only these zones");
    println!();
}
