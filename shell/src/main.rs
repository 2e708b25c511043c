//! VELA host binary
//!
//! Minimal line-driven host: forwards commands to the shell and prints
//! the resulting page state as JSON, standing in for a real frontend.

mod commands;
mod state;

use std::io::{self, BufRead, Write};

use serde::Serialize;

use commands::navigation::CommandResult;
use state::AppState;

const HELP: &str = "\
Commands:
  show <section>        switch the visible section
  back                  traverse history back
  forward               traverse history forward
  page                  print the current page state
  sections              list known sections
  fill <field> <value>  type into a contact form field
  submit                submit the contact form
  submissions           list captured submissions
  help                  print this help
  quit                  exit";

fn print_result<T: Serialize>(result: &CommandResult<T>) {
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Failed to encode result: {e}"),
    }
}

fn main() {
    vela_core::init_logging();

    let state = match AppState::new(vela_core::Config::default()) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to build shell: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = state.initialize() {
        eprintln!("Failed to initialize shell: {e}");
        std::process::exit(1);
    }

    tracing::info!("VELA shell started");
    println!("{HELP}");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        let _ = stdout.flush();

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {}
            Err(e) => {
                eprintln!("Failed to read input: {e}");
                break;
            }
        }

        let mut parts = line.trim().splitn(3, ' ');
        let verb = parts.next().unwrap_or("");

        match verb {
            "" => {}
            "show" => match parts.next() {
                Some(section) => {
                    print_result(&commands::navigation::show_section(&state, section))
                }
                None => println!("Usage: show <section>"),
            },
            "back" => print_result(&commands::navigation::navigate_back(&state)),
            "forward" => print_result(&commands::navigation::navigate_forward(&state)),
            "page" => print_result(&commands::navigation::get_page(&state)),
            "sections" => print_result(&commands::navigation::list_sections(&state)),
            "fill" => match (parts.next(), parts.next()) {
                (Some(name), Some(value)) => {
                    print_result(&commands::forms::fill_field(&state, name, value))
                }
                _ => println!("Usage: fill <field> <value>"),
            },
            "submit" => print_result(&commands::forms::submit_contact_form(&state)),
            "submissions" => print_result(&commands::forms::list_submissions(&state)),
            "help" => println!("{HELP}"),
            "quit" | "exit" => break,
            other => println!("Unknown command: {other} (try `help`)"),
        }
    }
}
