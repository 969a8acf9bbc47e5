//! Minimal terminal frontend over the launcher engine.
//!
//! Usage:
//!   lantern QUERY      print the grouped matches for QUERY and exit
//!   lantern            interactive mode; type to filter, or:
//!                        :down / :up   move the selection
//!                        :open         activate the selected entry
//!                        :quit         exit

use std::io::{self, BufRead, Write};

use lantern::{Config, Engine, Registry};

fn main() {
    env_logger::init();

    let config = Config::load();
    let mut engine = Engine::new(Registry::from_config(&config));

    if let Some(query) = std::env::args().nth(1) {
        engine.set_query(&query);
        render(&engine);
        return;
    }

    render(&engine);

    let stdin = io::stdin();
    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }

        match line.trim_end_matches('\n') {
            ":quit" | ":q" => break,
            ":down" | ":j" => engine.select_next(),
            ":up" | ":k" => engine.select_previous(),
            ":open" | ":o" => {
                if let Err(e) = engine.activate() {
                    eprintln!("Error: {}", e);
                }
                continue;
            }
            query => engine.set_query(query),
        }

        render(&engine);
    }
}

fn render(engine: &Engine) {
    let collection = engine.collection();
    let selected = engine.selection_visible_position();

    for (position, entry) in collection.visible_entries().enumerate() {
        if collection.needs_header(position) {
            println!("[{}]", entry.provider_name());
        }

        let marker = if selected == Some(position) { '>' } else { ' ' };
        let hint = entry.action_hint();
        if hint.is_empty() {
            println!("{} {}", marker, entry.title());
        } else {
            println!("{} {:<40} {}", marker, entry.title(), hint);
        }
    }

    if collection.visible_len() == 0 {
        println!("(no matches)");
    }
}
