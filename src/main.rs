use anyhow::Result;

use pagewise::cli::Command;
use pagewise::{handle_info, handle_show, interpret};

fn main() {
    setup_logging();
    parse_and_execute().unwrap_or_else(|e| {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    });
}

fn setup_logging() {
    sensible_env_logger::init!();
}

fn parse_and_execute() -> Result<()> {
    let command = interpret();
    execute_command(&command)
}

fn execute_command(command: &Command) -> Result<()> {
    match command {
        Command::Show {
            source,
            page,
            show_first_page_when_invalid,
            lenient,
        } => handle_show(source, page, *show_first_page_when_invalid, *lenient),
        Command::Info { source } => handle_info(source),
    }
}
