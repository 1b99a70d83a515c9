use chrono::NaiveDate;
use clap::Parser;
use contacts_core::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "contacts")]
#[command(about = "Contact book assistant with birthday reminders", long_about = None)]
struct Cli {
    /// Override config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Reference date for `birthdays` (DD.MM.YYYY), defaults to today
    #[arg(long, value_parser = parse_today)]
    today: Option<NaiveDate>,
}

fn parse_today(raw: &str) -> std::result::Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match cli.config {
        Some(ref path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Initialize logging
    contacts_core::logging::init_with_level(&config.logging.level);

    let today = cli
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let window = config.birthdays.window();

    run_assistant(today, &window)
}

fn run_assistant(today: NaiveDate, window: &BirthdayWindow) -> Result<()> {
    let mut book = AddressBook::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Welcome to the assistant bot!");

    loop {
        print!("Enter a command: ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF
            println!();
            break;
        };
        let line = line?;

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(Error::EmptyInput) => continue,
            Err(Error::UnknownCommand(_)) => {
                println!("Invalid command. Type 'help' to list commands.");
                continue;
            }
            Err(Error::MissingArgument { command, usage }) => {
                println!("[{}] → Missing arguments. Usage: {}", command, usage);
                continue;
            }
            Err(e) => return Err(e),
        };

        match execute(&mut book, &command, today, window) {
            Ok(Reply::Exit) => {
                println!("Good bye!");
                break;
            }
            Ok(reply) => display_reply(&command, reply),
            Err(e) => {
                tracing::debug!("{} failed: {:?}", command.name(), e);
                println!("[{}] → {}", command.name(), e);
            }
        }
    }

    tracing::debug!("Session ended with {} contacts", book.len());
    Ok(())
}

fn display_reply(command: &Command, reply: Reply) {
    match reply {
        Reply::Message(message) => println!("{}", message),
        Reply::Lines(lines) => {
            if matches!(command, Command::Help) {
                println!("Available commands:");
            } else if lines.is_empty() {
                println!("No contacts saved.");
            }
            for line in lines {
                println!("{}", line);
            }
        }
        Reply::Upcoming(upcoming) => {
            if upcoming.is_empty() {
                println!("No upcoming birthdays.");
            }
            for item in upcoming {
                println!("{}", item);
            }
        }
        Reply::Exit => {}
    }
}
