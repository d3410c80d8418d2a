use chrono::NaiveDate;
use clap::Parser;
use rota::application::{
    init::init, AddOutcome, ConfigService, ListService, PeopleService, RotationService,
};
use rota::cli::{format_list_summaries, format_list_view, Cli, Commands};
use rota::domain::week::derive_week_info_for_date;
use rota::domain::{derive_week_info, Clock, FixedClock, MoveDirection, SystemClock};
use rota::error::RotaError;
use rota::infrastructure::FileSystemStore;
use std::str::FromStr;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

/// One instant for the whole invocation, pinned by ROTA_NOW when set
fn clock() -> Result<FixedClock, RotaError> {
    match std::env::var("ROTA_NOW") {
        Ok(value) => FixedClock::parse(&value),
        Err(_) => Ok(FixedClock(SystemClock.now())),
    }
}

fn run(cli: Cli) -> Result<(), RotaError> {
    let clock = clock()?;

    match cli.command {
        Commands::Init { path } => {
            init(&path, clock.now())?;
            println!("Initialized rota store at {}", path.display());
            Ok(())
        }
        Commands::Create { name } => {
            let service = ListService::new(FileSystemStore::discover()?, clock);
            let id = service.create(&name)?;
            println!("{}", id);
            Ok(())
        }
        Commands::Lists => {
            let service = ListService::new(FileSystemStore::discover()?, clock);
            print!("{}", format_list_summaries(&service.list()?));
            Ok(())
        }
        Commands::Show { id } => {
            let store = FileSystemStore::discover()?;
            let policy = store.load_config()?.future_anchor;
            let service = RotationService::new(store, clock, policy);
            print!("{}", format_list_view(&service.view(&id)?));
            Ok(())
        }
        Commands::Add { id, person } => {
            let service = PeopleService::new(FileSystemStore::discover()?);
            match service.add(&id, &person)? {
                AddOutcome::Added => println!("Added {}", person.trim()),
                AddOutcome::AlreadyPresent => {
                    println!("{} is already in the list", person.trim())
                }
            }
            Ok(())
        }
        Commands::Remove { id, index } => {
            let service = PeopleService::new(FileSystemStore::discover()?);
            let removed = service.remove(&id, index)?;
            println!("Removed {}", removed);
            Ok(())
        }
        Commands::Move {
            id,
            index,
            direction,
        } => {
            let direction = MoveDirection::from_str(&direction).map_err(RotaError::Config)?;
            let service = PeopleService::new(FileSystemStore::discover()?);
            if !service.move_person(&id, index, direction)? {
                let end = match direction {
                    MoveDirection::Up => "top",
                    MoveDirection::Down => "bottom",
                };
                println!("Already at the {}", end);
            }
            Ok(())
        }
        Commands::Delete { id } => {
            let service = ListService::new(FileSystemStore::discover()?, clock);
            service.delete(&id)?;
            println!("Deleted {}", id);
            Ok(())
        }
        Commands::Week { date } => {
            let info = match date {
                Some(text) => {
                    let date = NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                        .map_err(|_| RotaError::InvalidDateTime(text.clone()))?;
                    derive_week_info_for_date(date)
                }
                None => derive_week_info(clock.now()),
            };
            println!("{}", info.band());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let service = ConfigService::new(FileSystemStore::discover()?);

            if list {
                let config = service.list()?;
                println!("future_anchor = {}", config.future_anchor);
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: rota config [--list | <key> [<value>]]");
                println!("Valid keys: future_anchor, created");
                Ok(())
            }
        }
    }
}
