use clap::Parser;
use memoir::application::{
    init, list_entries, ConfigService, ExportEntriesService, ExportOptions, ExportReportService,
    StatsService,
};
use memoir::cli::{format_entry_list, format_snapshot, Cli, Commands};
use memoir::domain::Period;
use memoir::error::MemoirError;
use memoir::infrastructure::FileJournalStore;
use chrono::NaiveDate;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), MemoirError> {
    match cli.command {
        Some(Commands::Init { path }) => init::init(&path),
        Some(Commands::Config { key, value, list }) => {
            let store = FileJournalStore::discover()?;
            let service = ConfigService::new(store);

            if list {
                let config = service.list()?;
                println!("default_period = {}", config.default_period);
                println!(
                    "export_dir = {}",
                    config
                        .export_dir
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_default()
                );
                println!("created = {}", config.created.to_rfc3339());
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: memoir config [--list | <key> [<value>]]");
                println!("Valid keys: default_period, export_dir, created");
                Ok(())
            }
        }
        Some(Commands::List { from, to, limit }) => {
            let store = FileJournalStore::discover()?;
            let from = parse_date_arg(from.as_deref())?;
            let to = parse_date_arg(to.as_deref())?;
            let entries = list_entries::list_entries(&store, from, to, limit)?;
            print!("{}", format_entry_list(&entries));
            Ok(())
        }
        Some(Commands::Stats { period }) => {
            let store = FileJournalStore::discover()?;
            let service = StatsService::new(store);
            let period = parse_period_arg(period.as_deref())?;
            let (snapshot, applied) = service.execute(period)?;
            print!("{}", format_snapshot(&snapshot, &applied.label()));
            Ok(())
        }
        Some(Commands::Export { ids, all, from, to }) => {
            if ids.is_empty() && !all {
                return Err(MemoirError::Export(
                    "nothing selected; pass --id <n> or --all".to_string(),
                ));
            }
            let store = FileJournalStore::discover()?;
            let service = ExportEntriesService::new(store);
            let options = ExportOptions {
                ids,
                all,
                from: parse_date_arg(from.as_deref())?,
                to: parse_date_arg(to.as_deref())?,
            };
            let path = service.execute(options)?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        Some(Commands::Report { period }) => {
            let store = FileJournalStore::discover()?;
            let service = ExportReportService::new(store);
            let period = parse_period_arg(period.as_deref())?;
            let path = service.execute(period)?;
            println!("Exported to {}", path.display());
            Ok(())
        }
        None => {
            println!("memoir - Journal analytics and PDF export");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}

fn parse_date_arg(arg: Option<&str>) -> Result<Option<NaiveDate>, MemoirError> {
    match arg {
        None => Ok(None),
        Some(raw) => NaiveDate::parse_from_str(raw, "%d-%m-%Y")
            .map(Some)
            .map_err(|_| MemoirError::Config(format!("Invalid date format: {}", raw))),
    }
}

fn parse_period_arg(arg: Option<&str>) -> Result<Option<Period>, MemoirError> {
    arg.map(Period::parse).transpose()
}
