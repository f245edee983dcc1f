use anyhow::{Context, Result};
use chrono::{Local, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use meet_board::catalog::{AgeClass, Sport};
use meet_board::config::Config;
use meet_board::eligibility::allowed_sports_by_name;
use meet_board::leaderboard::{aggregate, last_updated};
use meet_board::output;
use meet_board::records::{
    apply_edit, filter_entries, load_store, prepare_submission, save_store, EditError,
    EntryEdit, EntryFilter, PositionSlot, RecordId, ResultSheet,
};
use meet_board::scoring::{points_by_name, ScoringTable};

const EXIT_SUCCESS: i32 = 0;
const EXIT_VALIDATION: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Show team standings (default if no subcommand)
    Leaderboard {
        /// Tab-separated output for scripting
        #[arg(long)]
        tsv: bool,
    },
    /// List the sports an age class may enter
    Sports {
        /// Age class, e.g. "Men - Veteran (45+)"
        age_class: String,
    },
    /// Show the points for a finishing position
    Points {
        sport: String,
        position: u32,
    },
    /// Record results for one sport in one age class
    Submit {
        #[arg(long)]
        age_class: String,
        #[arg(long)]
        sport: String,
        /// 1st place as TEAM, TEAM:PLAYER or :PLAYER for an individual
        #[arg(long, value_name = "TEAM[:PLAYER]")]
        first: Option<String>,
        #[arg(long, value_name = "TEAM[:PLAYER]")]
        second: Option<String>,
        #[arg(long, value_name = "TEAM[:PLAYER]")]
        third: Option<String>,
        #[arg(long, value_name = "TEAM[:PLAYER]")]
        fourth: Option<String>,
    },
    /// Correct a stored entry; points are recomputed
    Edit {
        id: RecordId,
        /// New team (empty string makes it an individual entry)
        #[arg(long)]
        team: Option<String>,
        /// New player name (empty string clears it)
        #[arg(long)]
        player: Option<String>,
        /// New position (1-4)
        #[arg(long)]
        position: Option<String>,
    },
    /// Delete a stored entry
    Delete { id: RecordId },
    /// List stored entries, newest first
    Entries {
        #[arg(long)]
        age_class: Option<String>,
        #[arg(long)]
        sport: Option<String>,
    },
    /// Print the leaderboard as a message ready to paste into a group chat
    Share,
    /// Write entries to a CSV file
    Export {
        #[arg(long)]
        age_class: Option<String>,
        #[arg(long)]
        sport: Option<String>,
        /// Output file (defaults to leaderboard_entries_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(name = "meet-board")]
#[command(about = "Results desk and live leaderboard for a sports meet", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/meet-board/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Path to the entries file (overrides data_file from the config)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Everything a command needs, resolved once at startup.
struct Desk {
    config: Config,
    table: ScoringTable,
    data_path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    meet_board::logging::init_cli_logger(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Leaderboard { tsv: false });

    let config = match meet_board::config::load_config(cli.config.map(PathBuf::from)) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = meet_board::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let data_path = match cli.data.or_else(|| config.data_file.clone()) {
        Some(p) => p,
        None => match meet_board::records::get_store_path() {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {:#}", e);
                std::process::exit(EXIT_CONFIG);
            }
        },
    };
    debug!(path = %data_path.display(), teams = config.teams.len(), "Config loaded");

    let table = config
        .scoring
        .as_ref()
        .map(|s| s.to_table())
        .unwrap_or_default();

    let desk = Desk {
        config,
        table,
        data_path,
    };

    let code = match run(&desk, command) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_CONFIG
        }
    };
    std::process::exit(code);
}

fn run(desk: &Desk, command: Commands) -> Result<i32> {
    match command {
        Commands::Leaderboard { tsv } => show_leaderboard(desk, tsv),
        Commands::Sports { age_class } => {
            if AgeClass::from_name(&age_class).is_none() && !age_class.trim().is_empty() {
                warn!("'{}' is not a known age class, showing the full catalog", age_class);
            }
            println!("{}", output::format_sport_list(&allowed_sports_by_name(&age_class)));
            Ok(EXIT_SUCCESS)
        }
        Commands::Points { sport, position } => {
            if Sport::from_name(&sport).is_none() {
                warn!("'{}' is not in the sport catalog", sport);
            }
            println!("{}", points_by_name(&desk.table, &sport, Some(position)));
            Ok(EXIT_SUCCESS)
        }
        Commands::Submit {
            age_class,
            sport,
            first,
            second,
            third,
            fourth,
        } => {
            let sheet = ResultSheet {
                age_class: Some(age_class),
                sport: Some(sport),
                slots: [
                    parse_slot(first.as_deref()),
                    parse_slot(second.as_deref()),
                    parse_slot(third.as_deref()),
                    parse_slot(fourth.as_deref()),
                ],
            };
            submit(desk, &sheet)
        }
        Commands::Edit {
            id,
            team,
            player,
            position,
        } => edit(
            desk,
            id,
            &EntryEdit {
                team,
                player,
                position,
            },
        ),
        Commands::Delete { id } => delete(desk, id),
        Commands::Entries { age_class, sport } => {
            let filter = match parse_filter(age_class.as_deref(), sport.as_deref()) {
                Ok(f) => f,
                Err(msg) => {
                    eprintln!("{}", msg);
                    return Ok(EXIT_VALIDATION);
                }
            };
            let store = load_store(&desk.data_path)?;
            let entries = filter_entries(store.entries_newest_first(), &filter);
            println!(
                "{}",
                output::format_entries_table(&entries, output::should_use_colors())
            );
            Ok(EXIT_SUCCESS)
        }
        Commands::Share => {
            let store = load_store(&desk.data_path)?;
            let standings = aggregate(&store.entries_newest_first());
            print!(
                "{}",
                output::format_share_message(
                    &desk.config.meet.title,
                    &standings,
                    Local::now(),
                    desk.config.meet.portal_url.as_deref(),
                )
            );
            println!();
            Ok(EXIT_SUCCESS)
        }
        Commands::Export {
            age_class,
            sport,
            output: out,
        } => {
            let filter = match parse_filter(age_class.as_deref(), sport.as_deref()) {
                Ok(f) => f,
                Err(msg) => {
                    eprintln!("{}", msg);
                    return Ok(EXIT_VALIDATION);
                }
            };
            let store = load_store(&desk.data_path)?;
            let entries = filter_entries(store.entries_newest_first(), &filter);
            if entries.is_empty() {
                eprintln!("No rows to export for current filters.");
                return Ok(EXIT_VALIDATION);
            }
            let path = out.unwrap_or_else(|| {
                PathBuf::from(output::default_export_file_name(Local::now().date_naive()))
            });
            let rows = output::export_entries_csv(&path, &entries)?;
            println!("Wrote {} entries to {}", rows, path.display());
            Ok(EXIT_SUCCESS)
        }
    }
}

fn show_leaderboard(desk: &Desk, tsv: bool) -> Result<i32> {
    let store = load_store(&desk.data_path)?;
    let entries = store.entries_newest_first();
    let standings = aggregate(&entries);

    if tsv {
        println!("{}", output::format_tsv(&standings));
        return Ok(EXIT_SUCCESS);
    }

    let use_colors = output::should_use_colors();
    println!("{}", desk.config.meet.title);
    println!();
    println!("{}", output::format_leaderboard(&standings, use_colors));
    println!();
    match last_updated(&entries) {
        Some(at) => println!(
            "Last update: {} ({} ago)",
            at.with_timezone(&Local).format("%d %b %Y, %H:%M"),
            output::format_age(Utc::now() - at)
        ),
        None => println!("Last update: -"),
    }
    Ok(EXIT_SUCCESS)
}

fn submit(desk: &Desk, sheet: &ResultSheet) -> Result<i32> {
    let placements = match prepare_submission(sheet, &desk.config.teams, &desk.table, Utc::now())
    {
        Ok(p) => p,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(EXIT_VALIDATION);
        }
    };

    let mut store = load_store(&desk.data_path)?;
    let ids = store.insert_all(placements);
    save_store(&desk.data_path, &store)?;

    info!(count = ids.len(), "Results submitted");
    println!("Results submitted ({} entries).", ids.len());
    print_entries(&store.entries_newest_first(), &ids);
    Ok(EXIT_SUCCESS)
}

fn edit(desk: &Desk, id: RecordId, change: &EntryEdit) -> Result<i32> {
    let mut store = load_store(&desk.data_path)?;
    let record = match store.get(id) {
        Some(r) => r.clone(),
        None => {
            eprintln!("{}", EditError::NotFound(id));
            return Ok(EXIT_VALIDATION);
        }
    };

    let updated = match apply_edit(&record, change, &desk.config.teams, &desk.table) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{}", e);
            return Ok(EXIT_VALIDATION);
        }
    };

    store.update(updated);
    save_store(&desk.data_path, &store)?;

    info!(id, "Entry updated");
    println!("Updated.");
    print_entries(&store.entries_newest_first(), &[id]);
    Ok(EXIT_SUCCESS)
}

fn delete(desk: &Desk, id: RecordId) -> Result<i32> {
    let mut store = load_store(&desk.data_path)?;
    if !store.remove(id) {
        eprintln!("{}", EditError::NotFound(id));
        return Ok(EXIT_VALIDATION);
    }
    save_store(&desk.data_path, &store)
        .with_context(|| format!("Entry {} was not deleted", id))?;

    info!(id, "Entry deleted");
    println!("Deleted.");
    Ok(EXIT_SUCCESS)
}

fn print_entries(entries: &[meet_board::PlacementRecord], ids: &[RecordId]) {
    let touched: Vec<_> = entries
        .iter()
        .filter(|e| ids.contains(&e.id))
        .cloned()
        .collect();
    println!(
        "{}",
        output::format_entries_table(&touched, output::should_use_colors())
    );
}

/// "Mandi" -> team only, "Mandi:Asha" -> team and player, ":Asha" -> individual
fn parse_slot(value: Option<&str>) -> PositionSlot {
    match value {
        None => PositionSlot::default(),
        Some(v) => match v.split_once(':') {
            Some((team, player)) => PositionSlot::new(Some(team), Some(player)),
            None => PositionSlot::new(Some(v), None),
        },
    }
}

fn parse_filter(age_class: Option<&str>, sport: Option<&str>) -> Result<EntryFilter, String> {
    let age_class = match age_class {
        Some(name) => Some(
            AgeClass::from_name(name).ok_or_else(|| format!("Unknown age class '{}'.", name))?,
        ),
        None => None,
    };
    let sport = match sport {
        Some(name) => {
            Some(Sport::from_name(name).ok_or_else(|| format!("Unknown sport '{}'.", name))?)
        }
        None => None,
    };
    Ok(EntryFilter { age_class, sport })
}
