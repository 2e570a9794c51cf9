//! Terminal frontend for the habit store.
//!
//! # Responsibility
//! - Render the 7-day habit table with streaks to stdout.
//! - Drive store mutations from command-line arguments.
//!
//! # Invariants
//! - This layer never mutates habit state directly; every change goes
//!   through `HabitService` operations.
//! - Rows are addressed by 1-based display position, resolved to stable
//!   habit ids before any mutation.

use chrono::NaiveDate;
use directories::ProjectDirs;
use habitgrid_core::db::open_db;
use habitgrid_core::{
    default_log_level, init_logging, window, HabitService, SqliteSnapshotRepository,
};
use std::process::ExitCode;

const WINDOW_DAYS: usize = 7;

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let Some(dirs) = ProjectDirs::from("", "", "habitgrid") else {
        eprintln!("error: could not determine a data directory for this platform");
        return ExitCode::FAILURE;
    };
    let data_dir = dirs.data_dir();
    if let Err(err) = std::fs::create_dir_all(data_dir) {
        eprintln!("error: could not create {}: {err}", data_dir.display());
        return ExitCode::FAILURE;
    }

    // Logging failures are reported but never block the frontend.
    let log_dir = data_dir.join("logs");
    if let Err(err) = init_logging(default_log_level(), &log_dir.to_string_lossy()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let conn = match open_db(data_dir.join("habitgrid.db")) {
        Ok(conn) => conn,
        Err(err) => {
            eprintln!("error: could not open habit database: {err}");
            return ExitCode::FAILURE;
        }
    };

    let repo = SqliteSnapshotRepository::new(&conn);
    let mut service = HabitService::load_or_init(repo);

    match parse_command(&args) {
        Command::List => {}
        Command::Add(name) => {
            if service.add(&name).is_none() {
                // Blank input is a silent no-op in the store; the frontend
                // still tells the user nothing happened.
                println!("nothing added: habit name is empty");
            }
        }
        Command::Done(row) => {
            apply_toggle(&mut service, row, habitgrid_core::today());
        }
        Command::Toggle(row, date) => {
            let today = habitgrid_core::today();
            let date = date.unwrap_or(today);
            if !window(today, WINDOW_DAYS).contains(&date) {
                println!("ignored: {date} is outside the current {WINDOW_DAYS}-day window");
            } else {
                apply_toggle(&mut service, row, date);
            }
        }
        Command::Ignored(message) => println!("{message}"),
        Command::Remove(row) => match habit_id_at(&service, row) {
            Some(id) => service.delete(id),
            None => println!("no habit at row {row}"),
        },
        Command::Usage(message) => {
            if let Some(message) = message {
                eprintln!("{message}");
            }
            print_usage();
            return ExitCode::FAILURE;
        }
    }

    render_table(&service);
    ExitCode::SUCCESS
}

#[derive(Debug)]
enum Command {
    List,
    Add(String),
    Done(usize),
    /// Toggle with an explicit date, or today when omitted.
    Toggle(usize, Option<NaiveDate>),
    Remove(usize),
    /// User-input no-op: report, still render, exit 0.
    Ignored(String),
    Usage(Option<String>),
}

fn parse_command(args: &[String]) -> Command {
    let Some((verb, rest)) = args.split_first() else {
        return Command::List;
    };

    match verb.as_str() {
        "list" => Command::List,
        "add" => {
            let name = rest.join(" ");
            if name.trim().is_empty() {
                Command::Usage(Some("add requires a habit name".to_string()))
            } else {
                Command::Add(name)
            }
        }
        "done" => match parse_row(rest.first()) {
            Some(row) => Command::Done(row),
            None => Command::Usage(Some("done requires a row number".to_string())),
        },
        "toggle" => {
            let Some(row) = parse_row(rest.first()) else {
                return Command::Usage(Some("toggle requires a row number".to_string()));
            };
            match rest.get(1) {
                None => Command::Toggle(row, None),
                Some(raw_date) => match NaiveDate::parse_from_str(raw_date, "%Y-%m-%d") {
                    Ok(date) => Command::Toggle(row, Some(date)),
                    Err(_) => Command::Ignored(format!(
                        "ignored: invalid date `{raw_date}`; expected YYYY-MM-DD"
                    )),
                },
            }
        }
        "rm" => match parse_row(rest.first()) {
            Some(row) => Command::Remove(row),
            None => Command::Usage(Some("rm requires a row number".to_string())),
        },
        other => Command::Usage(Some(format!("unknown command `{other}`"))),
    }
}

fn parse_row(arg: Option<&String>) -> Option<usize> {
    arg.and_then(|raw| raw.parse::<usize>().ok())
        .filter(|row| *row >= 1)
}

fn habit_id_at<R: habitgrid_core::SnapshotRepository>(
    service: &HabitService<R>,
    row: usize,
) -> Option<habitgrid_core::HabitId> {
    service.habits().get(row - 1).map(|habit| habit.id)
}

fn apply_toggle<R: habitgrid_core::SnapshotRepository>(
    service: &mut HabitService<R>,
    row: usize,
    date: NaiveDate,
) {
    match habit_id_at(service, row) {
        Some(id) => {
            service.toggle(id, date);
        }
        None => println!("no habit at row {row}"),
    }
}

fn render_table<R: habitgrid_core::SnapshotRepository>(service: &HabitService<R>) {
    let today = habitgrid_core::today();
    let dates = window(today, WINDOW_DAYS);

    let name_width = service
        .habits()
        .iter()
        .map(|habit| habit.name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Habit".len());

    print!("   {:<name_width$}", "Habit");
    for date in &dates {
        let label = habitgrid_core::format_label(*date);
        let marker = if *date == today { "*" } else { " " };
        print!("  {label:>6}{marker}");
    }
    println!("  Streak");

    if service.habits().is_empty() {
        println!("   (no habits yet; `habitgrid add <name>` to get started)");
        return;
    }

    for (index, habit) in service.habits().iter().enumerate() {
        print!("{:>2} {:<name_width$}", index + 1, habit.name);
        for date in &dates {
            let cell = if habit.is_completed_on(*date) { "[x]" } else { "[ ]" };
            print!("  {cell:>6} ");
        }
        let streak = service.streak_for(habit.id, today).unwrap_or(0);
        println!("  {streak:>6}");
    }
}

fn print_usage() {
    eprintln!("usage: habitgrid [list]");
    eprintln!("       habitgrid add <name>");
    eprintln!("       habitgrid done <row>");
    eprintln!("       habitgrid toggle <row> [YYYY-MM-DD]");
    eprintln!("       habitgrid rm <row>");
}
