use std::path::{Path, PathBuf};
use std::process::ExitCode;

use chrono::{FixedOffset, NaiveDate, NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};

use lunar_convert::{alias, convert, logging, CalendarIndex, CommonNames, SensitiveWords};

#[derive(Parser)]
#[command(
    name = "lunar_convert",
    about = "Gregorian to Chinese lunar calendar converter"
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert a Gregorian civil date to its lunar date (JSON output)
    Convert {
        /// Civil date, e.g. "2000-02-05"
        date: String,
        /// Time of day, e.g. "08:30:00"
        #[arg(long, default_value = "00:00:00")]
        time: String,
        /// UTC offset of the civil date in hours (+8 is the reference
        /// frame of the lunar epoch)
        #[arg(long, default_value_t = 8)]
        utc_offset: i32,
    },
    /// Show the decoded month table of one lunar year
    Year {
        /// Lunar year, 1900..=2100
        year: i32,
    },
    /// Check whether a given name is on the common-names list
    Name {
        /// Name to look up
        name: String,
        /// Directory holding the list/ subdirectory
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
    /// List sensitive-word alternates recorded for a pinyin key
    Word {
        /// Pinyin key to look up
        pinyin: String,
        /// Directory holding the list/ subdirectory
        #[arg(long, default_value = ".")]
        data_dir: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Command::Convert {
            date,
            time,
            utc_offset,
        } => run_convert(&date, &time, utc_offset),
        Command::Year { year } => run_year(year),
        Command::Name { name, data_dir } => run_name(&name, &data_dir),
        Command::Word { pinyin, data_dir } => run_word(&pinyin, &data_dir),
    }
}

fn run_convert(date: &str, time: &str, utc_offset: i32) -> ExitCode {
    let date = match NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Cannot parse date {date:?} (expected YYYY-MM-DD): {e}");
            return ExitCode::FAILURE;
        }
    };
    let time = match NaiveTime::parse_from_str(time, "%H:%M:%S") {
        Ok(t) => t,
        Err(e) => {
            eprintln!("Cannot parse time {time:?} (expected HH:MM:SS): {e}");
            return ExitCode::FAILURE;
        }
    };
    let Some(offset) = FixedOffset::east_opt(utc_offset * 3600) else {
        eprintln!("UTC offset {utc_offset} is out of range");
        return ExitCode::FAILURE;
    };
    let instant = match offset.from_local_datetime(&date.and_time(time)).single() {
        Some(t) => t.with_timezone(&Utc),
        None => {
            eprintln!("Ambiguous local datetime");
            return ExitCode::FAILURE;
        }
    };

    let index = CalendarIndex::build();
    match convert(instant, &index) {
        Ok(lunar) => {
            let json = serde_json::to_string_pretty(&lunar).expect("JSON serialization failed");
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run_year(year: i32) -> ExitCode {
    let index = CalendarIndex::build();
    let Some(rec) = index.get(year) else {
        eprintln!(
            "Year {year} is outside the table ({}..={})",
            index.first_year(),
            index.last_year()
        );
        return ExitCode::FAILURE;
    };

    println!(
        "{} ({}年): {} months, {} days",
        rec.year,
        alias::sexagenary_alias(rec.year),
        rec.months(),
        rec.total_days
    );

    let mut month = 0u32;
    for (i, &days) in rec.month_days.iter().enumerate() {
        let is_leap_slot = rec.leap_month > 0 && i as u32 == rec.leap_month;
        if !is_leap_slot {
            month += 1;
        }
        let marker = if is_leap_slot { "闰" } else { "" };
        println!("  {}{}月: {} days", marker, alias::month_alias(month), days);
    }

    ExitCode::SUCCESS
}

fn run_name(name: &str, data_dir: &Path) -> ExitCode {
    let names = match CommonNames::load(data_dir) {
        Ok(n) => n,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    if names.query(name) > 0 {
        println!("{name}: common ({} names listed)", names.len());
    } else {
        println!("{name}: not listed");
    }
    ExitCode::SUCCESS
}

fn run_word(pinyin: &str, data_dir: &Path) -> ExitCode {
    let words = match SensitiveWords::load(data_dir) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let alternates = words.query(pinyin);
    if alternates.is_empty() {
        println!("{pinyin}: no entry");
    } else {
        println!("{pinyin}: {}", alternates.join(", "));
    }
    ExitCode::SUCCESS
}
