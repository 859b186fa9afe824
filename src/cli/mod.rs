//! The command-line collaborator
//!
//! Everything user-facing lives here: argument parsing, input validation
//! reports, table rendering and the optional plot. The calculator core
//! never prints anything.

pub mod plot;
pub mod report;
pub mod table;

use clap::{App, Arg, ArgMatches};

use crate::calc::habit::Habit;
use report::Record;

pub fn app() -> App<'static, 'static> {
    App::new("humo")
        .version(clap::crate_version!())
        .about("Projects cigarette spending over a day, a week, a month and a year")
        .arg(
            Arg::with_name("price")
                .help("Price of one pack")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("per-pack")
                .help("Number of cigarettes in one pack")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::with_name("per-day")
                .help("Number of cigarettes smoked per day")
                .required(true)
                .index(3),
        )
        .arg(
            Arg::with_name("target")
                .long("target")
                .short("t")
                .takes_value(true)
                .value_name("PER_DAY")
                .help("Compare against a reduced daily consumption"),
        )
        .arg(
            Arg::with_name("plot")
                .long("plot")
                .takes_value(true)
                .value_name("FILE")
                .help("Write the cumulative yearly cost as an SVG image"),
        )
}

/// Parse and validate the three positional inputs
///
/// All faults are recorded before giving up so that a command line with
/// several bad arguments is reported in full
pub fn read_habit(matches: &ArgMatches, errs: &mut Record) -> Option<Habit> {
    let price = read_number(matches, "price", errs);
    let per_pack = read_number(matches, "per-pack", errs);
    let per_day = read_number(matches, "per-day", errs);
    match (price, per_pack, per_day) {
        (Some(price), Some(per_pack), Some(per_day)) => {
            match Habit::new(price, per_pack, per_day) {
                Ok(habit) => Some(habit),
                Err(e) => {
                    errs.make("Invalid input")
                        .text(format!("{}", e))
                        .hint(e.fix_hint());
                    None
                }
            }
        }
        _ => None,
    }
}

/// Parse and validate the `--target` consumption, if requested
pub fn read_target(matches: &ArgMatches, habit: &Habit, errs: &mut Record) -> Option<Habit> {
    let per_day = match matches.value_of("target") {
        Some(_) => read_number(matches, "target", errs)?,
        None => return None,
    };
    match habit.with_per_day(per_day) {
        Ok(target) => {
            if target.per_day() > habit.per_day() {
                errs.make("Target exceeds current consumption")
                    .nonfatal()
                    .arg("target", per_day)
                    .text("the comparison is not a reduction, savings will be negative")
                    .hint("pick a target below the current daily consumption");
            }
            Some(target)
        }
        Err(e) => {
            errs.make("Invalid target")
                .text(format!("{}", e))
                .hint(e.fix_hint());
            None
        }
    }
}

/// Explicit string-to-number step, before any domain validation
fn read_number(matches: &ArgMatches, name: &'static str, errs: &mut Record) -> Option<f64> {
    let raw = matches.value_of(name).unwrap_or("");
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            errs.make("Invalid number")
                .arg(name, raw)
                .text(format!("'{}' cannot be read as a number", raw))
                .hint("write a plain decimal value, such as '7.15'");
            None
        }
    }
}
