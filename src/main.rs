mod calc;
mod cli;

use cli::{plot::Plotter, report::Record, table::Table};

fn main() {
    let matches = cli::app().get_matches();

    let mut errs = Record::new();
    let habit = cli::read_habit(&matches, &mut errs);
    let target = habit.and_then(|h| cli::read_target(&matches, &h, &mut errs));
    print!("{}", errs);
    let habit = match habit {
        Some(habit) if !errs.is_fatal() => habit,
        _ => std::process::exit(1),
    };

    let projection = habit.project();
    let target_projection = target.map(|t| t.project());

    let mut table = Table::from(&projection).with_title("Projected spending");
    if let Some(target) = &target_projection {
        table = table.with_target(target);
    }
    println!("{}", table);

    if let Some(file) = matches.value_of("plot") {
        let mut plotter = Plotter::from(&projection);
        if let Some(target) = &target_projection {
            plotter = plotter.with_target(target);
        }
        if let Err(e) = plotter.save_yearly(file) {
            let mut errs = Record::new();
            errs.make("Cannot write plot")
                .arg("plot", file)
                .text(format!("{}", e))
                .hint("check that the parent directory exists and is writable");
            print!("{}", errs);
            std::process::exit(1);
        }
    }
}
