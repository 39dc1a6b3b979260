use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use engine::{Catalog, Simulation, SimulationConfig};

mod command;

use command::{Command, HELP};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = config_from_args(std::env::args().skip(1))?;
    log::info!("starting {}x{} board", config.rows, config.columns);

    let mut simulation = Simulation::new(config);
    let catalog = Catalog::builtin();

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "Welcome to Conway's Game of Life! Type `help` for commands.")?;
    write!(stdout, "{}", simulation.grid())?;

    let mut lines = stdin.lock().lines();
    loop {
        write!(stdout, "> ")?;
        stdout.flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match command::parse(&line) {
            Ok(command) => command,
            Err(err) => {
                writeln!(stdout, "error: {err:#}")?;
                continue;
            }
        };
        if command == Command::Quit {
            break;
        }

        match execute(&mut simulation, &catalog, &command) {
            Ok(message) => {
                if let Some(message) = message {
                    writeln!(stdout, "{message}")?;
                }
                if command.mutates() || command == Command::Show {
                    write!(stdout, "{}", simulation.grid())?;
                    writeln!(stdout, "Iteration # {}", simulation.iterations())?;
                }
            }
            Err(err) => writeln!(stdout, "error: {err:#}")?,
        }
    }

    Ok(())
}

fn config_from_args(mut args: impl Iterator<Item = String>) -> anyhow::Result<SimulationConfig> {
    let mut config = SimulationConfig::default();
    match (args.next(), args.next()) {
        (None, _) => {}
        (Some(rows), Some(columns)) => {
            config.rows = rows.parse().with_context(|| format!("invalid row count `{rows}`"))?;
            config.columns = columns
                .parse()
                .with_context(|| format!("invalid column count `{columns}`"))?;
        }
        (Some(_), None) => bail!("usage: cli [ROWS COLUMNS]"),
    }
    if config.rows == 0 || config.columns == 0 {
        bail!("the board needs at least one row and one column");
    }
    Ok(config)
}

fn execute(
    simulation: &mut Simulation,
    catalog: &Catalog,
    command: &Command,
) -> anyhow::Result<Option<String>> {
    let message = match command {
        Command::Run(iterations) => run_generations(simulation, *iterations),
        Command::Step => simulation.step().then(|| "halted".to_string()),
        Command::Set { row, col } => {
            check_cell(simulation, *row, *col)?;
            simulation.set(*row, *col, true);
            None
        }
        Command::Toggle { row, col } => {
            check_cell(simulation, *row, *col)?;
            simulation.toggle(*row, *col);
            None
        }
        Command::Paint { pattern, row, col } => {
            let pattern = catalog
                .get(pattern)
                .with_context(|| format!("unknown pattern `{pattern}`"))?;
            simulation.paint(pattern, *row, *col);
            None
        }
        Command::Erase { pattern, row, col } => {
            let pattern = catalog
                .get(pattern)
                .with_context(|| format!("unknown pattern `{pattern}`"))?;
            simulation.erase(pattern, *row, *col);
            None
        }
        Command::Clear => {
            simulation.clear();
            None
        }
        Command::Random => {
            simulation.randomize();
            None
        }
        Command::Patterns => {
            let names: Vec<_> = catalog
                .iter()
                .map(|pattern| format!("{} ({}x{})", pattern.name(), pattern.height(), pattern.width()))
                .collect();
            Some(names.join("\n"))
        }
        Command::Show | Command::Quit => None,
        Command::Help => Some(HELP.to_string()),
    };
    Ok(message)
}

/// Step up to `iterations` times, rendering every generation but the last, which the shell
/// prints after any mutating command.
fn run_generations(simulation: &mut Simulation, iterations: usize) -> Option<String> {
    let mut frames = Vec::new();
    for taken in 1..=iterations {
        let halted = simulation.step();
        if halted {
            frames.push(format!("halted after {taken} iterations"));
            break;
        }
        if taken < iterations {
            frames.push(format!("{}Iteration # {}", simulation.grid(), simulation.iterations()));
        }
    }
    (!frames.is_empty()).then(|| frames.join("\n"))
}

fn check_cell(simulation: &Simulation, row: usize, col: usize) -> anyhow::Result<()> {
    let grid = simulation.grid();
    if row >= grid.rows() || col >= grid.columns() {
        bail!(
            "cell ({row}, {col}) is outside the {}x{} board",
            grid.rows(),
            grid.columns()
        );
    }
    Ok(())
}
