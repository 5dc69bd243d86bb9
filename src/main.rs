use docopt::Docopt;
use error_chain::ChainedError;
use itertools::Itertools;
use log::info;
use serde_derive::Deserialize;
use maze_carver::{
    carving::EndpointTrimming,
    coordinates::GridCoordinate,
    generators::MazeGenerator,
    grid::MazeGrid,
    units::{ColumnIndex, ColumnsCount, RowIndex, RowsCount},
};
use std::{
    env,
    io,
    io::prelude::*,
    fs::File,
    path::Path,
    process,
};

const USAGE: &str = "Maze carver

Usage:
    maze_driver -h | --help
    maze_driver [--rows=<r>] [--columns=<c>] [--start-row=<sr> --start-column=<sc>] [--end-row=<er> --end-column=<ec>] [--seed=<s>] [--trim-start-end] [--out=<path>] [--verify]

Options:
    -h --help              Show this screen.
    --rows=<r>             Grid rows, odd and at least 3 [default: 21].
    --columns=<c>          Grid columns, odd and at least 3 [default: 21].
    --start-row=<sr>       Row of the start cell, must be even. Defaults to 0.
    --start-column=<sc>    Column of the start cell, must be even. Defaults to 0.
    --end-row=<er>         Row of the end cell, must be even. Defaults to the last row.
    --end-column=<ec>      Column of the end cell, must be even. Defaults to the last column.
    --seed=<s>             Seed the random number generator so the same maze can be made again.
    --trim-start-end       Leave exactly the start and end cells out of the output instead of the first and last cells carved.
    --out=<path>           Write the coordinates to a file instead of stdout.
    --verify               Check that the carved maze is a spanning tree before writing it out.
";
#[derive(Debug, Deserialize)]
struct DriverArgs {
    flag_rows: usize,
    flag_columns: usize,
    flag_start_row: Option<u32>,
    flag_start_column: Option<u32>,
    flag_end_row: Option<u32>,
    flag_end_column: Option<u32>,
    flag_seed: Option<u64>,
    flag_trim_start_end: bool,
    flag_out: String,
    flag_verify: bool,
}

mod errors {
    #![allow(deprecated)]
    use error_chain::*;
    error_chain! {

        links {
            Maze(::maze_carver::errors::Error, ::maze_carver::errors::ErrorKind);
        }

        foreign_links {
            Io(::std::io::Error);
        }
    }
}
use crate::errors::*;

fn main() {
    env_logger::init();

    // Help and usage errors print themselves; help exits 0, bad usage exits 1.
    let args = parse_args(env::args()).unwrap_or_else(|e| e.exit());

    if let Err(ref e) = run(&args) {
        eprint!("{}", e.display_chain());
        process::exit(1);
    }
}

fn parse_args<I, S>(argv: I) -> ::std::result::Result<DriverArgs, docopt::Error>
    where I: IntoIterator<Item = S>,
          S: AsRef<str>
{
    Docopt::new(USAGE).and_then(|d| d.argv(argv).deserialize())
}

fn run(args: &DriverArgs) -> Result<()> {
    let grid = MazeGrid::new(RowsCount(args.flag_rows), ColumnsCount(args.flag_columns))?;
    let start = GridCoordinate::from_indices(RowIndex(args.flag_start_row.unwrap_or(0)),
                                             ColumnIndex(args.flag_start_column.unwrap_or(0)));
    let end = GridCoordinate::from_indices(
        RowIndex(args.flag_end_row.unwrap_or(grid.rows().0 as u32 - 1)),
        ColumnIndex(args.flag_end_column.unwrap_or(grid.columns().0 as u32 - 1)));

    let trimming = if args.flag_trim_start_end {
        EndpointTrimming::StartAndEnd
    } else {
        EndpointTrimming::TraversalEnds
    };
    let mut generator = match args.flag_seed {
        Some(seed) => MazeGenerator::from_seed(seed),
        None => MazeGenerator::from_entropy(),
    }.with_trimming(trimming);

    let carving = generator.carve(&grid, start, end)?;
    if args.flag_verify {
        carving.verify()?;
        info!("verified {} cells form a spanning tree", carving.cells_count().0);
    }

    let walls = carving.walls(generator.trimming());
    info!("{} coordinates from {} to {}", walls.len(), start, end);

    let text = walls.iter()
        .map(|coord| format!("{} {}", coord.row, coord.column))
        .join("\n");
    if args.flag_out.is_empty() {
        println!("{}", text);
    } else {
        write_text_to_file(&text, &args.flag_out)
            .chain_err(|| format!("Failed to write maze to text file {}", args.flag_out))?;
    }

    Ok(())
}

fn write_text_to_file(data: &str, file_name: &str) -> io::Result<()> {
    let path = Path::new(file_name);
    let mut file = File::create(&path)?;
    file.write_all(data.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn args(argv: &[&str]) -> DriverArgs {
        let mut full = vec!["maze_driver"];
        full.extend_from_slice(argv);
        parse_args(full).expect("arguments should parse")
    }

    #[test]
    fn help_is_not_a_failure() {
        for flag in &["--help", "-h"] {
            let err = parse_args(vec!["maze_driver", *flag]).unwrap_err();
            assert!(!err.fatal());
        }
    }

    #[test]
    fn unknown_flags_are_usage_failures() {
        let err = parse_args(vec!["maze_driver", "--bogus"]).unwrap_err();
        assert!(err.fatal());
    }

    #[test]
    fn defaults() {
        let a = args(&[]);
        assert_eq!(a.flag_rows, 21);
        assert_eq!(a.flag_columns, 21);
        assert_eq!(a.flag_start_row, None);
        assert_eq!(a.flag_seed, None);
        assert!(!a.flag_verify);
        assert!(a.flag_out.is_empty());
    }

    #[test]
    fn even_rows_report_a_short_message() {
        let err = run(&args(&["--rows=4"])).unwrap_err();
        let report = format!("{}", err.display_chain());
        assert!(report.starts_with("Error: grid rows count 4 must be odd"));
    }

    #[test]
    fn odd_start_reports_a_short_message() {
        let err = run(&args(&["--start-row=1", "--start-column=0"])).unwrap_err();
        let report = format!("{}", err.display_chain());
        assert!(report.starts_with("Error: coordinate (1, 0) is not a real cell"));
    }

    #[test]
    fn writes_one_coordinate_per_line() {
        let out = env::temp_dir().join(format!("maze_driver_test_{}.txt", process::id()));
        let out_arg = format!("--out={}", out.display());
        run(&args(&["--rows=5", "--columns=7", "--seed=9", "--verify", &out_arg]))
            .expect("driver run failed");

        let text = fs::read_to_string(&out).expect("output file missing");
        let _ = fs::remove_file(&out);

        let lines = text.lines().collect::<Vec<_>>();
        // 12 real cells and 11 passages, less the first and last recorded
        assert_eq!(lines.len(), 12 + 11 - 2);
        assert!(lines.iter().all(|line| line.split(' ').count() == 2));
        assert!(!lines.contains(&"0 0"));
    }
}
