use std::env;
use std::process;
use std::str::FromStr;
use std::time::{Duration, Instant};

use clap::{App, Arg, ArgMatches};
use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use separator::Separatable;

use stack_sort_solver::board::Board;
use stack_sort_solver::config::{Limits, Shape, DEFAULT_CATEGORIES};
use stack_sort_solver::data::Category;
use stack_sort_solver::solution_formatter::SolutionFormatter;
use stack_sort_solver::solver::Outcome;
use stack_sort_solver::{LoadBoard, Solve};

fn main() {
    env_logger::init();

    let default_categories = DEFAULT_CATEGORIES
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(",");

    let matches = App::new("stack-sort-solver")
        .version("0.1")
        .about("Sorts every column of a grid of items by size using compound neighbor swaps")
        .arg(
            Arg::with_name("shape")
                .short("s")
                .long("shape")
                .takes_value(true)
                .value_name("ROWSxCOLS")
                .default_value("3x10")
                .help("dimensions of a generated board"),
        )
        .arg(
            Arg::with_name("categories")
                .short("c")
                .long("categories")
                .takes_value(true)
                .value_name("LABELS")
                .default_value(&default_categories)
                .help("comma separated single character item labels"),
        )
        .arg(
            Arg::with_name("seed")
                .long("seed")
                .takes_value(true)
                .value_name("N")
                .help("seed for generating the board (random if omitted)"),
        )
        .arg(
            Arg::with_name("max-expansions")
                .short("m")
                .long("max-expansions")
                .takes_value(true)
                .value_name("N")
                .help("give up after expanding this many states"),
        )
        .arg(
            Arg::with_name("timeout")
                .short("t")
                .long("timeout")
                .takes_value(true)
                .value_name("SECS")
                .help("give up after this many seconds"),
        )
        .arg(
            Arg::with_name("status")
                .long("status")
                .help("print stats whenever a new depth is reached"),
        )
        .arg(
            Arg::with_name("file")
                .conflicts_with("seed")
                .help("load the board from a file instead of generating one"),
        )
        .get_matches();

    let board = match matches.value_of("file") {
        Some(path) => path.load_board().unwrap_or_else(|err| {
            let current_dir = env::current_dir().unwrap_or_default();
            println!(
                "Can't load board {} in {}: {}",
                path,
                current_dir.display(),
                err
            );
            process::exit(1);
        }),
        None => generate_board(&matches),
    };

    let limits = Limits {
        max_expansions: parse_arg(&matches, "max-expansions"),
        max_time: parse_arg(&matches, "timeout").map(Duration::from_secs),
    };
    debug!("Limits: {:?}", limits);

    println!("{}", board);
    println!("Solving...");
    let started = Instant::now();
    let solver_ok = board.solve(limits, matches.is_present("status"));
    debug!(
        "Search took {} ms",
        (started.elapsed().as_millis() as u64).separated_string()
    );

    println!("{}", solver_ok.stats);
    match solver_ok.outcome {
        Outcome::Solved(ref solution) => {
            println!("Found solution:");
            println!("{}", SolutionFormatter::new(&board, solution));
        }
        Outcome::NoSolution => println!("No solution"),
        Outcome::LimitReached => println!("Search limit reached"),
    }
}

fn generate_board(matches: &ArgMatches<'_>) -> Board {
    let shape: Shape = parse_arg(matches, "shape").unwrap_or_default();
    let categories = matches
        .value_of("categories")
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(|label| {
            let mut chars = label.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => Category(c),
                _ => {
                    println!("Category labels must be single characters, got '{}'", label);
                    process::exit(1);
                }
            }
        })
        .collect::<Vec<_>>();

    let mut rng = match parse_arg(matches, "seed") {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    Board::random(&categories, shape, &mut rng).unwrap_or_else(|err| {
        println!("Can't generate board: {}", err);
        process::exit(1);
    })
}

fn parse_arg<T>(matches: &ArgMatches<'_>, name: &str) -> Option<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    matches.value_of(name).map(|value| {
        value.parse().unwrap_or_else(|err| {
            println!("Invalid value '{}' for --{}: {}", value, name, err);
            process::exit(1);
        })
    })
}
