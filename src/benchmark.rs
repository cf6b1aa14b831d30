use anyhow::{Result, ensure};
use clap::{Parser, ValueEnum};
use ordered_tree::{OrderedTree, TreeOps};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use std::process;
use std::time::Instant;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum InsertOrder {
    Ascending,
    Descending,
    Shuffled,
}

#[derive(Parser)]
#[command(name = "tree-benchmark")]
#[command(about = "A tree performance testing tool")]
struct Args {
    #[arg(long, default_value = "100000")]
    size: u64,

    #[arg(long, value_enum, default_value = "shuffled")]
    order: InsertOrder,

    /// Seed for the shuffled order
    #[arg(long, default_value = "42")]
    seed: u64,

    /// Raise log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn values(args: &Args) -> Vec<u64> {
    let mut values: Vec<u64> = (0..args.size).collect();
    match args.order {
        InsertOrder::Ascending => {}
        InsertOrder::Descending => values.reverse(),
        InsertOrder::Shuffled => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(args.seed);
            values.shuffle(&mut rng);
        }
    }
    values
}

fn run(args: &Args) -> Result<()> {
    let values = values(args);
    let mut tree: OrderedTree<u64> = OrderedTree::new();

    println!(
        "Running with {:?} order and {} node count",
        args.order, args.size
    );

    let start = Instant::now();
    for (i, &value) in values.iter().enumerate() {
        ensure!(tree.len() == i, "size {} after {} inserts", tree.len(), i);
        ensure!(tree.insert(value), "fresh value {value} was rejected");
    }
    let inserted = Instant::now();
    info!(len = tree.len(), "inserted all values");

    for value in &values {
        ensure!(tree.search(value), "inserted value {value} not found");
        ensure!(!tree.insert(*value), "duplicate {value} was accepted");
    }
    ensure!(
        !tree.search(&args.size),
        "value {} was never inserted",
        args.size
    );
    let searched = Instant::now();

    let height = tree.height();
    let measured = Instant::now();
    debug!(height, "measured height");

    let mut expected = 0;
    let mut ordered = true;
    tree.traverse(|value| {
        ordered &= *value == expected;
        expected += 1;
    });
    ensure!(
        ordered && expected == args.size,
        "traversal did not yield every value in ascending order"
    );
    let end = Instant::now();

    println!("Tree height is {height}");
    println!(
        "Inserts took {} seconds",
        inserted.saturating_duration_since(start).as_secs_f32()
    );
    println!(
        "Searches took {} seconds",
        searched.saturating_duration_since(inserted).as_secs_f32()
    );
    println!(
        "Height took {} seconds",
        measured.saturating_duration_since(searched).as_secs_f32()
    );
    println!(
        "Traversal took {} seconds",
        end.saturating_duration_since(measured).as_secs_f32()
    );
    println!(
        "Total {} seconds",
        end.saturating_duration_since(start).as_secs_f32()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
