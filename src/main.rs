use anyhow::{ensure, Context, Result};
use clap::Parser;
use monitored_bst::{Order, Tree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "monitored-bst",
    about = "Build a search tree from random keys, unbalance it, then rebuild it"
)]
struct Cli {
    /// How many random keys to generate. Duplicates are dropped when the tree is built.
    #[arg(long, default_value_t = 10)]
    size: usize,
    /// Random keys are drawn from `0..max`.
    #[arg(long, default_value_t = 100)]
    max: i64,
    /// Seed for reproducible runs. A random seed is used when omitted.
    #[arg(long)]
    seed: Option<u64>,
    /// Traversal to print: in, pre, post or level.
    #[arg(long, default_value = "in")]
    order: Order,
    /// How many ascending keys to append above `max` before rebalancing.
    #[arg(long, default_value_t = 5)]
    append: usize,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    ensure!(cli.max > 0, "--max must be positive, got {}", cli.max);

    let seed = cli.seed.unwrap_or_else(rand::random);
    info!(seed, size = cli.size, max = cli.max, "generating keys");
    let mut rng = StdRng::seed_from_u64(seed);
    let keys: Vec<i64> = (0..cli.size).map(|_| rng.gen_range(0..cli.max)).collect();

    let mut tree = Tree::from_keys(keys);
    report(&tree, cli.order);

    let appended = i64::try_from(cli.append).context("--append is too large")?;
    tree.extend(cli.max..cli.max + appended);
    println!("after appending {appended} keys from {}:", cli.max);
    report(&tree, cli.order);

    tree.rebalance();
    println!("after rebalancing:");
    report(&tree, cli.order);

    Ok(())
}

fn report(tree: &Tree<i64>, order: Order) {
    print!("{tree}");

    let mut keys = Vec::with_capacity(tree.len());
    tree.traverse(order, |node| keys.push(node.key().to_string()));
    println!("{order}-order: [{}]", keys.join(", "));
    println!(
        "keys: {}, height: {}, balanced: {}\n",
        tree.len(),
        tree.root().map_or(-1, |root| root.height() as isize),
        tree.is_balanced()
    );
}
