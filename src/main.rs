// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line driver for the sample traversals.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Instant;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lazy_dfs::engine::{depth_limit, DfsError, IterativeDfs};
use lazy_dfs::samples::rpg::{self, AttributeTable};
use lazy_dfs::samples::t9::{self, T9Keyboard, T9Matcher};
use lazy_dfs::samples::{
    balanced_tree, branch_to_string, load_dictionary, BranchNames, TreeChildren, TreeNode,
};
use lazy_dfs::views::{EnumerableDfs, RecursiveDfs, StackedDfs};

#[derive(Parser, Debug)]
#[command(name = "dfs", version, about = "Depth-first traversal of implicit trees")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Traverse a balanced tree and time each traversal strategy.
    Tree {
        /// Children per inner node.
        #[arg(long, default_value_t = 3)]
        children: usize,
        /// Nodes on every root-to-leaf path.
        #[arg(long, default_value_t = 10)]
        depth: usize,
        /// Depth limit; 0 or less is unlimited.
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        max_depth: i64,
        #[arg(long, value_enum, default_value_t = Strategy::All)]
        strategy: Strategy,
        /// Print every branch found by the first strategy run.
        #[arg(long)]
        print: bool,
    },
    /// List dictionary words matching keypad digits.
    T9 {
        digits: String,
        /// Dictionary, one word per line.
        #[arg(long)]
        dict: PathBuf,
        /// Use the lazy iterator instead of the background worker.
        #[arg(long)]
        lazy: bool,
    },
    /// Find words spelled by the initials of attribute names.
    Rpg {
        /// Dictionary, one word per line.
        #[arg(long)]
        dict: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Strategy {
    Iterative,
    Enumerable,
    Recursive,
    Stacked,
    All,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), DfsError> {
    match cli.command {
        Command::Tree {
            children,
            depth,
            max_depth,
            strategy,
            print,
        } => {
            let tree = balanced_tree(children, depth);
            run_tree(&tree, depth_limit(max_depth), strategy, print);
            Ok(())
        }
        Command::T9 { digits, dict, lazy } => run_t9(&digits, dict, lazy),
        Command::Rpg { dict } => {
            let dictionary = load_dictionary(&dict)?;
            let report = rpg::find_words(AttributeTable::default(), &dictionary);
            for found in &report.found {
                println!("{} {}", found.word, found.abbreviation);
            }
            println!("Total: {}", report.total);
            println!("Found: {}", report.found.len());
            Ok(())
        }
    }
}

fn run_tree(tree: &TreeNode, max_depth: Option<usize>, strategy: Strategy, print: bool) {
    let root = Some(tree);
    let strategies = match strategy {
        Strategy::All => vec![
            Strategy::Recursive,
            Strategy::Iterative,
            Strategy::Enumerable,
            Strategy::Stacked,
        ],
        one => vec![one],
    };

    let mut printed = !print;
    for strategy in strategies {
        let start = Instant::now();
        let branches: Vec<String> = match strategy {
            Strategy::Iterative => {
                let mut dfs =
                    IterativeDfs::new(root, TreeChildren, BranchNames::default(), max_depth);
                match dfs.run_to_completion() {
                    Ok(_) => {}
                    Err(err) => match err.into_infallible() {},
                }
                dfs.into_result_sink().names
            }
            Strategy::Enumerable => EnumerableDfs::new(root, TreeChildren, max_depth)
                .map(|branch| branch_to_string(&branch))
                .collect(),
            Strategy::Recursive => {
                let mut dfs =
                    RecursiveDfs::new(root, TreeChildren, BranchNames::default(), max_depth);
                match dfs.run() {
                    Ok(()) => {}
                    Err(never) => match never {},
                }
                dfs.into_result_sink().names
            }
            Strategy::Stacked => StackedDfs::new(root, TreeChildren, max_depth)
                .map(|branch| branch_to_string(&branch))
                .collect(),
            Strategy::All => Vec::new(),
        };
        let elapsed = start.elapsed();
        println!(
            "{:?} took {} ms ({} branches)",
            strategy,
            elapsed.as_millis(),
            branches.len()
        );
        if !printed {
            for branch in &branches {
                println!("{branch}");
            }
            printed = true;
        }
    }
}

fn run_t9(digits: &str, dict: PathBuf, lazy: bool) -> Result<(), DfsError> {
    let keys = T9Keyboard::standard().translate(digits);
    let matcher = T9Matcher::from_file(&dict)?;
    info!(keys = keys.len(), words = matcher.len(), "t9 lookup");

    if lazy {
        for word in matcher.words(&keys) {
            println!("{word}");
        }
        return Ok(());
    }

    let cancel = Arc::new(AtomicBool::new(false));
    let handle = t9::start_getting_words(
        Arc::new(matcher),
        keys,
        |word| println!("{word}"),
        cancel,
    );
    match handle.join() {
        Ok(result) => result.map(|matches| info!(matches, "t9 lookup done")),
        Err(panic) => std::panic::resume_unwind(panic),
    }
}
