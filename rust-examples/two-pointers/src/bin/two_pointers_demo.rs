//! Two-pointer demo: runs each algorithm over a handful of literal inputs
//!
//! Run with: cargo run --bin two_pointers_demo
//! Set `RUST_LOG=debug` to also see why a list removal was skipped.

use pointer_common::list::{display as render_list, list_from_slice};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use two_pointers::{find_zero_sum_triplets, is_palindrome_str, remove_nth_from_end};

const THREE_SUM_CASES: &[&[i32]] = &[
    &[-1, 0, 1, 2, -1, -4],
    &[0, 0, 0],
    &[],
    &[1, 2, -2, -1],
    &[-2, 0, 1, 1, 2],
    &[-4, -2, -2, -2, 0, 1, 2, 2, 2, 3, 3, 4, 4, 6, 6],
    &[-5, 1, 10, -1, -2, 3, 4, -3, 0],
    &[-10, 5, 2, 4, -4, -5, 0, 0],
];

const LIST_VALUES: [i32; 5] = [1, 2, 3, 4, 5];
const REMOVAL_POSITIONS: [i32; 3] = [2, 5, 6];
const PALINDROME_WORDS: [&str; 3] = ["racecar", "abab", "madam"];

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .try_init()?;
    Ok(())
}

/// Renders the list before and after removing the `n`-th node from the end.
fn removal_report(values: &[i32], n: i32) -> (String, String) {
    let list = list_from_slice(values);
    let before = render_list(&list).to_string();
    let list = remove_nth_from_end(list, n);
    (before, render_list(&list).to_string())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    println!("=== Two pointers ===\n");

    // =========================================================================
    // Zero-sum triplets
    // =========================================================================
    for (case, values) in THREE_SUM_CASES.iter().enumerate() {
        let triplets = find_zero_sum_triplets(values);
        info!(case = case + 1, input = ?values, output = ?triplets, "three sum");
    }

    // =========================================================================
    // Remove n-th node from the end
    // =========================================================================
    for n in REMOVAL_POSITIONS {
        let (before, after) = removal_report(&LIST_VALUES, n);
        info!(n, %before, %after, "remove n-th from end");
    }

    // =========================================================================
    // Palindromes
    // =========================================================================
    for word in PALINDROME_WORDS {
        info!(word, palindrome = is_palindrome_str(word), "palindrome check");
    }

    Ok(())
}
