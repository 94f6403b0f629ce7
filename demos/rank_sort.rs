//! Sorts whitespace-separated rank tokens and reports the distinct ranks.

use std::env;
use std::process::ExitCode;

use cardrank::{Rank, RankSet};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();
    let input = if args.is_empty() {
        "K 7 A 2 T 7".to_owned()
    } else {
        args.join(" ")
    };

    let mut ranks = Vec::new();
    for token in input.split_whitespace() {
        match token.parse::<Rank>() {
            Ok(rank) => ranks.push(rank),
            Err(err) => {
                eprintln!("{token}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    ranks.sort();
    let sorted: String = ranks.iter().map(|rank| char::from(*rank)).collect();
    println!("sorted:   {sorted}");

    let distinct: RankSet = ranks.iter().copied().collect();
    println!("distinct: {distinct} ({} ranks)", distinct.len());

    ExitCode::SUCCESS
}
