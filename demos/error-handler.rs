// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing how to report every bad option in a single pass.
use gopt::{get_args, Arg, Need, Parser, Table};

fn main() {
    let table = Table::from(vec![
        Arg::new('a'),
        Arg::new('e'),
        Arg::new('i').needs(Need::Argument),
        Arg::named("only-vowels"),
    ]);

    let args = get_args();
    let parser = Parser::new(&args, &table);

    // Errors don't end the scan, so collect them all.
    let errors: Vec<String> = parser
        .filter_map(|result| result.err())
        .map(|e| e.to_string())
        .collect();

    for error in &errors {
        eprintln!("error-handler: {}", error);
    }

    if !errors.is_empty() {
        std::process::exit(1);
    }
}
