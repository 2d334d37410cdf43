// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// An example showing long options, output flags and usage generation.
///
/// Set `RUST_LOG=trace` to watch the scanner work.
use std::cell::Cell;
use std::io;
use std::rc::Rc;

use gopt::{get_args, Arg, Help, Need, OptId, Parser, Result, Settings, Table};
use tracing_subscriber::EnvFilter;

const BRIEF: i32 = 1;
const DETAILED: i32 = 2;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    // getopt_long(3) style output flag.
    let format = Rc::new(Cell::new(0));

    let table = Table::from(vec![
        Arg::new('h').long("help").help("show this statement"),
        Arg::new('v').long("verbose").help("be chatty"),
        Arg::new('o')
            .long("output")
            .needs(Need::Argument)
            .help("write to FILE"),
        Arg::named("color")
            .needs(Need::Optional)
            .help("colorize output (always, never, auto)"),
        Arg::named("brief").flag(format.clone(), BRIEF),
        Arg::named("detailed").flag(format.clone(), DETAILED),
    ]);

    let args = get_args();
    let mut parser = Parser::new(&args, &table).settings(Settings::new().exact_match_wins());

    while let Some(m) = parser.try_next()? {
        match m.id {
            OptId::Short('h') => {
                return Help::new("long-options")
                    .summary("Demonstrate long option scanning")
                    .notes("Long options may be abbreviated.")
                    .generate(&table, &mut io::stdout());
            }
            OptId::Short(c) => println!("INFO: option -{}: {:?}", c, m.value),
            OptId::Long(index) => {
                // Note: unwrap safe as the index came from the table.
                let arg = table.get(index).unwrap();
                println!("INFO: option {}: {:?}", arg, m.value);
            }
        }
    }

    println!("INFO: format: {}", format.get());
    println!("INFO: operands: {:?}", parser.operands());

    Ok(())
}
