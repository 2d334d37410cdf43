// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Incremental `getopt`-style command-line scanner.
//!
//! This crate scans an argument vector one option at a time, the way
//! `getopt_long(3)` does: you ask for the next option, act on it, and ask
//! again until the parser reports the end of options. Whatever is left are
//! the positional arguments.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Examples](#examples)
//! * [Details](#details)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! Options are declared in a [Table] of [Arg] entries. Each entry has a
//! short character, a long name, or both, and a [Need] saying whether it
//! takes an argument. A [Parser] borrows the table and the argument vector
//! and holds the whole scan position, so scans never interfere with each
//! other.
//!
//! # Quickstart
//!
//! 1. Build a [Table]:
//!
//!    ```rust
//!    use gopt::{Arg, Need, Table};
//!
//!    let mut table = Table::new();
//!
//!    // Support "-v" and "--verbose".
//!    table.add(Arg::new('v').long("verbose"));
//!
//!    // Support "-o <value>", "-o<value>", "--output <value>"
//!    // and "--output=<value>".
//!    table.add(Arg::new('o').long("output").needs(Need::Argument));
//!    ```
//!
//! 1. Create a [Parser] over the arguments (without the program name,
//!    see [get_args()]) and loop until [Token::EndOfOptions]:
//!
//!    ```rust
//!    # use gopt::{Arg, Need, Table};
//!    use gopt::{OptId, Parser, Token};
//!    #
//!    # let mut table = Table::new();
//!    # table.add(Arg::new('v').long("verbose"));
//!    # table.add(Arg::new('o').long("output").needs(Need::Argument));
//!
//!    let args = vec!["-vofile", "--verb", "input"];
//!    let mut parser = Parser::new(&args, &table);
//!
//!    let mut verbose = 0;
//!    let mut output = None;
//!
//!    loop {
//!        match parser.next_token() {
//!            Token::Matched(OptId::Short('v')) => verbose += 1,
//!            Token::Matched(OptId::Short('o')) => output = parser.optarg(),
//!            Token::EndOfOptions => break,
//!            _ => eprintln!("{}", parser.error().unwrap()),
//!        }
//!    }
//!
//!    assert_eq!(verbose, 2);
//!    assert_eq!(output, Some("file"));
//!    assert_eq!(parser.operands(), &["input"]);
//!    ```
//!
//! # Examples
//!
//! A [Parser] is also an [Iterator] over `Result<Match>`, which suits callers
//! that prefer `?`:
//!
//! ```rust
//! use gopt::{Arg, Need, OptId, Parser, Result, Table};
//!
//! fn main() -> Result<()> {
//!     let table = Table::from(vec![
//!         Arg::new('n').needs(Need::Argument),
//!         Arg::named("dry-run"),
//!     ]);
//!
//!     let args = vec!["-n", "3", "--dry", "--", "-file-"];
//!     let mut parser = Parser::new(&args, &table);
//!
//!     let mut count = 0;
//!     let mut dry_run = false;
//!
//!     for result in &mut parser {
//!         let m = result?;
//!
//!         match m.id {
//!             OptId::Short('n') => count = m.value.unwrap_or("0").parse().unwrap_or(0),
//!             OptId::Long(1) => dry_run = true,
//!             _ => (),
//!         }
//!     }
//!
//!     assert_eq!(count, 3);
//!     assert!(dry_run);
//!     assert_eq!(parser.operands(), &["-file-"]);
//!
//!     Ok(())
//! }
//! ```
//!
//! For further examples, try out the programs in the `demos/` directory:
//!
//! ```bash
//! $ cargo run --example simple -- -dd -a foo -abar file
//! $ RUST_LOG=trace cargo run --example long-options -- --verb --out=x --col -- rest
//! $ cargo run --example error-handler -- -x --nope -a
//! ```
//!
//! # Details
//!
//! > **Note:** For further details, see `getopt(3)` and `getopt_long(3)`.
//!
//! - Short options can be clustered: `-abc` is `-a -b -c`.
//!
//!   The first option in a cluster that takes an argument ends the cluster:
//!   the rest of the element is its argument (`-ovalue`).
//!
//! - An option that requires an argument ([Need::Argument]) with nothing
//!   attached takes the next element, whatever it looks like (`-o -a` gives
//!   `-o` the value `-a`).
//!
//! - An option with an optional argument ([Need::Optional]) only ever takes
//!   an attached value (`-pvalue`, `--name=value`).
//!
//! - Long options may be abbreviated to any prefix that matches exactly one
//!   entry. Every entry whose name starts with the text typed counts, even if
//!   one of them is an exact match: with `--foo` and `--foobar` registered,
//!   `--foo` is ambiguous unless [Settings::exact_match_wins()] is used.
//!
//! - A value attached to a long flag (`--verbose=x`) is an error.
//!
//! - Scanning stops, without consuming anything, at the first element that
//!   does not start with `-` or that is exactly `-`. The special element `--`
//!   is consumed and also stops scanning.
//!
//! - Errors never stop the scan. A call that fails returns
//!   [Token::UnknownOption] or [Token::MissingArgument]; [Parser::error()]
//!   says why, and the next call carries on after the offending option.
//!
//! # Summary of features and behaviour
//!
//! - Parses arguments in strict order; arguments are not permuted.
//! - Short, long, and short-plus-long options.
//! - Flags, required arguments and optional arguments.
//! - `getopt_long(3)` style output flags: an [Arg] can write a value into a
//!   shared cell whenever it is matched by its long name.
//! - `getopt(3)` side values: [Parser::optarg()], [Parser::optopt()] (set
//!   even for unknown options), [Parser::long_index()].
//! - Generates a help / usage statement from the table ([Help]).
//! - Emits `tracing` events at `trace` and `debug` level.
//!
//! # Limitations
//!
//! - Options are only recognised before the first positional argument
//!   (`POSIXLY_CORRECT` behaviour).
//! - Short options cannot be abbreviated, and option names are matched
//!   byte for byte (no locale awareness).

mod error;
mod help;
mod parser;
mod table;

pub use error::{Error, Result};

pub use help::Help;

pub use parser::{get_args, Match, Parser, Settings, Token};

pub use table::{Arg, Need, OptId, Table};
