// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

/// A simple example showing short options, clustering and option arguments.
use gopt::{get_args, Arg, Need, OptId, Parser, Table, Token};

/// State built up while scanning the command line.
#[derive(Clone, Debug, Default)]
struct Options {
    // Number of times '-d' was specified.
    debug: usize,
    // Values given to '-a'.
    values: Vec<String>,
}

fn main() {
    let mut table = Table::new();

    // Support "-a <value>" option.
    table.add(Arg::new('a').needs(Need::Argument));

    // Support "-d" flag option.
    table.add(Arg::new('d'));

    let args = get_args();
    let mut parser = Parser::new(&args, &table);
    let mut options = Options::default();

    loop {
        match parser.next_token() {
            Token::Matched(OptId::Short('a')) => {
                // Note: unwrap safe as '-a' only matches with a value.
                options.values.push(parser.optarg().unwrap().into());
            }
            Token::Matched(OptId::Short('d')) => options.debug += 1,
            Token::EndOfOptions => break,
            token => {
                println!("INFO: {:?}: {:?}", token, parser.error());
            }
        }
    }

    println!("INFO: options: {:?}", options);
    println!("INFO: operands: {:?}", parser.operands());
}
