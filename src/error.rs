// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

use crate::parser::Token;

/// The error type.
///
/// Scan errors are never fatal: the parser records one of these alongside
/// the [Token] it returns so the caller can report it and keep scanning.
#[derive(Error, Debug, Clone, Eq, PartialEq)]
pub enum Error {
    //------------------------------
    // Scan errors (user error)
    //------------------------------
    /// User specified a short option that is not in the table.
    #[error("invalid option -- '{0}'")]
    UnknownOpt(char),

    /// User specified a long option that matches no table entry.
    #[error("unrecognized option '--{0}'")]
    UnknownLongOpt(String),

    /// User specified a long option prefix shared by more than one entry.
    #[error("option '--{name}' is ambiguous; possibilities:{}", fmt_candidates(.candidates))]
    AmbiguousOpt {
        /// The name as given on the command line.
        name: String,
        /// Full long names of every matching entry, in table order.
        candidates: Vec<String>,
    },

    /// A value was attached (`--name=value`) to a long option that takes none.
    #[error("option '--{0}' doesn't allow an argument")]
    UnexpectedOptArg(String),

    /// Short option argument was not specified.
    #[error("option requires an argument -- '{0}'")]
    MissingOptArg(char),

    /// Long option argument was not specified.
    #[error("option '--{0}' requires an argument")]
    MissingLongOptArg(String),

    //------------------------------
    // Output errors
    //------------------------------
    /// Failed to write usage output.
    #[error("failed to write output: {0}")]
    Io(String),
}

fn fmt_candidates(candidates: &[String]) -> String {
    candidates
        .iter()
        .map(|c| format!(" '--{}'", c))
        .collect::<String>()
}

impl Error {
    /// Returns the token a scan reports for this error.
    pub fn token(&self) -> Token {
        match self {
            Error::MissingOptArg(_) | Error::MissingLongOptArg(_) => Token::MissingArgument,
            _ => Token::UnknownOption,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
