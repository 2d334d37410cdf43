// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use tracing::{debug, trace};

use crate::error::{Error, Result};
use crate::table::{Arg, Need, OptId, Table};

const OPT_PREFIX: char = '-';

/// Special argument that is silently consumed and used to denote the end of
/// all options; all arguments that follow are considered to be positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";
const LONG_OPT_PREFIX: &str = END_OF_OPTIONS;

/// A lone dash is an operand (conventionally "stdin"), not an option.
const STDIN_OPERAND: &str = "-";

const LONG_OPT_VALUE_SEP: char = '=';

/// Result of a single scan step.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Token {
    /// A table entry matched.
    Matched(OptId),
    /// Unknown short option, unknown or ambiguous long option, or a value
    /// attached to a long option that takes none.
    UnknownOption,
    /// An option that needs an argument didn't get one.
    MissingArgument,
    /// No more options: the remaining elements are operands.
    EndOfOptions,
}

/// An option found by [Parser::try_next()] or by iterating a [Parser].
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Match<'a> {
    /// Which option matched.
    pub id: OptId,
    /// Option argument, if one was bound to the option.
    ///
    /// # Notes
    ///
    /// - This is equivalent to `getopt(3)`'s `optarg` value.
    pub value: Option<&'a str>,
}

/// Why a scan step failed. Names borrow from the argument vector or the
/// table, so recording one never allocates.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum Failure<'a> {
    UnknownOpt(char),
    UnknownLongOpt(&'a str),
    AmbiguousOpt(&'a str),
    UnexpectedOptArg(&'a str),
    MissingOptArg(char),
    MissingLongOptArg(&'a str),
}

impl<'a> Failure<'a> {
    fn token(self) -> Token {
        match self {
            Failure::MissingOptArg(_) | Failure::MissingLongOptArg(_) => Token::MissingArgument,
            _ => Token::UnknownOption,
        }
    }
}

type Step<'a> = std::result::Result<OptId, Failure<'a>>;

/// Settings used to control the parsers behaviour.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialOrd, Default, PartialEq)]
pub struct Settings {
    /// If set, a long option name that exactly equals one entry resolves to
    /// that entry even when longer names share it as a prefix.
    exact_match_wins: bool,
}

impl Settings {
    /// Create a new settings object.
    pub fn new() -> Self {
        Settings::default()
    }

    /// By default, every entry whose long name starts with the name typed
    /// counts as a candidate, so with `--foo` and `--foobar` registered,
    /// `--foo` is ambiguous and reported as [Token::UnknownOption].
    ///
    /// With this setting, an exact name match takes precedence over the
    /// other candidates. Abbreviations shared by several names are still
    /// ambiguous.
    #[allow(clippy::needless_update)]
    pub fn exact_match_wins(self) -> Self {
        Settings {
            exact_match_wins: true,
            ..self
        }
    }
}

/// Get a list of all command-line arguments specified to the program with
/// the program name (the first argument) removed.
pub fn get_args() -> Vec<String> {
    env::args().skip(1).collect()
}

/// Incremental scanner over one argument vector and one option [Table].
///
/// The vector must _not_ include the program name (see [get_args()]).
///
/// All scan position lives in this value, so independent parsers never
/// interfere and a scan can be paused between calls.
#[derive(Debug)]
pub struct Parser<'a, S> {
    args: &'a [S],
    table: &'a Table,
    settings: Settings,

    /// Element currently being examined (`optind`).
    index: usize,
    /// Byte offset of the next short option within a cluster.
    cursor: Option<usize>,
    /// Set once end of options has been reported.
    done: bool,

    //----------------------------------------
    // Valid until the next call.
    //----------------------------------------
    optarg: Option<&'a str>,
    optopt: Option<char>,
    long_index: Option<usize>,
    failure: Option<Failure<'a>>,
}

impl<'a, S: AsRef<str>> Parser<'a, S> {
    /// Create a parser positioned at the first element of `args`.
    pub fn new(args: &'a [S], table: &'a Table) -> Self {
        Parser {
            args,
            table,
            settings: Settings::default(),
            index: 0,
            cursor: None,
            done: false,
            optarg: None,
            optopt: None,
            long_index: None,
            failure: None,
        }
    }

    /// Specify any settings for the parser.
    pub fn settings(self, settings: Settings) -> Self {
        Parser { settings, ..self }
    }

    /// Index of the element that the next call will examine.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Byte offset of the next short option when stopped mid-cluster.
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// The argument bound to the option returned by the last call.
    pub fn optarg(&self) -> Option<&'a str> {
        self.optarg
    }

    /// The short option character scanned by the last call, recorded
    /// even when it was not recognised.
    pub fn optopt(&self) -> Option<char> {
        self.optopt
    }

    /// Table index of the most recently matched long option.
    ///
    /// Calls that fail to resolve a long option leave this unchanged.
    pub fn long_index(&self) -> Option<usize> {
        self.long_index
    }

    /// Why the last call returned [Token::UnknownOption] or
    /// [Token::MissingArgument].
    pub fn error(&self) -> Option<Error> {
        self.failure.map(|f| self.describe(f))
    }

    /// Elements not consumed as options or option arguments.
    ///
    /// Once the scan has returned [Token::EndOfOptions] these are the
    /// positional arguments.
    pub fn operands(&self) -> &'a [S] {
        let args: &'a [S] = self.args;

        &args[self.index.min(args.len())..]
    }

    /// Scan the next option.
    ///
    /// Returns one token per call; after [Token::EndOfOptions] every
    /// further call returns it again without moving.
    pub fn next_token(&mut self) -> Token {
        match self.advance() {
            Ok(None) => Token::EndOfOptions,
            Ok(Some(id)) => Token::Matched(id),
            Err(f) => f.token(),
        }
    }

    /// Scan the next option, reporting failures as an [Error].
    ///
    /// Returns `Ok(None)` at the end of options. An error does not end
    /// the scan: calling again continues after the offending option.
    pub fn try_next(&mut self) -> Result<Option<Match<'a>>> {
        match self.advance() {
            Ok(None) => Ok(None),
            Ok(Some(id)) => Ok(Some(Match {
                id,
                value: self.optarg,
            })),
            Err(f) => Err(self.describe(f)),
        }
    }

    fn advance(&mut self) -> std::result::Result<Option<OptId>, Failure<'a>> {
        match self.step() {
            None => {
                self.done = true;
                Ok(None)
            }
            Some(Ok(id)) => Ok(Some(id)),
            Some(Err(f)) => {
                debug!(index = self.index, failure = ?f, "scan error");

                self.failure = Some(f);
                Err(f)
            }
        }
    }

    fn describe(&self, failure: Failure<'a>) -> Error {
        match failure {
            Failure::UnknownOpt(c) => Error::UnknownOpt(c),
            Failure::UnknownLongOpt(name) => Error::UnknownLongOpt(name.into()),
            Failure::AmbiguousOpt(name) => Error::AmbiguousOpt {
                name: name.into(),
                candidates: self
                    .table
                    .find_long(name)
                    .filter_map(|(_, arg)| arg.long.clone())
                    .collect(),
            },
            Failure::UnexpectedOptArg(name) => Error::UnexpectedOptArg(name.into()),
            Failure::MissingOptArg(c) => Error::MissingOptArg(c),
            Failure::MissingLongOptArg(name) => Error::MissingLongOptArg(name.into()),
        }
    }

    fn step(&mut self) -> Option<Step<'a>> {
        self.optarg = None;
        self.optopt = None;
        self.failure = None;

        if self.done {
            return None;
        }

        let args: &'a [S] = self.args;
        let element = args.get(self.index)?.as_ref();

        trace!(index = self.index, element, cursor = ?self.cursor, "scanning");

        if element.len() > LONG_OPT_PREFIX.len() && element.starts_with(LONG_OPT_PREFIX) {
            Some(self.scan_long(element))
        } else {
            self.scan_short(element)
        }
    }

    /// Consume the element after the current one as an option argument.
    fn look_ahead(&mut self) -> Option<&'a str> {
        let args: &'a [S] = self.args;
        let value = args.get(self.index + 1)?.as_ref();

        self.index += 1;

        Some(value)
    }

    fn scan_short(&mut self, element: &'a str) -> Option<Step<'a>> {
        if !element.starts_with(OPT_PREFIX) || element == STDIN_OPERAND {
            self.cursor = None;
            return None;
        }

        if element == END_OF_OPTIONS {
            debug!(index = self.index, "end of options marker");

            self.index += 1;
            self.cursor = None;
            return None;
        }

        let start = match self.cursor {
            Some(offset) if offset < element.len() => offset,
            _ => OPT_PREFIX.len_utf8(),
        };

        let option = match element.get(start..).and_then(|rest| rest.chars().next()) {
            Some(c) => c,
            None => {
                self.cursor = None;
                return None;
            }
        };

        // Recorded before lookup so failures can name the character.
        self.optopt = Some(option);

        let next = start + option.len_utf8();
        let mut closed = false;

        let table: &'a Table = self.table;

        let result = match table.find_short(option) {
            None => Err(Failure::UnknownOpt(option)),
            Some((index, arg)) => {
                let id = arg.id(index);

                match arg.needs {
                    Need::Nothing => Ok(id),
                    needs => {
                        // The rest of this element is never rescanned.
                        closed = true;

                        let remainder = &element[next..];

                        if !remainder.is_empty() {
                            self.optarg = Some(remainder);
                            Ok(id)
                        } else if needs == Need::Optional {
                            Ok(id)
                        } else if let Some(value) = self.look_ahead() {
                            self.optarg = Some(value);
                            Ok(id)
                        } else {
                            Err(Failure::MissingOptArg(option))
                        }
                    }
                }
            }
        };

        if closed || next >= element.len() {
            self.index += 1;
            self.cursor = None;
        } else {
            self.cursor = Some(next);
        }

        if let Ok(id) = result {
            trace!(option = %id, optarg = ?self.optarg, "matched short option");
        }

        Some(result)
    }

    fn scan_long(&mut self, element: &'a str) -> Step<'a> {
        let body = &element[LONG_OPT_PREFIX.len()..];

        let (name, value) = match body.find(LONG_OPT_VALUE_SEP) {
            Some(pos) => (&body[..pos], Some(&body[pos + 1..])),
            None => (body, None),
        };

        // The element itself is always consumed.
        self.index += 1;
        self.cursor = None;

        let (index, arg) = self.resolve_long(name)?;

        self.long_index = Some(index);

        if let Some(flag) = &arg.flag {
            flag.set(arg.value);
        }

        let id = arg.id(index);
        let full_name = arg.long.as_deref().unwrap_or(name);

        match arg.needs {
            Need::Nothing if value.is_some() => {
                return Err(Failure::UnexpectedOptArg(full_name));
            }
            Need::Nothing => (),
            Need::Optional => self.optarg = value,
            Need::Argument => {
                // Only required arguments may come from the next element.
                self.optarg = match value {
                    Some(v) => Some(v),
                    None => {
                        let args: &'a [S] = self.args;

                        match args.get(self.index) {
                            Some(v) => {
                                self.index += 1;
                                Some(v.as_ref())
                            }
                            None => return Err(Failure::MissingLongOptArg(full_name)),
                        }
                    }
                };
            }
        }

        trace!(option = %id, long = full_name, optarg = ?self.optarg, "matched long option");

        Ok(id)
    }

    fn resolve_long(&self, name: &'a str) -> std::result::Result<(usize, &'a Arg), Failure<'a>> {
        let table: &'a Table = self.table;

        let mut matches = table.find_long(name);

        let first = match matches.next() {
            Some(m) => m,
            None => return Err(Failure::UnknownLongOpt(name)),
        };

        if matches.next().is_none() {
            return Ok(first);
        }

        if self.settings.exact_match_wins {
            if let Some(exact) = table
                .find_long(name)
                .find(|(_, arg)| arg.long.as_deref() == Some(name))
            {
                return Ok(exact);
            }
        }

        Err(Failure::AmbiguousOpt(name))
    }
}

impl<'a, S: AsRef<str>> Iterator for Parser<'a, S> {
    type Item = Result<Match<'a>>;

    /// Yields each option in turn, stopping at the end of options.
    fn next(&mut self) -> Option<Self::Item> {
        self.try_next().transpose()
    }
}
