// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::cell::Cell;
use std::fmt;
use std::iter::FromIterator;
use std::rc::Rc;

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it takes an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument required).
    Nothing,
    /// Option needs an argument, either attached (`-ovalue`,
    /// `--output=value`) or taken from the next element (`-o value`).
    Argument,
    /// Option accepts an argument, but only an attached one. The next
    /// element is never consumed.
    Optional,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement for an [Arg].
    pub fn new() -> Self {
        Need::default()
    }
}

/// Identity of a matched option.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum OptId {
    /// The option's short character. Returned for any entry that has one,
    /// whether it was matched as `-c` or via its long name.
    Short(char),
    /// Table index of a long-only entry.
    Long(usize),
}

impl fmt::Display for OptId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OptId::Short(c) => write!(f, "{}{}", OPT_PREFIX, c),
            OptId::Long(i) => write!(f, "#{}", i),
        }
    }
}

/// Declaration of a single option.
///
/// An option has a short character, a long name, or both. The argument
/// requirement applies to whichever form the user types.
///
/// # Note
///
/// - All members are public for caller convenience; an [Arg] is not
///   modified once added to a [Table].
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Arg {
    /// Single character short option name.
    pub short: Option<char>,
    /// Long option name, without the leading `--`.
    pub long: Option<String>,
    /// Type of option (defaults to a flag).
    pub needs: Need,
    /// Description of the option.
    pub help: Option<String>,
    /// Cell written with `value` whenever the option is matched by its
    /// long name.
    pub flag: Option<Rc<Cell<i32>>>,
    /// Value stored through `flag`.
    pub value: i32,
}

impl Arg {
    /// Create a new short option.
    pub fn new(option: char) -> Self {
        Arg::default().option(option)
    }

    /// Create a new long-only option.
    pub fn named(name: &str) -> Self {
        Arg::default().long(name)
    }

    /// Specify the option character (name) for the option.
    pub fn option(self, option: char) -> Self {
        Arg {
            short: Some(option),
            ..self
        }
    }

    /// Specify the long name for the option.
    pub fn long(self, name: &str) -> Self {
        Arg {
            long: Some(name.into()),
            ..self
        }
    }

    /// Specify the requirement for the option.
    pub fn needs(self, needs: Need) -> Self {
        Arg { needs, ..self }
    }

    /// Specify the help text for the option.
    pub fn help(self, help: &str) -> Self {
        Arg {
            help: Some(help.into()),
            ..self
        }
    }

    /// Write `value` to `flag` each time the option is matched by its long
    /// name.
    pub fn flag(self, flag: Rc<Cell<i32>>, value: i32) -> Self {
        Arg {
            flag: Some(flag),
            value,
            ..self
        }
    }

    /// Identity reported when this entry, at table position `index`, matches.
    pub fn id(&self, index: usize) -> OptId {
        match self.short {
            Some(c) => OptId::Short(c),
            None => OptId::Long(index),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let names = match (self.short, &self.long) {
            (Some(c), Some(name)) => format!("{}{}, {}{}", OPT_PREFIX, c, LONG_OPT_PREFIX, name),
            (Some(c), None) => format!("{}{}", OPT_PREFIX, c),
            (None, Some(name)) => format!("{}{}", LONG_OPT_PREFIX, name),
            (None, None) => String::new(),
        };

        let value = match (self.needs, self.long.is_some()) {
            (Need::Nothing, _) => "",
            (Need::Argument, _) => " <value>",
            (Need::Optional, true) => "[=<value>]",
            (Need::Optional, false) => "[<value>]",
        };

        let help: String = match &self.help {
            Some(help) => format!(" # {}", help),
            _ => "".into(),
        };

        write!(f, "{}{}{}", names, value, help)
    }
}

/// Ordered collection of option declarations.
///
/// Order matters: short lookups return the first match, and identities of
/// long-only options are their positions.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Table {
    entries: Vec<Arg>,
}

impl Table {
    /// Create a new, empty table.
    pub fn new() -> Self {
        Table::default()
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replace all entries in one go.
    pub fn set(&mut self, args: Vec<Arg>) {
        self.entries = args;
    }

    /// Register a single option.
    pub fn add(&mut self, arg: Arg) {
        self.entries.push(arg);
    }

    /// Returns the entry at table position `index`.
    pub fn get(&self, index: usize) -> Option<&Arg> {
        self.entries.get(index)
    }

    /// Iterate the entries in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.entries.iter()
    }

    /// Find the first entry whose short character is `option`.
    pub fn find_short(&self, option: char) -> Option<(usize, &Arg)> {
        self.entries
            .iter()
            .enumerate()
            .find(|(_, arg)| arg.short == Some(option))
    }

    /// Find every entry whose long name begins with `prefix`.
    ///
    /// An entry whose name equals `prefix` is just one more match: it gets
    /// no precedence over longer names sharing the prefix.
    pub fn find_long<'t>(&'t self, prefix: &'t str) -> impl Iterator<Item = (usize, &'t Arg)> + 't {
        self.entries.iter().enumerate().filter(move |(_, arg)| {
            arg.long
                .as_deref()
                .map_or(false, |name| name.starts_with(prefix))
        })
    }
}

impl From<Vec<Arg>> for Table {
    fn from(entries: Vec<Arg>) -> Self {
        Table { entries }
    }
}

impl FromIterator<Arg> for Table {
    fn from_iter<I: IntoIterator<Item = Arg>>(iter: I) -> Self {
        Table {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'t> IntoIterator for &'t Table {
    type Item = &'t Arg;
    type IntoIter = std::slice::Iter<'t, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
