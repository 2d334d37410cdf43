// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::io::Write;

use crate::error::Result;
use crate::table::{Need, Table};

const USAGE_PREFIX_SPACES: &str = "    ";

/// Usage statement generator for a [Table].
///
/// Flags and options are listed in table order using each [Arg](crate::Arg)'s
/// help text.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Help {
    name: String,
    version: String,
    summary: String,
    help: String,
    notes: String,
}

impl Help {
    /// Create a new usage generator for the named program.
    pub fn new(name: &str) -> Self {
        Help::default().name(name)
    }

    /// Specify the name of the program.
    pub fn name(self, name: &str) -> Self {
        Help {
            name: name.into(),
            ..self
        }
    }

    /// Specify the version of the program.
    pub fn version(self, version: &str) -> Self {
        Help {
            version: version.into(),
            ..self
        }
    }

    /// Specify brief explanatory text for the program.
    pub fn summary(self, summary: &str) -> Self {
        Help {
            summary: summary.into(),
            ..self
        }
    }

    /// Specify extended usage information for the program.
    pub fn help(self, help: &str) -> Self {
        Help {
            help: help.into(),
            ..self
        }
    }

    /// Specify notes for the program.
    pub fn notes(self, notes: &str) -> Self {
        Help {
            notes: notes.into(),
            ..self
        }
    }

    /// Write a help/usage statement for `table` to `writer`.
    pub fn generate<W>(&self, table: &Table, writer: &mut W) -> Result<()>
    where
        W: Write,
    {
        let mut lines = Vec::<String>::new();

        let line = format!("NAME:\n{}{}\n", USAGE_PREFIX_SPACES, self.name);
        lines.push(line);

        if !self.version.is_empty() {
            let line = format!("VERSION:\n{}{}\n", USAGE_PREFIX_SPACES, self.version);
            lines.push(line);
        }

        if !self.summary.is_empty() {
            let line = format!("SUMMARY:\n{}{}\n", USAGE_PREFIX_SPACES, self.summary.trim());
            lines.push(line);
        }

        lines.push("USAGE:".into());

        let line = format!(
            "{}{} [OPTIONS] [--] [ARGUMENT..]\n",
            USAGE_PREFIX_SPACES, self.name
        );
        lines.push(line);

        //------------------------------------------------------------

        let (flags, options): (Vec<_>, Vec<_>) =
            table.iter().partition(|arg| arg.needs == Need::Nothing);

        if !flags.is_empty() {
            lines.push("FLAGS:".into());

            for arg in flags {
                lines.push(format!("{}{}", USAGE_PREFIX_SPACES, arg));
            }
        }

        if !options.is_empty() {
            lines.push("\nOPTIONS:".into());

            for arg in options {
                lines.push(format!("{}{}", USAGE_PREFIX_SPACES, arg));
            }
        }

        //------------------------------------------------------------

        if !self.help.is_empty() {
            let line = format!("\nHELP:\n\n{}", self.help.trim());
            lines.push(line);
        }

        if !self.notes.is_empty() {
            let line = format!("\nNOTES:\n\n{}", self.notes.trim());
            lines.push(line);
        }

        // Join all the lines together, remove white space at either and and
        // finally append a single newline.
        let mut final_lines = lines.join("\n").trim().to_string();
        final_lines.push('\n');

        write!(writer, "{}", final_lines)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::Error;
    use crate::table::Arg;

    use regex::Regex;

    /// Writer that always fails.
    struct BrokenWriter;

    impl Write for BrokenWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_help_creation() {
        let new_help = Help::new("foo bar");
        let def_help = Help::default();

        let expected_def_help = Help {
            name: "".into(),
            version: "".into(),
            summary: "".into(),
            help: "".into(),
            notes: "".into(),
        };

        assert_eq!(def_help, expected_def_help);
        assert_eq!(
            new_help,
            Help {
                name: "foo bar".into(),
                ..Default::default()
            }
        );

        let help = Help::default()
            .name("prog")
            .version("1.2.3-beta5")
            .summary("my awesome app")
            .help("this app does something\nthe end\n")
            .notes("a b c");

        assert_eq!(help.name, "prog");
        assert_eq!(help.version, "1.2.3-beta5");
        assert_eq!(help.summary, "my awesome app");
        assert_eq!(help.help, "this app does something\nthe end\n");
        assert_eq!(help.notes, "a b c");
    }

    #[test]
    fn test_generate() {
        let mut table = Table::new();

        // flags
        table.add(Arg::new('d').help("enable debug"));
        table.add(Arg::new('v').long("verbose"));

        // options
        table.add(Arg::new('n').needs(Need::Argument));
        table.add(
            Arg::new('o')
                .long("output")
                .needs(Need::Argument)
                .help("output file"),
        );
        table.add(Arg::named("color").needs(Need::Optional).help("when"));

        let flags_re = concat!(
            r#"FLAGS:\n"#,
            r#"\s+-d # enable debug\n"#,
            r#"\s+-v, --verbose\n"#,
        );

        let options_re = concat!(
            r#"OPTIONS:\n"#,
            r#"\s+-n <value>\n"#,
            r#"\s+-o, --output <value> # output file\n"#,
            r#"\s+--color\[=<value>\] # when\n"#,
        );

        let name = "my app";
        let name_re = format!(r#"NAME:\n\s+{}\n"#, name);
        let usage_re = format!(r#"USAGE:\n\s+{} \[OPTIONS\] \[--\] \[ARGUMENT\.\.\]\n"#, name);

        let version = "1.2.3-alpha4";
        let version_re = format!(r"VERSION:\n\s+{}\n", version);

        let summary = "This is one awesome app";
        let summary_re = format!(r"SUMMARY:\n\s+{}\n", summary);

        let help = concat!("help line 1\n", "help last line\n");
        let help_re = format!(r"HELP:\n\s+{}", help);

        let notes = concat!("notes line 1\n", "notes last line\n");
        let notes_re = format!(r"NOTES:\n\s+{}", notes);

        let mut writer = Vec::<u8>::new();

        let result = Help::new(name)
            .summary(summary)
            .version(version)
            .help(help)
            .notes(notes)
            .generate(&table, &mut writer);

        assert!(result.is_ok());

        let value = String::from_utf8(writer).unwrap();

        for re in &[
            name_re.as_str(),
            usage_re.as_str(),
            version_re.as_str(),
            summary_re.as_str(),
            help_re.as_str(),
            notes_re.as_str(),
            flags_re,
            options_re,
        ] {
            let msg = format!("re: {:?}, value: {:?}", re, value);

            let re = Regex::new(re).unwrap();
            assert!(re.is_match(&value), "{}", msg);
        }
    }

    #[test]
    fn test_generate_minimal() {
        let table = Table::from(vec![Arg::new('a')]);

        let mut writer = Vec::<u8>::new();
        Help::new("prog").generate(&table, &mut writer).unwrap();

        let value = String::from_utf8(writer).unwrap();

        assert!(!value.contains("VERSION:"));
        assert!(!value.contains("OPTIONS:"));
        assert!(!value.contains("HELP:"));
        assert!(value.contains("FLAGS:\n    -a"));
        assert!(value.ends_with("-a\n"));
    }

    #[test]
    fn test_generate_write_error() {
        let table = Table::from(vec![Arg::new('a')]);

        let result = Help::new("prog").generate(&table, &mut BrokenWriter);

        assert_eq!(result, Err(Error::Io("closed".into())));
    }
}
