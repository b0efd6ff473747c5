use std::ffi::OsString;
use std::io::Write;
use std::str::FromStr;

use serde::Serialize;

pub mod count;
pub mod error;
pub mod prelude;
pub mod tokenizer;

use crate::count::CountTokensCommand;
use crate::prelude::*;

pub use crate::tokenizer::count_tokens;

/// Message printed when the program doesn't receive exactly one input.
pub const USAGE: &str = "Must provide one input argument";

pub trait CommandResult {
    fn print_yaml<W: Write>(&self, writer: W) -> Result<()>
    where
        Self: Serialize,
    {
        serde_yaml::to_writer(writer, &self).map_err(Error::from)
    }

    fn print_json<W: Write>(&self, mut writer: W) -> Result<()>
    where
        Self: Serialize,
    {
        serde_json::to_writer(&mut writer, &self)?;
        writeln!(writer)?;
        Ok(())
    }

    /// Returns the raw results of the command.
    fn print_raw<W: Write>(&self, writer: W) -> Result<()>;
}

pub trait CommandHandle<R: CommandResult> {
    /// Runs the command handler
    fn call(&self) -> Result<R>;
}

/// Process arguments beyond the program name, kept verbatim.
///
/// No argument is interpreted as a flag: `-5`, `--help` and `--` are all text to tokenize.
#[derive(Debug, Default)]
pub struct Cli {
    pub args: Vec<String>,
}

impl Cli {
    /// Reads the arguments of the current process.
    pub fn parse() -> Self {
        Self::parse_from(std::env::args_os())
    }

    /// Builds a `Cli` from an argument list whose first item is the program name. Arguments
    /// that aren't valid UTF-8 are converted lossily.
    pub fn parse_from<I, T>(args: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self {
            args: args
                .into_iter()
                .skip(1)
                .map(|arg| {
                    let arg: OsString = arg.into();
                    arg.to_string_lossy().into_owned()
                })
                .collect(),
        }
    }

    /// The single input to tokenize, or `None` when zero or several were given.
    pub fn input(&self) -> Option<&str> {
        match self.args.as_slice() {
            [input] => Some(input.as_str()),
            _ => None,
        }
    }
}

/// Format used to print a [`CommandResult`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// Plain text
    #[default]
    Raw,
    /// JSON
    Json,
    /// YAML
    Yaml,
}

impl FromStr for Output {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "raw" | "Raw" => Ok(Output::Raw),
            "json" | "Json" | "JSON" => Ok(Output::Json),
            "yaml" | "Yaml" | "YAML" | "yml" => Ok(Output::Yaml),
            _ => Err(Error::InvalidOutput(s.to_string())),
        }
    }
}

impl Output {
    pub fn print<R, W>(&self, result: &R, writer: W) -> Result<()>
    where
        R: CommandResult + Serialize,
        W: Write,
    {
        match self {
            Output::Raw => result.print_raw(writer),
            Output::Json => result.print_json(writer),
            Output::Yaml => result.print_yaml(writer),
        }
    }
}

/// Counts the tokens of the single input under [`MODEL`] and writes the bare count to
/// `writer`.
///
/// A wrong number of inputs is not an error: the usage message is written instead and the
/// tokenizer is never built.
pub fn run<W: Write>(cli: &Cli, writer: W) -> Result<()> {
    run_with(cli, MODEL, Output::Raw, writer)
}

/// Same as [`run`] with an explicit model and output format.
pub fn run_with<W: Write>(
    cli: &Cli,
    model: &str,
    output: Output,
    mut writer: W,
) -> Result<()> {
    let Some(input) = cli.input() else {
        log::debug!("expected one input, got {}", cli.args.len());
        writeln!(writer, "{USAGE}")?;
        return Ok(());
    };

    let encoder = Tiktoken::for_model(model)?;
    let result = CountTokensCommand::new(encoder, input).call()?;

    output.print(&result, writer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("count-tokens").chain(args.iter().copied()))
    }

    fn output(args: &[&str]) -> String {
        let mut buf = Vec::new();
        run(&cli(args), &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    struct Closed;

    impl Write for Closed {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "stdout closed",
            ))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn input_requires_exactly_one_value() {
        assert_eq!(cli(&[]).input(), None);
        assert_eq!(cli(&["a", "b"]).input(), None);
        assert_eq!(cli(&["a"]).input(), Some("a"));
        assert_eq!(cli(&[""]).input(), Some(""));
    }

    #[test]
    fn flag_like_arguments_are_text() {
        assert_eq!(cli(&["-5"]).input(), Some("-5"));
        assert_eq!(cli(&["--help"]).input(), Some("--help"));
        assert_eq!(cli(&["--version"]).input(), Some("--version"));
        assert_eq!(cli(&["--"]).input(), Some("--"));
        assert_eq!(cli(&["--", "-5"]).input(), None);
        assert_eq!(cli(&["-o", "json", "hi"]).input(), None);
    }

    #[test]
    fn wrong_count_prints_usage() {
        assert_eq!(output(&[]), "Must provide one input argument\n");
        assert_eq!(output(&["one", "two"]), "Must provide one input argument\n");
        assert_eq!(
            output(&["-o", "json", "hi"]),
            "Must provide one input argument\n"
        );
    }

    #[test]
    fn prints_the_count() {
        assert_eq!(output(&["How many tokens does this sentence have?"]), "8\n");
        assert_eq!(output(&[""]), "0\n");
    }

    #[test]
    fn counts_flag_like_text() {
        for arg in ["-5", "--help", "--version", "--"] {
            let printed = output(&[arg]);
            let count: usize = printed.trim_end().parse().unwrap();

            assert!(count > 0, "{arg} printed {printed:?}");
        }
    }

    #[test]
    fn prints_yaml() {
        let mut buf = Vec::new();
        run_with(&cli(&["hello world"]), MODEL, Output::Yaml, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "model: gpt-3.5-turbo\ncount: 2\n"
        );
    }

    #[test]
    fn prints_json() {
        let mut buf = Vec::new();
        run_with(&cli(&["hello world"]), MODEL, Output::Json, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "{\"model\":\"gpt-3.5-turbo\",\"count\":2}\n"
        );
    }

    #[test]
    fn parses_output_names() {
        assert_eq!("raw".parse::<Output>().unwrap(), Output::Raw);
        assert_eq!("JSON".parse::<Output>().unwrap(), Output::Json);
        assert_eq!("yml".parse::<Output>().unwrap(), Output::Yaml);
        assert!(matches!(
            "toml".parse::<Output>(),
            Err(Error::InvalidOutput(name)) if name == "toml"
        ));
    }

    #[test]
    fn unknown_model_is_fatal_with_a_diagnostic() {
        let mut buf = Vec::new();
        let err =
            run_with(&cli(&["hello"]), "not-a-model", Output::Raw, &mut buf).unwrap_err();
        let rendered = format!("{err:?}");

        assert!(matches!(err, Error::UnknownModel { .. }));
        assert!(
            rendered.starts_with("unable to resolve a tokenizer for model `not-a-model`: "),
            "{rendered}"
        );
        assert!(buf.is_empty());
    }

    #[test]
    fn usage_never_resolves_the_model() {
        let mut buf = Vec::new();
        run_with(&cli(&[]), "not-a-model", Output::Raw, &mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Must provide one input argument\n"
        );
    }

    #[test]
    fn write_failures_report_their_cause() {
        let err = run(&cli(&["hello"]), Closed).unwrap_err();

        assert_eq!(format!("{err:?}"), "io error\ncaused by:\n    0: stdout closed\n");
    }
}
