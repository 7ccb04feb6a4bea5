use anyhow::{bail, Result};
use std::path::PathBuf;

pub const USAGE: &str =
    "Usage: finsight <FILE|-> [--json] [--markdown] [--no-summary] [--output PATH]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Markdown,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Stdin,
    File(PathBuf),
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub source: DocumentSource,
    pub mode: OutputMode,
    pub skip_summary: bool,
    pub output: Option<PathBuf>,
}

impl CliArgs {
    /// Parses arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Self> {
        let mut source = None;
        let mut mode = OutputMode::Markdown;
        let mut skip_summary = false;
        let mut output = None;

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => mode = OutputMode::Json,
                "--markdown" => mode = OutputMode::Markdown,
                "--no-summary" => skip_summary = true,
                "--output" => match iter.next() {
                    Some(path) => output = Some(PathBuf::from(path)),
                    None => bail!("--output requires a path"),
                },
                "-" => source = Some(DocumentSource::Stdin),
                flag if flag.starts_with("--") => bail!("Unknown option: {}", flag),
                path => {
                    if source.is_some() {
                        bail!("Only one document can be processed at a time");
                    }
                    source = Some(DocumentSource::File(PathBuf::from(path)));
                }
            }
        }

        let Some(source) = source else {
            bail!("No document given");
        };

        Ok(Self {
            source,
            mode,
            skip_summary,
            output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliArgs> {
        let owned: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        CliArgs::parse(&owned)
    }

    #[test]
    fn test_defaults() {
        let args = parse(&["report.txt"]).unwrap();
        assert_eq!(args.source, DocumentSource::File(PathBuf::from("report.txt")));
        assert_eq!(args.mode, OutputMode::Markdown);
        assert!(!args.skip_summary);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_flags_in_any_order() {
        let args = parse(&["--json", "--output", "out.txt", "-", "--no-summary"]).unwrap();
        assert_eq!(args.source, DocumentSource::Stdin);
        assert_eq!(args.mode, OutputMode::Json);
        assert!(args.skip_summary);
        assert_eq!(args.output, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(parse(&[]).is_err());
        assert!(parse(&["a.txt", "b.txt"]).is_err());
        assert!(parse(&["a.txt", "--output"]).is_err());
        assert!(parse(&["a.txt", "--verbose"]).is_err());
    }
}
