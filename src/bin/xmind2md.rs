//! Command-line converter from `.xmind` files to Markdown.
//!
//! # Usage
//!
//! Basic conversion (writes `plan.md` next to the input):
//! ```sh
//! xmind2md plan.xmind
//! ```
//!
//! Convert with options:
//! ```sh
//! xmind2md plan.xmind -o outline.md --max-depth 2 --no-markers
//! ```

use clap::Parser;
use flexi_logger::Logger;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use xmind2md::{MarkdownOptions, convert_to_markdown};

/// Number of lines shown in the preview after a successful conversion.
const PREVIEW_LINES: usize = 40;

/// Convert XMind (.xmind) mind maps to Markdown (.md)
#[derive(Parser, Debug)]
#[command(
    name = "xmind2md",
    about = "Convert XMind (.xmind) to Markdown (.md)",
    long_about = "Converts XMind 8 and XMind 2020/Zen mind maps into a Markdown outline:\n\
                  sheets become level-1 headings, root topics level-2 headings and\n\
                  subtopics nested bullet lists.",
    version
)]
struct Args {
    /// Path to input .xmind file
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to output .md file (defaults to input name with .md)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Limit output depth (0 = only first level topics)
    #[arg(long, value_name = "N")]
    max_depth: Option<usize>,

    /// Do not include topic notes
    #[arg(long)]
    no_notes: bool,

    /// Do not include topic labels
    #[arg(long)]
    no_labels: bool,

    /// Do not include topic markers
    #[arg(long)]
    no_markers: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn options(&self) -> MarkdownOptions {
        MarkdownOptions::new()
            .with_notes(!self.no_notes)
            .with_labels(!self.no_labels)
            .with_markers(!self.no_markers)
            .with_max_depth(self.max_depth)
    }

    fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| default_output(&self.input))
    }
}

fn default_output(input: &Path) -> PathBuf {
    input.with_extension("md")
}

fn preview(markdown: &str) -> String {
    markdown
        .lines()
        .take(PREVIEW_LINES)
        .collect::<Vec<_>>()
        .join("\n")
}

fn main() -> ExitCode {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "warn" };
    let _logger = match Logger::try_with_env_or_str(level).and_then(|l| l.log_to_stderr().start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("warning: logging disabled: {}", e);
            None
        },
    };

    let output = args.output_path();
    match convert_to_markdown(&args.input, Some(&output), &args.options()) {
        Ok(markdown) => {
            println!("Converted to: {}", output.display());
            println!("--- Preview (first {} lines) ---", PREVIEW_LINES);
            println!("{}", preview(&markdown));
            ExitCode::SUCCESS
        },
        Err(e) => {
            log::debug!("conversion of {} failed: {:?}", args.input.display(), e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_map_to_options() {
        let args = Args::parse_from([
            "xmind2md",
            "in.xmind",
            "--max-depth",
            "2",
            "--no-notes",
            "--no-markers",
        ]);
        let options = args.options();
        assert!(!options.include_notes);
        assert!(options.include_labels);
        assert!(!options.include_markers);
        assert_eq!(options.max_depth, Some(2));
        assert_eq!(args.output_path(), PathBuf::from("in.md"));
    }

    #[test]
    fn test_explicit_output() {
        let args = Args::parse_from(["xmind2md", "maps/in.xmind", "-o", "out/notes.md"]);
        assert_eq!(args.output_path(), PathBuf::from("out/notes.md"));
        assert_eq!(args.options(), MarkdownOptions::default());
    }

    #[test]
    fn test_preview_is_bounded() {
        let text: String = (0..100).map(|i| format!("line {i}\n")).collect();
        let shown = preview(&text);
        assert_eq!(shown.lines().count(), PREVIEW_LINES);
        assert!(shown.ends_with("line 39"));
    }

    #[test]
    fn test_negative_depth_is_rejected() {
        assert!(Args::try_parse_from(["xmind2md", "in.xmind", "--max-depth", "-1"]).is_err());
    }
}
