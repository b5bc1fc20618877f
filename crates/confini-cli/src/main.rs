use std::fs::{self, File};
use std::io::{Read, Write, stdin, stdout};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, ValueEnum};
use confini::{Options, OptionsPatch};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LineEndingArg {
    Crlf,
    Lf,
    Cr,
    Lfcr,
    /// Detect from the input
    Auto,
}

impl LineEndingArg {
    fn literal(self) -> Option<&'static str> {
        match self {
            LineEndingArg::Crlf => Some("\r\n"),
            LineEndingArg::Lf => Some("\n"),
            LineEndingArg::Cr => Some("\r"),
            LineEndingArg::Lfcr => Some("\n\r"),
            LineEndingArg::Auto => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "confini-cli", about = "CLI for INI ↔ JSON conversion", version)]
struct Args {
    /// Decode INI to JSON (default encodes JSON to INI)
    #[arg(short, long)]
    decode: bool,

    /// JSON file with option overrides (camelCase option names)
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Line ending used to split or join lines
    #[arg(long, value_enum)]
    line_ending: Option<LineEndingArg>,

    /// Assignment delimiter between key and value
    #[arg(long, value_name = "STR")]
    assign: Option<String>,

    /// Comment prefix; repeat for several
    #[arg(long = "comment", value_name = "STR")]
    comments: Vec<String>,

    #[arg(long, value_name = "STR")]
    section_open: Option<String>,

    #[arg(long, value_name = "STR")]
    section_close: Option<String>,

    /// Keep surrounding whitespace on each line
    #[arg(long)]
    no_trim: bool,

    #[arg(long)]
    quote_sections: bool,

    #[arg(long)]
    quote_keys: bool,

    #[arg(long)]
    quote_values: bool,

    /// Strip surrounding double quotes from section names, keys and values
    #[arg(long)]
    unquote: bool,

    /// Pretty-print JSON on output (when decoding)
    #[arg(long, default_value_t = false)]
    pretty: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Input file (defaults to stdin)
    input: Option<PathBuf>,
}

impl Args {
    fn flag_patch(&self) -> OptionsPatch {
        let mut patch = OptionsPatch::default();
        if let Some(arg) = self.line_ending {
            match arg.literal() {
                Some(ending) => {
                    patch.detect_line_ending = Some(false);
                    patch.line_ending = Some(ending.to_string());
                }
                None => patch.detect_line_ending = Some(true),
            }
        }
        patch.assign_identifier = self.assign.clone();
        if !self.comments.is_empty() {
            patch.comment_identifiers = Some(self.comments.clone());
        }
        patch.section_open_identifier = self.section_open.clone();
        patch.section_close_identifier = self.section_close.clone();
        if self.no_trim {
            patch.trim_lines = Some(false);
        }
        if self.quote_sections {
            patch.quote_attributes = Some(true);
        }
        if self.quote_keys {
            patch.quote_keys = Some(true);
        }
        if self.quote_values {
            patch.quote_values = Some(true);
        }
        if self.unquote {
            patch.unquote_attributes = Some(true);
            patch.unquote_keys = Some(true);
            patch.unquote_values = Some(true);
        }
        patch
    }

    /// defaults < options file < command-line flags
    fn resolve_options(&self) -> Result<Options> {
        let file_patch = match &self.options {
            Some(path) => {
                let text = fs::read_to_string(path)
                    .with_context(|| format!("reading options file {}", path.display()))?;
                serde_json::from_str::<OptionsPatch>(&text)
                    .with_context(|| format!("parsing options file {}", path.display()))?
            }
            None => OptionsPatch::default(),
        };
        Ok(Options::from_patch(&file_patch.merge(self.flag_patch())))
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut buf = Vec::new();
    match &args.input {
        Some(path) => {
            let mut f =
                File::open(path).with_context(|| format!("opening {}", path.display()))?;
            f.read_to_end(&mut buf)?;
        }
        None => {
            stdin().read_to_end(&mut buf)?;
        }
    }

    let options = args.resolve_options()?;
    log::debug!("resolved options: {:?}", options);

    let out = if args.decode {
        let doc = confini::decode_from_slice(&buf, &options)?;
        let value = confini::json::document_to_json(&doc);
        let mut s = if args.pretty {
            serde_json::to_string_pretty(&value)?
        } else {
            serde_json::to_string(&value)?
        };
        s.push('\n');
        s
    } else {
        let value: serde_json::Value =
            serde_json::from_slice(&buf).context("input is not valid JSON")?;
        let doc = confini::json::document_from_json(&value)?;
        confini::encode(&doc, &options)?
    };

    match &args.output {
        Some(path) => {
            fs::write(path, out).with_context(|| format!("writing {}", path.display()))?
        }
        None => stdout().write_all(out.as_bytes())?,
    }

    Ok(())
}
