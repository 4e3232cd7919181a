use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::style::{StyledContent, Stylize};
use crossterm::{cursor, execute, terminal};
use tracing_subscriber::EnvFilter;

use pin_core::core::table::CharacterCodeTable;
use pin_core::settings::{CopyTarget, OutputFormat, Settings};
use pin_core::{PinEngine, PinError, ProcessedWord};

const NOTICE: &str =
    "Educational tool only: not affiliated with any bank and not a real banking security control.";

#[derive(Parser)]
#[command(name = "devanagari_pin", about = "Turn a Devanagari (or ITRANS) word into 4- and 6-digit PINs")]
struct Cli {
    /// Settings file (defaults to the per-user config location)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Hide the character/code breakdown
    #[arg(long, global = true)]
    no_breakdown: bool,
    /// Copy a PIN to the clipboard after a successful run
    #[arg(long, global = true)]
    copy: Option<CopyTarget>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate PINs for one word (multiple arguments are joined with spaces)
    Generate {
        #[arg(required = true)]
        word: Vec<String>,
    },
    /// Prompt for words until 'exit'
    Interactive,
    /// Read one word per stdin line and write one JSON object per line
    Batch,
    /// Print the character code table
    Table,
}

/// Effective options after layering CLI flags over settings.
struct Options {
    format: OutputFormat,
    breakdown: bool,
    copy: CopyTarget,
    /// Only style output that lands on a terminal.
    styled: bool,
}

fn main() {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e:#}");
            process::exit(2);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    init_logging(&settings.logging.filter);

    let options = Options {
        format: if cli.json { OutputFormat::Json } else { settings.output.format },
        breakdown: settings.output.breakdown && !cli.no_breakdown,
        copy: cli.copy.unwrap_or(settings.clipboard.copy),
        styled: io::stdout().is_terminal(),
    };
    let engine = PinEngine::new();

    match cli.command {
        Command::Generate { word } => {
            let word = word.join(" ");
            let result = engine.generate_pin(&word);
            {
                let mut stdout = io::stdout().lock();
                match options.format {
                    OutputFormat::Json => writeln!(stdout, "{}", to_json(&word, &result)?)?,
                    OutputFormat::Text => {
                        print_result(&mut stdout, &result, options.breakdown, options.styled)?
                    }
                }
                stdout.flush()?;
            }
            if let Ok(processed) = &result {
                // One-shot run: keep ownership of the selection until something replaces it.
                ClipboardWriter::new(true).copy(processed, options.copy);
            }
            Ok(exit_code(&result))
        }
        Command::Interactive => {
            interactive(&engine, &options)?;
            Ok(0)
        }
        Command::Batch => {
            batch(&engine)?;
            Ok(0)
        }
        Command::Table => {
            print_table(&mut io::stdout().lock())?;
            Ok(0)
        }
    }
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn exit_code(result: &Result<ProcessedWord, PinError>) -> i32 {
    if result.is_ok() {
        0
    } else {
        1
    }
}

fn to_json(input: &str, result: &Result<ProcessedWord, PinError>) -> Result<String> {
    let value = match result {
        Ok(processed) => {
            let mut value = serde_json::to_value(processed)?;
            value["status"] = "ok".into();
            value["input"] = input.into();
            value["notice"] = NOTICE.into();
            value
        }
        Err(e) => serde_json::json!({
            "status": "error",
            "input": input,
            "kind": e.kind(),
            "message": e.to_string(),
            "notice": NOTICE,
        }),
    };
    Ok(serde_json::to_string(&value)?)
}

fn paint<'a>(
    text: &'a str,
    styled: bool,
    style: impl FnOnce(StyledContent<&'a str>) -> StyledContent<&'a str>,
) -> String {
    if styled {
        style(text.stylize()).to_string()
    } else {
        text.to_string()
    }
}

fn print_result(
    out: &mut impl Write,
    result: &Result<ProcessedWord, PinError>,
    breakdown: bool,
    styled: bool,
) -> io::Result<()> {
    match result {
        Err(e) => {
            let message = e.to_string();
            writeln!(out, "{}", paint(&message, styled, |s| s.red()))?;
        }
        Ok(processed) => {
            if let Some(converted) = &processed.transliterated {
                writeln!(out, "Converted to Devanagari: {}", paint(converted, styled, |s| s.bold()))?;
            }
            if breakdown {
                let chars: Vec<String> =
                    processed.display_characters.iter().map(char::to_string).collect();
                let codes = processed.digit_codes.join(" ");
                writeln!(out, "\nWord breakdown: {}", chars.join(" "))?;
                writeln!(out, "Codes:          {}", paint(&codes, styled, |s| s.cyan()))?;
            }
            let pin4 = paint(&processed.pin4, styled, |s| s.bold().green());
            let pin6 = paint(&processed.pin6, styled, |s| s.bold().green());
            writeln!(out, "\n4-digit PIN: {pin4}")?;
            writeln!(out, "6-digit PIN: {pin6}")?;
        }
    }
    writeln!(out, "\n{}", paint(NOTICE, styled, |s| s.dim()))
}

/// Owns the clipboard handle. On Linux the selection lives only as long as
/// its owner, so the handle is kept for the whole session and one-shot runs
/// wait until another program takes the selection over.
struct ClipboardWriter {
    clipboard: Option<arboard::Clipboard>,
    wait: bool,
}

impl ClipboardWriter {
    fn new(wait: bool) -> Self {
        Self {
            clipboard: None,
            wait,
        }
    }

    /// Clipboard failures are reported once and never retried.
    fn copy(&mut self, processed: &ProcessedWord, target: CopyTarget) {
        let (pin, label) = match target {
            CopyTarget::None => return,
            CopyTarget::Pin4 => (&processed.pin4, "4-digit PIN"),
            CopyTarget::Pin6 => (&processed.pin6, "6-digit PIN"),
        };
        if self.wait && cfg!(target_os = "linux") {
            eprintln!("Keeping the {label} on the clipboard until something else is copied...");
        }
        match self.set_text(pin.clone()) {
            Ok(()) => eprintln!("{label} copied!"),
            Err(e) => {
                tracing::warn!("clipboard write failed: {e}");
                eprintln!("Copy error. Please copy manually.");
            }
        }
    }

    fn set_text(&mut self, text: String) -> Result<(), arboard::Error> {
        let clipboard = match self.clipboard.take() {
            Some(cb) => cb,
            None => arboard::Clipboard::new()?,
        };
        let clipboard = self.clipboard.insert(clipboard);

        #[cfg(target_os = "linux")]
        {
            use arboard::SetExtLinux;
            if self.wait {
                return clipboard.set().wait().text(text);
            }
        }
        clipboard.set_text(text)
    }
}

fn interactive(engine: &PinEngine, options: &Options) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut clipboard = ClipboardWriter::new(false);
    let mut last: Option<(String, Result<ProcessedWord, PinError>)> = None;

    loop {
        print_ui(&mut stdout, last.as_ref(), options)?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let word = input.trim_end_matches(&['\r', '\n'][..]);
        if word.trim() == "exit" {
            break;
        }

        let result = engine.generate_pin(word);
        if let Ok(processed) = &result {
            clipboard.copy(processed, options.copy);
        }
        last = Some((word.to_string(), result));
    }
    Ok(())
}

fn print_ui(
    stdout: &mut io::Stdout,
    last: Option<&(String, Result<ProcessedWord, PinError>)>,
    options: &Options,
) -> Result<()> {
    if options.styled {
        execute!(stdout, terminal::Clear(terminal::ClearType::All), cursor::MoveTo(0, 0))?;
    }
    writeln!(stdout, "{}", paint("Devanagari PIN Generator", options.styled, |s| s.bold()))?;
    writeln!(stdout, "---------------------------------------------------------------")?;
    writeln!(stdout, "Enter a Devanagari word (भारद्वाज, पर्व) or write in English (bharat).")?;
    writeln!(stdout, "Type 'exit' to quit.\n")?;

    if let Some((word, result)) = last {
        writeln!(stdout, "Input: [{word}]")?;
        print_result(stdout, result, options.breakdown, options.styled)?;
    }
    write!(stdout, "\n> ")?;
    stdout.flush()?;
    Ok(())
}

fn batch(engine: &PinEngine) -> Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let word = line?;
        let result = engine.generate_pin(&word);
        writeln!(stdout, "{}", to_json(&word, &result)?)?;
    }
    stdout.flush()?;
    Ok(())
}

fn print_table(out: &mut impl Write) -> io::Result<()> {
    for (c, code) in CharacterCodeTable::global().entries() {
        writeln!(out, "{c}\t{code}")?;
    }
    Ok(())
}
