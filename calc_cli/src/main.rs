//! # Petal CLI Application
//!
//! Drives the keypad calculator from the terminal. Each argument is a key
//! label (`AC`, `±`, `%`, `÷`, `×`, `-`, `+`, `=`, `.`) or a number, which
//! is typed digit by digit.
//!
//! ```bash
//! calc_cli 5 + 3 =          # prints 8
//! calc_cli --json 6 / 0 =   # prints the state snapshot as JSON
//! calc_cli                  # reads keys from stdin, one line at a time
//! ```

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::warn;

use calc_core::{AppConfig, CalcError, CalcResult, Calculator, Key};

#[derive(Parser)]
#[command(name = "calc_cli")]
#[command(about = "Petal keypad calculator", version)]
struct Cli {
    /// Keys to press in order (e.g. `12 + 3 =`). Reads stdin when omitted.
    #[arg(allow_hyphen_values = true)]
    keys: Vec<String>,

    /// Print the full state snapshot as JSON instead of the display
    #[arg(long)]
    json: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            return ExitCode::FAILURE;
        }
    };
    calc_core::logging::init_with_config(&config.logging);

    if cli.print_config {
        return match config.to_toml_string() {
            Ok(text) => {
                print!("{}", text);
                ExitCode::SUCCESS
            }
            Err(e) => {
                report_error(&e);
                ExitCode::FAILURE
            }
        };
    }

    let mut calc = Calculator::new();

    if !cli.keys.is_empty() {
        let line = cli.keys.join(" ");
        let ok = press_line(&mut calc, &line);
        print_output(&calc, cli.json);
        return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
    }

    match run_interactive(&mut calc, cli.json) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> CalcResult<AppConfig> {
    match path {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load(),
    }
}

/// Press every token on the line. Invalid tokens are reported and skipped.
///
/// Returns false if any token was rejected.
fn press_line(calc: &mut Calculator, line: &str) -> bool {
    let mut ok = true;
    for token in line.split_whitespace() {
        match Key::parse_token(token) {
            Ok(keys) => keys.into_iter().for_each(|key| calc.press(key)),
            Err(e) => {
                warn!(token, "rejected key");
                report_error(&e);
                ok = false;
            }
        }
    }
    ok
}

fn run_interactive(calc: &mut Calculator, json: bool) -> io::Result<()> {
    println!("Petal Calculator");
    println!("================");
    println!("Enter keys separated by spaces (e.g. `12 + 3 =`). Ctrl-D to quit.");
    println!();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("[{}] > ", calc.pending().unwrap_or_default());
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            println!();
            return Ok(());
        };
        press_line(calc, &line);
        print_output(calc, json);
    }
}

fn print_output(calc: &Calculator, json: bool) {
    if json {
        match serde_json::to_string_pretty(&calc.state()) {
            Ok(text) => println!("{}", text),
            Err(e) => report_error(&CalcError::from(e)),
        }
    } else {
        println!("{}", calc.display());
    }
}

fn report_error(e: &CalcError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_negative_looking_keys() {
        let cli = Cli::try_parse_from(["calc_cli", "9", "-", "4", "="]).unwrap();
        assert_eq!(cli.keys, vec!["9", "-", "4", "="]);
        assert!(!cli.json);
    }

    #[test]
    fn test_press_line() {
        let mut calc = Calculator::new();
        assert!(press_line(&mut calc, "12 × 3 ="));
        assert_eq!(calc.display(), "36");
    }

    #[test]
    fn test_press_line_skips_bad_tokens() {
        let mut calc = Calculator::new();
        assert!(!press_line(&mut calc, "5 + foo 3 ="));
        assert_eq!(calc.display(), "8");
    }
}
