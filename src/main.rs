mod debug_report;

use abacus_translator::{Context, parse_departure_date, translate_verbose_with};
use chrono::NaiveDate;
use std::io::{self, IsTerminal, Read};

fn main() {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    let ctx = Context::new(config.departure_date);
    let mut failed = false;

    for line in &config.inputs {
        let res = translate_verbose_with(line, &ctx);
        failed |= res.has_failures();

        if config.verbose {
            debug_report::print_run(&res, ctx.departure_date, config.color);
        } else {
            println!("{}", res.output);
        }
    }

    if failed {
        std::process::exit(1);
    }
}

struct CliConfig {
    inputs: Vec<String>,
    departure_date: Option<NaiveDate>,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut departure_date: Option<NaiveDate> = None;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("abacus {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "-v" | "--verbose" => verbose = true,
            "--color" => color = true,
            "--no-color" => color = false,
            "--departure" | "-d" => {
                let value = args.next().ok_or_else(|| "error: --departure expects a value".to_string())?;
                departure_date = parse_departure(&value)?;
            }
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value);
            }
            "--" => {
                let rest = args.collect::<Vec<_>>().join(" ");
                if !rest.trim().is_empty() {
                    if input.is_some() {
                        return Err("error: input provided multiple times".to_string());
                    }
                    input = Some(rest);
                }
                break;
            }
            _ if arg.starts_with("--departure=") => {
                let value = arg.trim_start_matches("--departure=");
                departure_date = parse_departure(value)?;
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(value.to_string());
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = std::iter::once(arg).chain(args).collect::<Vec<_>>().join(" ");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(rest);
                break;
            }
        }
    }

    let inputs = match input {
        Some(value) => vec![value],
        None => read_stdin_lines()?,
    };

    if inputs.iter().all(|line| line.trim().is_empty()) {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { inputs, departure_date, verbose, color })
}

/// Each non-blank stdin line is an independent entry.
fn read_stdin_lines() -> Result<Vec<String>, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer.lines().filter(|line| !line.trim().is_empty()).map(str::to_string).collect())
}

fn parse_departure(value: &str) -> Result<Option<NaiveDate>, String> {
    parse_departure_date(value)
        .map_err(|_| format!("error: invalid --departure '{value}' (expected YYYY-MM-DD)"))
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "abacus {version}

Translate SELCONNECT reservation shorthand into ABACUS shorthand.

Usage:
  abacus [OPTIONS] [--] <entry...>
  abacus [OPTIONS] --input <entry>
  <lines> | abacus [OPTIONS]

Options:
  -i, --input <entry>        Entry to translate. If omitted, reads remaining args
                             or, when no args are provided, every stdin line.
  -d, --departure <date>     Departure date in YYYY-MM-DD, needed for child
                             (CHD) records.
  -v, --verbose              Print a per-segment report instead of the bare
                             translation.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  At least one segment failed to translate.
  2  Invalid arguments or missing input.

Set ABACUS_DEBUG_RULES=1 to trace rule matching on stderr.
",
        version = env!("CARGO_PKG_VERSION"),
    )
}
