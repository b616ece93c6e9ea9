// Command-line interface for tgmd
//
// This binary turns Markdown into Telegram MarkdownV2 text ready to be sent with
// `parse_mode=MarkdownV2`. The heavy lifting lives in the tgmd-render crate; this is a thin shell
// that reads input, resolves configuration and writes the result.
//
// Usage:
//  tgmd <input> [--output <file>]           - Convert Markdown to MarkdownV2 (default)
//  tgmd convert <input> [--output <file>]   - Same as above (explicit)
//  tgmd latex <input> [--output <file>]     - Only rewrite \(..\) and \[..\] spans in plain text
//  tgmd symbols                             - Print the LaTeX symbol table
//
// An input of `-` reads from stdin.
//
// Extra Parameters:
//
// Rendering knobs from tgmd.toml can be overridden with --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and applies the value to the loaded configuration.
// Example:
//  tgmd notes.md --extra-indent-size 2 --extra-normalize-math

use clap::{Arg, Command, ValueHint};
use log::{debug, warn};
use std::collections::HashMap;
use std::fs;
use std::io::{self, Read};
use tgmd_config::{Loader, TgmdConfig};
use tgmd_render::latex::symbols::SYMBOLS;
use tgmd_render::{LatexNormalizer, RenderOptions};

const SUBCOMMANDS: &[&str] = &["convert", "latex", "symbols", "help"];

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // A following token that is not a flag is the value.
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn input_arg() -> Arg {
    Arg::new("input")
        .help("Input file path, or - for stdin")
        .required(true)
        .index(1)
        .value_hint(ValueHint::FilePath)
}

fn output_arg() -> Arg {
    Arg::new("output")
        .long("output")
        .short('o')
        .help("Output file path (defaults to stdout)")
        .value_hint(ValueHint::FilePath)
}

fn build_cli() -> Command {
    Command::new("tgmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Telegram MarkdownV2")
        .long_about(
            "tgmd renders Markdown as Telegram MarkdownV2 text.\n\n\
            Commands:\n  \
            - convert: Markdown to MarkdownV2 (default)\n  \
            - latex:   Rewrite LaTeX spans in plain text as Unicode code spans\n  \
            - symbols: Print the LaTeX symbol table\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to override tgmd.toml settings.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            tgmd notes.md                              # Convert to stdout\n  \
            tgmd notes.md -o notes.txt                 # Convert to a file\n  \
            cat notes.md | tgmd -                      # Read from stdin\n  \
            tgmd notes.md --extra-normalize-math       # Keep block math as Unicode",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a tgmd.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert Markdown to MarkdownV2 (default command)")
                .long_about(
                    "Render a Markdown document as Telegram MarkdownV2.\n\n\
                    Reserved characters are escaped, lists are numbered and indented,\n\
                    tables become monospace blocks and LaTeX math is approximated\n\
                    with Unicode.\n\n\
                    Unsupported constructs (hard line breaks, superscript, ...) abort the\n\
                    conversion with an error.\n\n\
                    Examples:\n  \
                    tgmd convert notes.md                 # Convert to stdout\n  \
                    tgmd convert notes.md -o out.txt      # Convert to a file\n  \
                    tgmd notes.md                         # 'convert' is optional",
                )
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("latex")
                .about("Rewrite LaTeX spans in plain text")
                .long_about(
                    "Find \\(...\\) and \\[...\\] spans in plain text and replace the ones\n\
                    containing LaTeX with Unicode code spans and code blocks.\n\n\
                    Everything outside those spans is left as is.",
                )
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(Command::new("symbols").about("Print the LaTeX symbol table"))
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // A bare path as first argument means "convert".
            let looks_like_input = cleaned_args.get(1).is_some_and(|first| {
                (first == "-" || !first.starts_with('-')) && !SUBCOMMANDS.contains(&first.as_str())
            });
            if looks_like_input {
                let mut new_args = vec![cleaned_args[0].clone(), "convert".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                e.exit();
            }
        }
    };

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);
    for key in extra_params.keys() {
        warn!("ignoring unknown parameter --extra-{key}");
    }
    debug!("resolved configuration: {config:?}");

    match matches.subcommand() {
        Some(("convert", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_convert_command(input, output, &config);
        }
        Some(("latex", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());
            handle_latex_command(input, output, &config);
        }
        Some(("symbols", _)) => handle_symbols_command(),
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the convert command
fn handle_convert_command(input: &str, output: Option<&str>, config: &TgmdConfig) {
    let source = read_input(input);
    let options = RenderOptions::from(&config.render);

    let text = tgmd_render::convert_markdown_with(&source, &options).unwrap_or_else(|e| {
        eprintln!("Conversion error: {e}");
        std::process::exit(1);
    });

    write_output(output, &text);
}

/// Handle the latex command
fn handle_latex_command(input: &str, output: Option<&str>, config: &TgmdConfig) {
    let source = read_input(input);
    let normalizer = LatexNormalizer::with_min_length(config.render.math.min_detect_length);
    write_output(output, &normalizer.escape_latex(&source));
}

/// Handle the symbols command
fn handle_symbols_command() {
    println!("LaTeX symbols:\n");
    for (command, glyph) in SYMBOLS {
        println!("  {command:<16} {glyph}");
    }
}

fn read_input(input: &str) -> String {
    let result = if input == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer).map(|_| buffer)
    } else {
        fs::read_to_string(input)
    };

    result.unwrap_or_else(|e| {
        eprintln!("Error reading '{input}': {e}");
        std::process::exit(1);
    })
}

fn write_output(output: Option<&str>, text: &str) {
    match output {
        Some(path) => {
            fs::write(path, text).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => print!("{text}"),
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> TgmdConfig {
    let loader = Loader::new().with_optional_file("tgmd.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn apply_config_overrides(config: &mut TgmdConfig, extra_params: &mut HashMap<String, String>) {
    let render = &mut config.render;

    if let Some(raw) = take_override(extra_params, &["indent-size", "indent"]) {
        render.indent_size = parse_usize_arg("indent-size", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["normalize-math", "normalize-blocks"]) {
        render.math.normalize_blocks = parse_bool_arg("normalize-math", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["latex-min-length"]) {
        render.math.min_detect_length = parse_usize_arg("latex-min-length", &raw);
    }

    if let Some(raw) = take_override(extra_params, &["min-column-width"]) {
        render.table.min_column_width = parse_usize_arg("min-column-width", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-column-width"]) {
        render.table.max_column_width = parse_usize_arg("max-column-width", &raw);
    }
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}

fn parse_usize_arg(flag: &str, raw: &str) -> usize {
    raw.parse().unwrap_or_else(|_| {
        eprintln!("Invalid number '{raw}' for --extra-{flag}");
        std::process::exit(1);
    })
}
