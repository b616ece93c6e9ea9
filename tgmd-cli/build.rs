use clap::{Arg, Command, ValueHint};
use clap_complete::{generate_to, shells::*};
use std::env;
use std::io::Error;

// Mirror of build_cli() from src/main.rs
// We need to duplicate this here since build scripts can't access src/ modules
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

fn main() -> Result<(), Error> {
    let outdir = match env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };

    let mut cmd = Command::new("tgmd")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert Markdown to Telegram MarkdownV2")
        .arg_required_else_help(true)
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
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(
            Command::new("latex")
                .about("Rewrite LaTeX spans in plain text")
                .arg(input_arg())
                .arg(output_arg()),
        )
        .subcommand(Command::new("symbols").about("Print the LaTeX symbol table"));

    // Generate completions for bash
    generate_to(Bash, &mut cmd, "tgmd", &outdir)?;

    // Generate completions for zsh
    generate_to(Zsh, &mut cmd, "tgmd", &outdir)?;

    // Generate completions for fish
    generate_to(Fish, &mut cmd, "tgmd", &outdir)?;

    println!("cargo:warning=Shell completions generated in {outdir:?}");

    Ok(())
}
