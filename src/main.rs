mod cli;
mod config;
mod error;
mod logging;
mod output;
mod rng;
mod sequence;

use std::io;
use std::num::NonZeroUsize;
use std::path::Path;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;

use cli::Cli;
use config::GeneratorConfig;
use error::Error;

/// Build a GeneratorConfig by layering: defaults → TOML file → CLI overrides.
fn build_generator_config(cli: &Cli) -> Result<GeneratorConfig, Error> {
    let mut cfg = config::load_config(cli.config_file.as_deref())?.generator;

    if let Some(v) = cli.seed {
        cfg.seed = Some(v);
    }
    if let Some(v) = cli.line_ending {
        cfg.line_ending = v;
    }

    Ok(cfg)
}

fn run(cli: &Cli) -> Result<NonZeroUsize, Error> {
    let length = cli::parse_length(&cli.length)?;
    let cfg = build_generator_config(cli)?;

    let mut rng = rng::build(cfg.seed)?;
    let pair = sequence::generate_pair(&mut rng, length);

    output::write_sequences(&pair, &cli.output_file, cfg.line_ending).map_err(|e| {
        Error::Io(io::Error::new(
            e.kind(),
            format!("cannot write {}: {}", cli.output_file.display(), e),
        ))
    })?;

    Ok(length)
}

fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|p| Path::new(p).file_name())
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "seqgen".into())
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{}", cli::usage(&program_name()));
            process::exit(1);
        }
    };

    logging::init(&cli.log);

    match run(&cli) {
        Ok(length) => {
            println!(
                "Generated sequences of length {} in '{}'.",
                length,
                cli.output_file.display()
            );
        }
        Err(e @ Error::InvalidLength(_)) => {
            println!("{}", e);
            process::exit(e.exit_code());
        }
        Err(e) => {
            log::error!("{}", e);
            process::exit(e.exit_code());
        }
    }
}
