mod cli;

use std::{
    fs,
    io::{self, BufRead, Write},
    path::Path,
    process,
};

use clap::Parser;
use cli::{Cli, Command, OutputFormat};
use lox::{
    error::{PResult, StderrReporter},
    syntax,
};

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Command::Scan { file, format } => run_file(&file, format),
        Command::Repl { format } => run_prompt(format),
        Command::Sample => {
            println!("{}", syntax::render(&syntax::sample()));
            Ok(true)
        }
    };

    match result {
        Ok(true) => (),
        Ok(false) => process::exit(1),
        Err(why) => {
            eprintln!("{why}");
            process::exit(1);
        }
    }
}

fn init_logger(verbose: u8) {
    let mut builder = env_logger::Builder::from_default_env();
    match verbose {
        0 => (),
        1 => {
            builder.filter_level(log::LevelFilter::Debug);
        }
        _ => {
            builder.filter_level(log::LevelFilter::Trace);
        }
    }
    builder.init();
}

/// Returns `false` if the file had lexical errors.
fn run_file(path: &Path, format: OutputFormat) -> PResult<bool> {
    log::debug!("scanning {path:?}");
    let src = fs::read_to_string(path)?;

    let mut reporter = StderrReporter::new();
    run(&src, format, &mut reporter);
    Ok(!reporter.had_error())
}

fn run_prompt(format: OutputFormat) -> PResult<bool> {
    let stdin = io::stdin();
    let mut reporter = StderrReporter::new();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let line = line.trim_end();
        if line == "exit" {
            break;
        }

        run(line, format, &mut reporter);
        reporter.reset();
    }

    Ok(true)
}

fn run(src: &str, format: OutputFormat, reporter: &mut StderrReporter) {
    let scanned = syntax::scan(src);
    scanned.report_to(reporter);

    match format {
        OutputFormat::Tokens => {
            for token in &scanned.tokens {
                println!("{token}");
            }
        }
        OutputFormat::Summary => println!(
            "{} tokens, {} errors",
            scanned.tokens.len(),
            scanned.diagnostics.len()
        ),
    }
}
