use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process::ExitCode,
};

use clap::Parser;
use miette::Report;
use rust_sl::{builtins, Sl, SlError};

/// sl runs SL scripts, or starts an interactive prompt when no file is given.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script to run.
    file: Option<PathBuf>,

    /// Don't print the welcome message in interactive mode.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(usage_exit_status(&err));
        }
    };

    match args.file {
        Some(path) => run_file(path),
        None => {
            if !args.quiet {
                print_welcome();
            }
            run_prompt()
        }
    }
}

fn run_file(path: PathBuf) -> ExitCode {
    let globals = builtins::global_environment();
    let mut sl = Sl::new(&globals, io::stdout());

    let result = sl.run_file(&path);
    print_diagnostics(&path.display().to_string(), &mut sl);

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err @ SlError::Io { .. }) => {
            eprintln!("{:?}", Report::new(err));
            ExitCode::from(2)
        }
        Err(_) => {
            eprintln!("Errors occurred while the file was loading. Exiting...");
            ExitCode::from(2)
        }
    }
}

fn run_prompt() -> ExitCode {
    let globals = builtins::global_environment();
    let mut sl = Sl::new(&globals, io::stdout());
    let mut lines = io::stdin().lock().lines();

    loop {
        print!("> ");
        if io::stdout().flush().is_err() {
            return ExitCode::from(3);
        }

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) => {
                eprintln!("{:?}", Report::msg(err.to_string()));
                return ExitCode::from(3);
            }
            None => return ExitCode::SUCCESS,
        };

        match line.trim() {
            "" => continue,
            ":quit" | ":exit" => return ExitCode::SUCCESS,
            _ => {}
        }

        // Errors are already collected as diagnostics.
        let _ = sl.run(&line);
        print_diagnostics("<repl>", &mut sl);
        sl.reset();
    }
}

/// `--help` and `--version` succeed; any other command line problem is a
/// usage error.
fn usage_exit_status(err: &clap::Error) -> u8 {
    if err.exit_code() == 0 {
        0
    } else {
        1
    }
}

fn print_diagnostics<W: Write>(source_name: &str, sl: &mut Sl<'_, W>) {
    let diagnostics = sl.take_diagnostics();
    if diagnostics.is_empty() {
        return;
    }

    eprintln!("{}:", source_name);
    for diagnostic in diagnostics {
        eprintln!("{:?}", Report::new(diagnostic));
    }
}

fn print_welcome() {
    println!("sl - SL interpreter, version {}.", builtins::VERSION_STR);
    println!("To exit press Ctrl-D or type ':quit' or ':exit' (without quotes).");
    println!();
}
