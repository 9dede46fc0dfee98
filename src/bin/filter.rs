// Line filter over stdin: corrected (and optionally transliterated)
// Southern Uzbek text comes out on stdout.
//
//   filter [--translit] [--no-fix] [--rules <path>]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use lutfiy_core::{persistence, Lutfiy, ProcessOptions};

fn main() -> ExitCode {
    let mut options = ProcessOptions::default();
    let mut rules_path: Option<PathBuf> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--translit" => options.transliterate = true,
            "--no-fix" => options.fix_zwnj = false,
            "--rules" => match args.next() {
                Some(path) => rules_path = Some(PathBuf::from(path)),
                None => {
                    eprintln!("--rules needs a path");
                    return ExitCode::FAILURE;
                }
            },
            other => {
                eprintln!("unknown flag: {}", other);
                eprintln!("usage: filter [--translit] [--no-fix] [--rules <path>]");
                return ExitCode::FAILURE;
            }
        }
    }

    let lutfiy = match build_engine(rules_path) {
        Ok(engine) => engine,
        Err(message) => {
            eprintln!("{}", message);
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };
        match lutfiy.process(&line, options) {
            Ok(processed) => {
                if writeln!(out, "{}", processed).is_err() {
                    // Downstream closed the pipe; stop quietly.
                    return ExitCode::SUCCESS;
                }
            }
            Err(e) => {
                eprintln!("{}", e);
                return ExitCode::FAILURE;
            }
        }
    }
    ExitCode::SUCCESS
}

fn build_engine(rules_path: Option<PathBuf>) -> Result<Lutfiy, String> {
    match rules_path {
        None => Ok(Lutfiy::new()),
        Some(path) => {
            let rules = persistence::load_rules(&path).map_err(|e| e.to_string())?;
            Lutfiy::from_rules(rules).map_err(|e| e.to_string())
        }
    }
}
