use lutfiy_core::{Lutfiy, ProcessOptions};
use std::io::{stdin, stdout, Write};

use crossterm::style::Stylize;

fn main() {
    let lutfiy = Lutfiy::new();

    println!("{}", "Lutfiy - Southern Uzbek text processing".bold());
    println!("---------------------------------------------------------------");
    println!("Type a line of Perso-Arabic text and press [Enter].");
    println!("'exit' to quit.\n");

    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let line = input.trim();

        match line {
            "exit" => break,
            "" => continue,
            text => print_report(&lutfiy, text),
        }
    }
}

fn print_report(lutfiy: &Lutfiy, text: &str) {
    let fixed = lutfiy.fix_zwnj(text);
    println!("{} {}", "fixed:".green(), fixed);

    let options = ProcessOptions {
        fix_zwnj: true,
        transliterate: true,
    };
    match lutfiy.process(text, options) {
        Ok(latin) => println!("{} {}", "latin:".cyan(), latin),
        Err(e) => println!("{} {}", "error:".red(), e),
    }

    let decisions = lutfiy.analyze_zwnj(text);
    if decisions.is_empty() {
        println!("{}", "no candidate boundaries".dark_grey());
    } else {
        println!("{}", "boundaries:".bold());
        for d in &decisions {
            let verdict = if d.required {
                "break".yellow()
            } else {
                "keep".dark_grey()
            };
            println!("  at {:>3}  [{}]  {}", d.offset, d.context, verdict);
        }
    }
    println!();
}
