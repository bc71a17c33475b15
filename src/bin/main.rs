use anyhow::Context;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use kovol_core::config::KovolConfig;
use kovol_core::display::paradigm_table;
use kovol_core::logging::init_tracing;
use kovol_core::{OrthographyEngine, PredictedVerb};
use std::io::{stdin, stdout, Write};

fn main() {
    if let Err(error) = run() {
        eprintln!("kovol error: {error:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    init_tracing(false)
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;
    let config = KovolConfig::load().context("failed to load kovol.toml / KOVOL_* settings")?;
    let normalizer = OrthographyEngine::new(config.normalizer.hard_fail);

    print_banner()?;

    loop {
        print!("\n> ");
        stdout().flush()?;

        let mut input = String::new();
        if stdin().read_line(&mut input)? == 0 {
            break;
        }
        let mut words = input.split_whitespace();

        match words.next() {
            None => {}
            Some("exit") => break,
            Some("clear") => print_banner()?,
            Some("n") => {
                let text = words.collect::<Vec<_>>().join(" ");
                run_normalize(&normalizer, &text);
            }
            Some("p") => match (words.next(), words.next()) {
                (Some(remote), Some(recent)) => {
                    let english = words.collect::<Vec<_>>().join(" ");
                    run_predict(remote, recent, &english);
                }
                _ => println!(
                    "{}",
                    "usage: p <remote past 1s> <recent past 1s> [english]".yellow()
                ),
            },
            Some(other) => println!("{} {}", "unknown command:".yellow(), other),
        }
    }
    Ok(())
}

fn print_banner() -> anyhow::Result<()> {
    execute!(stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("{}", "Kovol phonemics and verb prediction".bold());
    println!("---------------------------------------------------------------");
    println!("n <phonemic text>                         normalize to orthography");
    println!("p <remote past 1s> <recent past 1s> [gloss] predict a paradigm");
    println!("clear, exit");
    Ok(())
}

fn run_normalize(normalizer: &OrthographyEngine, text: &str) {
    match normalizer.normalize(text) {
        Ok(normalized) => {
            println!("{}", normalized.orthography.as_str().green());
            for error in &normalized.errors {
                println!("  {}", error.as_str().red());
            }
        }
        Err(error) => println!("{}", error.to_string().red()),
    }
}

fn run_predict(remote: &str, recent: &str, english: &str) {
    match PredictedVerb::new(remote, recent, Some(english)) {
        Ok(verb) => {
            println!("root: {}", verb.root().bold());
            println!("{}", paradigm_table(verb.english(), verb.paradigm(), ""));
        }
        Err(error) => println!("{}", error.to_string().red()),
    }
}
