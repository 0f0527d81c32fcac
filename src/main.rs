use std::{
    fmt::Display,
    io::{stdin, stdout, Write},
    process::exit,
};

use anyhow::Context;
use clap::Parser;
use strptime_guess::{debug_detect, detect_all};

#[derive(Parser, Debug)]
#[command(version, about = "Guess the strftime template of an example date/time string")]
struct Args {
    /// Print every template that parses the example, preferred first
    #[arg(short, long)]
    all: bool,

    /// Print how the example was split before the result
    #[arg(short, long)]
    debug: bool,

    /// The example, e.g. 2030-01-24 05:45. Prompted for when left out
    date_string: Vec<String>,
}

fn unwrap_or_report<T, E: Display>(arg: Result<T, E>) -> T {
    match arg {
        Ok(value) => value,
        Err(msg) => {
            eprintln!("{}", msg);
            exit(1);
        }
    }
}

fn prompt() -> anyhow::Result<String> {
    println!("Paste an example date/time string to see the guessed format.");
    print!("> ");
    stdout().flush()?;

    let mut line = String::new();
    stdin()
        .read_line(&mut line)
        .context("could not read the example")?;

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn main() {
    let args = Args::parse();

    let text = if args.date_string.is_empty() {
        unwrap_or_report(prompt())
    } else {
        args.date_string.join(" ")
    };

    let detection = debug_detect(text.as_str());

    if args.debug {
        for segment in &detection.segments {
            eprintln!("{:>9} {:?}", segment.kind, segment.text);
        }
        eprintln!(
            "{} content segments, {} templates tried",
            detection.content_count, detection.tried
        );
    }

    let template = unwrap_or_report(detection.result);

    if args.all {
        for template in detect_all(text) {
            println!("{}", template);
        }
    } else {
        println!("{}", template);
    }
}
