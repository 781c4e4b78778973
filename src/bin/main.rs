use crossterm::style::Stylize;
use seg_core::{persistence, SegmentEngine};
use std::collections::HashMap;
use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::process;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let entries = match std::env::args().nth(1) {
        Some(path) => persistence::load_entries(Path::new(&path)).unwrap_or_else(|e| {
            eprintln!("failed to load dictionary '{}': {}", path, e);
            process::exit(1);
        }),
        None => demo_entries(),
    };

    let engine = SegmentEngine::from_entries(entries).unwrap_or_else(|e| {
        eprintln!("failed to build dictionary: {}", e);
        process::exit(1);
    });

    println!("{}", "Dictionary word segmenter".bold());
    println!(
        "{} words loaded (pass a .txt/.json/.bin dictionary path to use your own).",
        engine.dictionary().len()
    );
    println!("Type a line to segment it with all four strategies; 'exit' to quit.\n");

    loop {
        print!("> ");
        stdout().flush().unwrap();

        let mut input = String::new();
        if stdin().read_line(&mut input).unwrap() == 0 {
            break;
        }
        let text = input.trim();
        match text {
            "exit" => break,
            "" => continue,
            text => print_segmentations(&engine, text),
        }
    }
}

fn print_segmentations(engine: &SegmentEngine, text: &str) {
    let backward = engine.segment_backward_longest(text);
    let forward: Vec<&str> = engine.segment_forward_longest(text).collect();
    let reverse = engine.segment_reverse_longest(text);
    let best: Vec<&str> = engine.segment_max_probability(text).collect();

    println!("  {} {}", "backward longest:".cyan(), backward.join(" / "));
    println!("  {} {}", "forward longest :".cyan(), forward.join(" / "));
    println!("  {} {}", "reverse longest :".cyan(), reverse.join(" / "));
    println!("  {} {}", "max probability :".green().bold(), best.join(" / "));
}

/// Small built-in vocabulary so the binary is usable with no arguments.
fn demo_entries() -> HashMap<String, u64> {
    [
        ("china", 1),
        ("vip", 1),
        ("研究", 5),
        ("研究生", 4),
        ("生命", 10),
        ("命", 2),
        ("的", 1),
        ("起源", 8),
    ]
    .into_iter()
    .map(|(word, frequency)| (word.to_string(), frequency))
    .collect()
}
