use std::io::{self, BufRead, Write};
use std::process;

use clap::{Parser, ValueEnum};
use rust_text_repair::{CleanerConfig, Result, Strategy, TextCleaner, ValidatorConfig};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum StrategyArg {
    Optimal,
    Greedy,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Optimal => Strategy::Optimal,
            StrategyArg::Greedy => Strategy::Greedy,
        }
    }
}

/// Repair text copied out of PDF selections.
///
/// Reads one selection per line from stdin unless --text is given.
#[derive(Debug, Parser)]
#[command(name = "text-repair")]
struct Args {
    /// Clean this text instead of reading stdin
    #[arg(long)]
    text: Option<String>,

    #[arg(long, value_enum, default_value = "optimal")]
    strategy: StrategyArg,

    /// Minimum length for accepting unknown alphabetic words; 0 disables the catch-all
    #[arg(long, default_value_t = 4)]
    fallback_min_len: usize,

    /// Print pattern, confidence and substitution count after each line
    #[arg(long, default_value_t = false)]
    report: bool,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(e) = run(&args) {
        eprintln!("text-repair: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = CleanerConfig {
        strategy: args.strategy.into(),
        validator: ValidatorConfig {
            fallback_min_len: (args.fallback_min_len > 0).then_some(args.fallback_min_len),
            ..ValidatorConfig::default()
        },
        ..CleanerConfig::default()
    };
    let cleaner = TextCleaner::new(config)?;

    let inputs: Vec<String> = match &args.text {
        Some(text) => vec![text.clone()],
        None => io::stdin().lock().lines().collect::<io::Result<_>>()?,
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.report {
        for input in &inputs {
            let result = cleaner.reconstruct(input);
            let confidence = result
                .confidence
                .map(|c| format!("{:.2}", c))
                .unwrap_or_else(|| "-".to_string());
            let strategy = result.strategy.map_or("-", Strategy::as_str);
            writeln!(
                out,
                "{}\t[{} strategy={} confidence={} subs={} fallbacks={}]",
                result.text,
                result.pattern,
                strategy,
                confidence,
                result.substitutions,
                result.fallbacks
            )?;
        }
    } else {
        for cleaned in cleaner.clean_batch(&inputs) {
            writeln!(out, "{}", cleaned)?;
        }
    }
    Ok(())
}
