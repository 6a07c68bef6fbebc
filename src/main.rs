use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser as ClapParser;

fn main() {
    let cli = Cli::parse();
    setup_logger(cli.verbose);
    log::trace!("Args: {:?}", cli);

    match run(cli) {
        Ok(()) => (),
        Err(err) => {
            eprintln!("An error occurred: {}", err);
            for cause in err.chain().skip(1) {
                eprintln!("    {}", cause);
            }
            std::process::exit(1);
        }
    }
}

#[derive(ClapParser, Debug)]
#[command(about = "Parse SRT subtitles and list their contents")]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "The file to read from. If not supplied, the subtitles will be read from standard input.",
        default_value = "-"
    )]
    input: String,
    #[arg(
        short,
        long,
        value_name = "TIMESTAMP",
        help = "Parse a single HH:MM:SS,SSS timestamp and print it in seconds."
    )]
    time: Option<String>,
    #[arg(
        short,
        long,
        action = clap::ArgAction::Count,
        help = "Increase log verbosity. May be repeated."
    )]
    verbose: u8,
}

fn setup_logger(level: u8) {
    let mut builder = pretty_env_logger::formatted_timed_builder();

    let log_level = match level {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    builder.filter_level(log_level);
    builder.format_timestamp_millis();
    builder.init();
}

fn run(cli: Cli) -> Result<()> {
    if let Some(time) = cli.time {
        let seconds = srtparse::parse_time(&time)
            .context(format!("Failed to parse timestamp: '{}'", time))?;
        println!("{}", seconds);
        return Ok(());
    }

    let data = if cli.input == "-" {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    } else {
        std::fs::read(&cli.input).context(format!("Failed to open input file: '{}'", cli.input))?
    };

    let subs = srtparse::parse_subtitles_bytes(&data)
        .context(format!("Failed to parse SRT file: '{}'", cli.input))?;
    if subs.is_empty() {
        log::warn!("no subtitles found in '{}'", cli.input);
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for sub in subs {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            sub.index,
            sub.start,
            sub.end,
            sub.lines().collect::<Vec<_>>().join("\\n")
        )
        .context("Failed to write to standard output")?;
    }
    Ok(())
}
