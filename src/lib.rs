// Phrasegen - Keyswitch MIDI clip generator for phrase-based instruments
// Module declarations

use clap::Parser;
use std::process::ExitCode;

pub mod batch;
pub mod cli;
pub mod clip;
pub mod commands;
pub mod config;
pub mod notes;
pub mod tables;

use cli::{Cli, Commands};

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    // RUST_LOG still wins when set
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            log::error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> anyhow::Result<ExitCode> {
    match cli.command {
        Commands::List => {
            let config = config::RunConfig {
                tables_file: cli.tables,
                ..Default::default()
            };
            for summary in commands::list_instruments(&config)? {
                println!(
                    "{:<12} {:<16} {:>3} entries  {:<20} octave correction {}",
                    summary.id,
                    summary.name,
                    summary.entry_count,
                    summary.folder,
                    if summary.octave_correction { "on" } else { "off" }
                );
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Show(args) => {
            let config = args.clip.run_config(cli.tables);
            let (summary, rows) = commands::show_instrument(&config, &args.instrument)?;

            println!(
                "{} ({}) -> {}/, octave correction {}",
                summary.name,
                summary.id,
                summary.folder,
                if summary.octave_correction { "on" } else { "off" }
            );
            for row in rows {
                match (row.index, row.effective_pitch, row.note, row.frequency_hz, row.filename) {
                    (Some(index), Some(effective), Some(note), Some(freq), Some(filename)) => println!(
                        "{:>3}  {:>3} -> {:>3} {:<5} {:>9.2} Hz  {}",
                        index, row.pitch, effective, note, freq, filename
                    ),
                    _ => println!(
                        "  -  {:>3}  skipped {:?}: {}",
                        row.pitch,
                        row.label,
                        row.problem.unwrap_or_default()
                    ),
                }
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Generate(args) => {
            let config = args.clip.run_config(cli.tables);
            let reports = commands::generate(&config, &args.instruments, args.all)?;

            let mut complete = true;
            for report in &reports {
                println!(
                    "{}: {} written, {} skipped",
                    report.output_dir.display(),
                    report.written.len(),
                    report.skipped.len()
                );
                complete &= report.is_complete();
            }
            Ok(if complete { ExitCode::SUCCESS } else { ExitCode::from(2) })
        }
        Commands::Range(args) => {
            let config = args.clip.run_config(cli.tables);
            let report = commands::generate_range(
                &config,
                &args.start,
                &args.end,
                &args.folder,
                args.notation,
            )?;

            println!(
                "{}: {} written, {} skipped",
                report.output_dir.display(),
                report.written.len(),
                report.skipped.len()
            );
            Ok(if report.is_complete() { ExitCode::SUCCESS } else { ExitCode::from(2) })
        }
    }
}
