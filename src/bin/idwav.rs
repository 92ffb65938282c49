//! idwav.rs
//!
//! Inspect idTech `idwav` sound entries extracted from a resource archive
//! and export them as standard wave files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

extern crate idwavfile;
use idwavfile::{transcode, CodecExtra, EntryKind, Error, Transcoded, WaveReader};

#[macro_use]
extern crate clap;
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

#[macro_use]
extern crate log;

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => return,
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_writer(io::stderr)
        .init();
}

fn read_entry(path: &Path) -> Result<Transcoded, Error> {
    let bytes = fs::read(path)?;
    transcode(&bytes)
}

fn print_extra(extra: &CodecExtra) {
    match extra {
        CodecExtra::Adpcm(adpcm) => {
            println!("  samples per block: {}", adpcm.samples_per_block);
            println!("  coefficients: {}", adpcm.num_coefficients);
        }
        CodecExtra::Xma2(xma2) => {
            println!("  streams: {}", xma2.num_streams);
            println!("  samples encoded: {}", xma2.samples_encoded);
            println!(
                "  play: {} + {}, loop: {} + {} x{}",
                xma2.play_begin, xma2.play_length, xma2.loop_begin, xma2.loop_length, xma2.loop_count
            );
            println!("  blocks: {} of {} bytes", xma2.block_count, xma2.bytes_per_block);
        }
        CodecExtra::Extensible(ext) => {
            println!("  valid bits: {}", ext.valid_bits_per_sample);
            println!("  channel mask: {:#x}", ext.channel_mask);
            println!("  sub format: {} ({})", ext.sub_format_label(), ext.sub_format);
        }
    }
}

fn info(path: &Path) -> Result<(), Error> {
    let info = match EntryKind::of(path) {
        EntryKind::IdWave => {
            let transcoded = read_entry(path)?;
            if let Some(extra) = &transcoded.extra {
                print_extra(extra);
            }
            transcoded.info
        }
        _ => WaveReader::open(path)?.audio_info()?,
    };

    println!("{}", path.display());
    println!("  {}", info.describe());
    println!("  bits per sample: {}", info.bits_per_sample);
    println!("  samples: {}", if info.is_xma2 { info.xma2_play_length as u64 } else { info.total_samples });
    println!("  data size: {}", info.data_size);
    println!("  duration: {}", idwavfile::format_clock_time(info.duration_seconds()));
    Ok(())
}

fn export(input: &Path, output: Option<&str>) -> Result<PathBuf, Error> {
    let output = match output {
        Some(o) => PathBuf::from(o),
        None => input.with_extension("wav"),
    };

    let transcoded = read_entry(input)?;
    fs::write(&output, &transcoded.wave)?;

    WaveReader::open(&output)?.validate_interchange()?;
    info!("wrote {} ({} bytes)", output.display(), transcoded.wave.len());
    Ok(output)
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    match matches.subcommand() {
        ("info", Some(sub)) => {
            for input in sub.values_of("INPUT").into_iter().flatten() {
                info(Path::new(input))?;
            }
            Ok(())
        }
        ("export", Some(sub)) => {
            let input = Path::new(sub.value_of("INPUT").unwrap_or_default());
            let output = export(input, sub.value_of("OUTPUT"))?;
            println!("{}", output.display());
            Ok(())
        }
        _ => Ok(()),
    }
}

fn main() {
    let matches = App::new("idwav")
        .version(crate_version!())
        .author(crate_authors!())
        .about("Inspect and export idTech idwav sound entries.")
        .setting(AppSettings::SubcommandRequiredElseHelp)
        .arg(Arg::with_name("verbose")
            .short("v")
            .multiple(true)
            .global(true)
            .help("Log progress to stderr, twice for chunk detail")
        )
        .subcommand(SubCommand::with_name("info")
            .about("Print format, channels, sample rate and duration")
            .arg(Arg::with_name("INPUT")
                .help("idwav or wav file")
                .required(true)
                .multiple(true)
            )
        )
        .subcommand(SubCommand::with_name("export")
            .about("Write an idwav entry as a standard wave file")
            .arg(Arg::with_name("OUTPUT")
                .long("output")
                .short("o")
                .takes_value(true)
                .help("Output file name. If absent, INPUT with a .wav extension.")
            )
            .arg(Arg::with_name("INPUT")
                .help("Input idwav file")
                .required(true)
            )
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(e) = run(&matches) {
        error!("{}", e);
        eprintln!("idwav: {}", e);
        process::exit(1);
    }
}
