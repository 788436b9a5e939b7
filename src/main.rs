use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{Duration, Instant};

use clap::Parser;

use sais_lcp::lcp::{lcp_kasai, lcp_naive, lcp_phi};
use sais_lcp::{IndexStorage, IndexWidth, MemoryGauge, SaisBuilder};

const SENTINEL: u8 = 0x00;
const END_OF_TEXT: u8 = 0x03;

static FALLBACK_TEXT: &[u8] = b"mississippi\0";

/// Build the suffix array and LCP arrays of a file and report construction
/// times and peak working memory.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Input file; a built-in sample text is used when absent
    input: Option<PathBuf>,

    /// Truncate the input to 2^EXPONENT bytes before construction
    truncate_exponent: Option<u32>,
}

#[derive(Debug)]
enum DriverError {
    Io(io::Error),
    TruncationTooLarge { exponent: u32, text_len: usize },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(error) => write!(f, "input file could not be opened: {error}"),
            Self::TruncationTooLarge { exponent, text_len } => write!(
                f,
                "cannot truncate to 2^{exponent} bytes, the input only has {text_len}"
            ),
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(error: io::Error) -> Self {
        Self::Io(error)
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(error) => {
            let exit_code = if error.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
            let _ = error.print();
            return exit_code;
        }
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), DriverError> {
    let text = load_text(args)?;

    let report = match IndexWidth::for_text_len(text.len()) {
        IndexWidth::U16 => construct_and_measure::<u16>(&text),
        IndexWidth::U32 => construct_and_measure::<u32>(&text),
        IndexWidth::U64 => construct_and_measure::<u64>(&text),
    };

    println!("{report}");

    Ok(())
}

fn load_text(args: &Args) -> Result<Vec<u8>, DriverError> {
    let mut text = match &args.input {
        Some(path) => fs::read(path)?,
        None => FALLBACK_TEXT[..FALLBACK_TEXT.len() - 1].to_vec(),
    };

    sanitize(&mut text);
    text.push(SENTINEL);

    if let Some(exponent) = args.truncate_exponent {
        truncate_to_power_of_two(&mut text, exponent)?;
    }

    Ok(text)
}

// the construction reserves 0x00 for the trailing sentinel; stray NUL bytes
// are remapped to the end-of-text control character
fn sanitize(text: &mut [u8]) {
    for byte in text.iter_mut() {
        if *byte == SENTINEL {
            *byte = END_OF_TEXT;
        }
    }
}

fn truncate_to_power_of_two(text: &mut Vec<u8>, exponent: u32) -> Result<(), DriverError> {
    let target_len = match 1usize.checked_shl(exponent) {
        Some(target_len) if target_len < text.len() => target_len,
        _ => {
            return Err(DriverError::TruncationTooLarge {
                exponent,
                text_len: text.len(),
            });
        }
    };

    text.truncate(target_len);
    *text.last_mut().unwrap() = SENTINEL;

    Ok(())
}

struct Report {
    suffix_array_time: Duration,
    suffix_array_peak_mebibytes: usize,
    lcp_naive_time: Duration,
    lcp_kasai_time: Duration,
    lcp_phi_time: Duration,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RESULT name=sais-lcp \
             sa_construction_time={} \
             sa_construction_memory={} \
             lcp_naive_construction_time={} \
             lcp_kasai_construction_time={} \
             lcp_phi_construction_time={}",
            format_millis(self.suffix_array_time),
            self.suffix_array_peak_mebibytes,
            format_millis(self.lcp_naive_time),
            format_millis(self.lcp_kasai_time),
            format_millis(self.lcp_phi_time),
        )
    }
}

fn construct_and_measure<I: IndexStorage>(text: &[u8]) -> Report {
    let gauge = MemoryGauge::new();

    let (suffix_array, suffix_array_time) = timed(|| {
        SaisBuilder::<u8, I>::new()
            .with_memory_gauge(&gauge)
            .construct_suffix_array(text)
    });

    let (_, lcp_naive_time) = timed(|| lcp_naive(text, &suffix_array));
    let (_, lcp_kasai_time) = timed(|| lcp_kasai(text, &suffix_array));
    let (_, lcp_phi_time) = timed(|| lcp_phi(text, &suffix_array));

    Report {
        suffix_array_time,
        suffix_array_peak_mebibytes: gauge.peak_mebibytes(),
        lcp_naive_time,
        lcp_kasai_time,
        lcp_phi_time,
    }
}

fn timed<T>(work: impl FnOnce() -> T) -> (T, Duration) {
    let before = Instant::now();
    let value = work();
    (value, before.elapsed())
}

#[cfg(not(feature = "precise-timings"))]
fn format_millis(duration: Duration) -> String {
    duration.as_millis().to_string()
}

#[cfg(feature = "precise-timings")]
fn format_millis(duration: Duration) -> String {
    format!("{}", duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_remaps_nul_bytes() {
        let mut text = vec![b'a', 0, b'b', 0];
        sanitize(&mut text);
        assert_eq!(text, [b'a', END_OF_TEXT, b'b', END_OF_TEXT]);
    }

    #[test]
    fn test_truncation_forces_sentinel() {
        let mut text = b"abcdefg".to_vec();
        text.push(SENTINEL);

        truncate_to_power_of_two(&mut text, 2).unwrap();

        assert_eq!(text, [b'a', b'b', b'c', SENTINEL]);
    }

    #[test]
    fn test_truncation_must_shrink() {
        let mut text = b"abc\0".to_vec();

        assert!(truncate_to_power_of_two(&mut text, 2).is_err());
        assert!(truncate_to_power_of_two(&mut text, 40).is_err());
        assert!(truncate_to_power_of_two(&mut text, u32::MAX).is_err());
    }

    #[test]
    fn test_fallback_text_report() {
        let text = load_text(&Args {
            input: None,
            truncate_exponent: None,
        })
        .unwrap();

        assert_eq!(text, FALLBACK_TEXT);

        let report = construct_and_measure::<u16>(&text);
        assert_eq!(report.suffix_array_peak_mebibytes, 0);
    }
}
