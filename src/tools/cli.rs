use std::fmt::{Display, Formatter};

use clap::Parser;
use log::{info, LevelFilter};

/// Zip or Unzip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Zip,
    Unzip,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Define the two output channels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Command Line Interpretation - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffzip",
    version,
    about = "A static Huffman coding file compressor.",
    long_about = "
    Compresses files with classic two-pass Huffman coding: one pass counts
    symbol frequencies and builds the prefix-code tree, the second pass
    replaces each symbol with its bit path through that tree. Compressed
    files carry the frequency table, so decompression rebuilds the
    identical tree and needs nothing else."
)]
struct Args {
    /// Files to process
    #[clap(required = true)]
    files: Vec<String>,

    /// Perform compression on the input files (the default)
    #[clap(short = 'z', long = "compress")]
    compress: bool,

    /// Perform decompression on the input files
    #[clap(short = 'd', long = "decompress")]
    decompress: bool,

    /// Keep (don't delete) input files
    #[clap(short = 'k', long = "keep")]
    keep: bool,

    /// Overwrite existing output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Send output to stdout
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Suppress all messages
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,

    /// Be verbose (repeat for more: -v info, -vv debug, -vvv trace)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: usize,
}

/// All user settable options that control program behavior.
#[derive(Debug)]
pub struct HzOpts {
    /// Names of files to read for input
    pub files: Vec<String>,
    /// Compress or Decompress
    pub op_mode: Mode,
    /// Don't remove input files after processing
    pub keep_input_files: bool,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Location where output is sent
    pub output: Output,
}

/// Parse the command line into an HzOpts and set the log level from the
/// -q/-v flags.
pub fn hzopts_init() -> HzOpts {
    let args = Args::parse();

    // Set the log level
    let level = if args.quiet {
        LevelFilter::Off
    } else {
        match args.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };
    log::set_max_level(level);

    let opts = HzOpts {
        files: args.files,
        op_mode: if args.decompress {
            Mode::Unzip
        } else {
            Mode::Zip
        },
        keep_input_files: args.keep,
        force_overwrite: args.force,
        output: if args.stdout {
            Output::Stdout
        } else {
            Output::File
        },
    };

    info!("Operational mode set to {}", opts.op_mode);
    if opts.keep_input_files {
        info!("Keeping input files");
    }
    if opts.force_overwrite {
        info!("Forcing file overwriting");
    }
    opts
}

#[cfg(test)]
mod test {
    use super::{Args, Parser};

    #[test]
    fn combined_short_flags_test() {
        let args = Args::try_parse_from(["huffzip", "-zk", "peter.txt"]).unwrap();
        assert!(args.compress);
        assert!(args.keep);
        assert!(!args.decompress);
        assert_eq!(args.files, vec!["peter.txt".to_string()]);
    }

    #[test]
    fn decompress_flag_test() {
        let args = Args::try_parse_from(["huffzip", "-d", "a.hfz", "b.hfz"]).unwrap();
        assert!(args.decompress);
        assert_eq!(args.files.len(), 2);
    }

    #[test]
    fn verbosity_accumulates_test() {
        let args = Args::try_parse_from(["huffzip", "-vvv", "peter.txt"]).unwrap();
        assert_eq!(args.verbose, 3);
    }

    #[test]
    fn files_are_required_test() {
        assert!(Args::try_parse_from(["huffzip", "-z"]).is_err());
    }
}
