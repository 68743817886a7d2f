//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

use huffzip::compression::compress::compress;
use huffzip::compression::decompress::decompress;
use huffzip::huffman_coding::error::CodingError;
use huffzip::tools::cli::{hzopts_init, Mode};

fn main() -> Result<(), CodingError> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stdout,
        simplelog::ColorChoice::AlwaysAnsi,
    )
    .unwrap();

    let opts = hzopts_init();

    //----- Figure out what we need to do and go do it
    let result = match opts.op_mode {
        Mode::Zip => compress(&opts),
        Mode::Unzip => decompress(&opts),
    };

    if let Err(e) = &result {
        error!("{}", e);
    }

    info!("Done.\n");
    result
}
