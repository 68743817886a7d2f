use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info, trace};

use crate::bitstream::bitwriter::BitWriter;
use crate::huffman_coding::code_table::code_table;
use crate::huffman_coding::encode::encode;
use crate::huffman_coding::error::CodingError;
use crate::huffman_coding::tree_build::build_tree;
use crate::tools::cli::{HzOpts, Output};
use crate::tools::freq_count::freqs;

/// Magic bytes opening every compressed stream.
pub const MAGIC: [u8; 3] = *b"HFz";
/// Frame layout version.
pub const VERSION: u8 = 0x01;
/// Extension appended to compressed file names.
pub const EXTENSION: &str = ".hfz";

/// Pack one input into a complete compressed frame: header, frequency
/// entries, payload bit count, then the Huffman coded payload. The frame
/// layout is documented in the module doc.
pub fn pack(data: &[u8]) -> Result<Vec<u8>, CodingError> {
    let counts = freqs(data);
    let tree = build_tree(&counts);
    let table = tree.as_ref().map(code_table).unwrap_or_default();

    let symbols: Vec<u8> = counts
        .iter()
        .enumerate()
        .filter(|(_, &count)| count > 0)
        .map(|(symbol, _)| symbol as u8)
        .collect();

    // The payload size is known before a single payload bit is written.
    let bit_count: u64 = symbols
        .iter()
        .map(|&symbol| counts[symbol as usize] as u64 * table[&symbol].len as u64)
        .sum();
    debug!("{} distinct symbols, {} payload bits", symbols.len(), bit_count);
    for &symbol in &symbols {
        trace!(
            "{:>10} x {:?} -> {}",
            counts[symbol as usize],
            symbol as char,
            table[&symbol]
        );
    }

    let mut bw = BitWriter::new(data.len() / 2 + 64);
    for byte in MAGIC {
        bw.out8(byte);
    }
    bw.out8(VERSION);
    bw.out16(symbols.len() as u16);
    for &symbol in &symbols {
        bw.out8(symbol);
        bw.out32(counts[symbol as usize]);
    }
    bw.out64(bit_count);

    let emitted = encode(data, &table, &mut bw)?;
    debug_assert_eq!(emitted, bit_count);
    bw.flush();
    Ok(bw.output)
}

/// Compress every file named in opts. Each input becomes `<name>.hfz`
/// beside it (or the packed bytes go to stdout with -c). Inputs are
/// removed after a successful write unless -k was given.
pub fn compress(opts: &HzOpts) -> Result<(), CodingError> {
    for fname in &opts.files {
        let data = fs::read(fname)?;
        info!("Compressing {} ({} bytes)", fname, data.len());

        let packed = pack(&data)?;
        if data.is_empty() {
            info!("Wrote {} bytes", packed.len());
        } else {
            info!(
                "Wrote {} bytes ({:.1}% of the input)",
                packed.len(),
                packed.len() as f64 * 100.0 / data.len() as f64
            );
        }

        match opts.output {
            Output::Stdout => std::io::stdout().write_all(&packed)?,
            Output::File => {
                let mut outname = fname.clone();
                outname.push_str(EXTENSION);
                if !opts.force_overwrite && Path::new(&outname).exists() {
                    return Err(CodingError::Io(std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        format!("{} exists; pass --force to overwrite it", outname),
                    )));
                }
                fs::write(&outname, &packed)?;
                if !opts.keep_input_files {
                    fs::remove_file(fname)?;
                }
            }
        }
    }
    Ok(())
}
