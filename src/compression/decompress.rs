use std::fs;
use std::io::Write;
use std::path::Path;

use log::{debug, info, trace, warn};

use super::compress::{EXTENSION, MAGIC, VERSION};
use crate::bitstream::bitreader::BitReader;
use crate::huffman_coding::decode::decode;
use crate::huffman_coding::error::CodingError;
use crate::huffman_coding::tree_build::build_tree;
use crate::tools::cli::{HzOpts, Output};

fn short_header() -> CodingError {
    CodingError::InvalidHeader("stream ends inside the header".to_string())
}

/// Unpack one compressed frame back into the original bytes. Validates the
/// header, rebuilds the code tree from the frequency entries, then decodes
/// exactly the declared number of payload bits.
pub fn unpack(data: &[u8]) -> Result<Vec<u8>, CodingError> {
    let mut br = BitReader::new(data);

    // Look for a valid signature.
    if br.bytes(3).ok_or_else(short_header)? != MAGIC {
        return Err(CodingError::InvalidHeader("bad magic bytes".to_string()));
    }
    let version = br.byte().ok_or_else(short_header)?;
    if version != VERSION {
        return Err(CodingError::InvalidHeader(format!(
            "unsupported frame version {}",
            version
        )));
    }

    let sym_count = br.bint(16).ok_or_else(short_header)? as usize;
    if sym_count > 256 {
        return Err(CodingError::InvalidHeader(format!(
            "symbol count {} out of range",
            sym_count
        )));
    }

    // Rebuild the frequency table from the header entries.
    let mut counts = vec![0_u32; 256];
    let mut total = 0_u64;
    for _ in 0..sym_count {
        let symbol = br.byte().ok_or_else(short_header)?;
        let count = br.bint(32).ok_or_else(short_header)? as u32;
        if count == 0 {
            return Err(CodingError::InvalidHeader(format!(
                "zero count for symbol {:#04x}",
                symbol
            )));
        }
        if counts[symbol as usize] != 0 {
            return Err(CodingError::InvalidHeader(format!(
                "duplicate entry for symbol {:#04x}",
                symbol
            )));
        }
        counts[symbol as usize] = count;
        total += count as u64;
    }

    let bit_count = br.bint(64).ok_or_else(short_header)?;
    debug!("Header: {} symbols, {} payload bits", sym_count, bit_count);
    trace!("Payload starts at {}", br.loc());

    // Deterministic construction guarantees this is the encoder's tree.
    let tree = build_tree(&counts);
    if tree.is_none() && bit_count > 0 {
        return Err(CodingError::EmptyTree);
    }
    if let Some(tree) = &tree {
        trace!(
            "Rebuilt code tree: height {}, weight {}",
            tree.height(),
            tree.total_weight()
        );
    }

    br.set_limit(bit_count);
    let out = decode(tree.as_ref(), &mut br)?;

    if out.len() as u64 != total {
        return Err(CodingError::CountMismatch {
            expected: total,
            found: out.len() as u64,
        });
    }
    Ok(out)
}

/// Decompress every file named in opts, writing each result beside its
/// input with the .hfz extension stripped (or to stdout with -c).
pub fn decompress(opts: &HzOpts) -> Result<(), CodingError> {
    for fname in &opts.files {
        let data = fs::read(fname)?;
        info!("Decompressing {} ({} bytes)", fname, data.len());

        let out = unpack(&data)?;
        info!("Recovered {} bytes", out.len());

        match opts.output {
            Output::Stdout => std::io::stdout().write_all(&out)?,
            Output::File => {
                let outname = match fname.strip_suffix(EXTENSION) {
                    Some(stem) => stem.to_string(),
                    None => {
                        warn!("{} has no {} extension", fname, EXTENSION);
                        format!("{}.out", fname)
                    }
                };
                if !opts.force_overwrite && Path::new(&outname).exists() {
                    return Err(CodingError::Io(std::io::Error::new(
                        std::io::ErrorKind::AlreadyExists,
                        format!("{} exists; pass --force to overwrite it", outname),
                    )));
                }
                fs::write(&outname, &out)?;
                if !opts.keep_input_files {
                    fs::remove_file(fname)?;
                }
            }
        }
    }
    Ok(())
}
