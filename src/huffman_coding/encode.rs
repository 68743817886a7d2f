use log::trace;

use super::code_table::CodeTable;
use super::error::CodingError;
use crate::bitstream::bitwriter::BitWriter;

/// Encode the input through the code table, pushing each symbol's bit path
/// to the writer in stream order. Returns the number of bits emitted.
///
/// A symbol with no table entry means the caller paired the stream with a
/// table built from different data; the whole encode fails and no partial
/// output is considered valid.
pub fn encode(data: &[u8], table: &CodeTable, bw: &mut BitWriter) -> Result<u64, CodingError> {
    let mut emitted = 0_u64;
    for &symbol in data {
        let code = table.get(&symbol).ok_or(CodingError::MissingCode(symbol))?;
        bw.out_bits(code.bits, code.len);
        emitted += code.len as u64;
    }
    trace!("Encoded {} symbols into {} bits", data.len(), emitted);
    Ok(emitted)
}
