use super::error::CodingError;
use super::tree::{CodeTree, NodeData};
use crate::bitstream::bitreader::BitReader;

/// Decode a bit stream by descending the code tree: 0 steps left, 1 steps
/// right; reaching a leaf emits its symbol and resets the cursor to the
/// root. Runs until the bit source is exhausted, and needs nothing beyond
/// the tree and the bits - not the code table, not the original length.
///
/// `tree` is None when the stream was built from empty input; a bit
/// arriving in that state has no possible decoding. A source that gives
/// out mid-path, or before its declared bit budget is satisfied, is
/// reported as truncated rather than silently decoded short.
pub fn decode<R: std::io::Read>(
    tree: Option<&CodeTree>,
    br: &mut BitReader<R>,
) -> Result<Vec<u8>, CodingError> {
    let tree = match tree {
        Some(tree) => tree,
        None => {
            if br.bit().is_some() || br.pending() > 0 {
                return Err(CodingError::EmptyTree);
            }
            return Ok(Vec::new());
        }
    };

    let mut out: Vec<u8> = Vec::with_capacity(tree.total_weight() as usize);

    // A lone leaf at the root has nowhere to descend: every bit of the
    // stream is one emission of the only symbol there is.
    if let NodeData::Leaf(symbol) = tree.root.node_data {
        while br.bit().is_some() {
            out.push(symbol);
        }
        if br.pending() > 0 {
            return Err(CodingError::TruncatedStream);
        }
        return Ok(out);
    }

    let mut cursor = &tree.root;
    while let Some(bit) = br.bit() {
        if let NodeData::Kids(left, right) = &cursor.node_data {
            cursor = if bit == 0 { left } else { right };
        }
        if let NodeData::Leaf(symbol) = cursor.node_data {
            out.push(symbol);
            cursor = &tree.root;
        }
    }

    // The stream must end at the root with the budget fully used.
    if !std::ptr::eq(cursor, &tree.root) || br.pending() > 0 {
        return Err(CodingError::TruncatedStream);
    }
    Ok(out)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::bitstream::bitwriter::BitWriter;
    use crate::huffman_coding::code_table::code_table;
    use crate::huffman_coding::encode::encode;
    use crate::huffman_coding::tree_build::build_tree;
    use crate::tools::freq_count::freqs;

    /// Run the whole encode side, returning the tree, the packed payload
    /// bytes and the exact payload bit count.
    fn encode_pipeline(data: &[u8]) -> (Option<CodeTree>, Vec<u8>, u64) {
        let counts = freqs(data);
        let tree = build_tree(&counts);
        let table = tree.as_ref().map(code_table).unwrap_or_default();
        let mut bw = BitWriter::new(data.len());
        let bits = encode(data, &table, &mut bw).unwrap();
        bw.flush();
        (tree, bw.output, bits)
    }

    fn reader(bytes: &[u8], bits: u64) -> BitReader<&[u8]> {
        let mut br = BitReader::new(bytes);
        br.set_limit(bits);
        br
    }

    #[test]
    fn round_trip_test() {
        let data = b"abracadabra";
        let (tree, packed, bits) = encode_pipeline(data);
        let mut br = reader(&packed, bits);
        assert_eq!(decode(tree.as_ref(), &mut br).unwrap(), data.to_vec());
    }

    #[test]
    fn round_trip_all_byte_values_test() {
        let data: Vec<u8> = (0..=255).chain((0..=255).step_by(3)).collect();
        let (tree, packed, bits) = encode_pipeline(&data);
        let mut br = reader(&packed, bits);
        assert_eq!(decode(tree.as_ref(), &mut br).unwrap(), data);
    }

    #[test]
    fn empty_stream_empty_tree_test() {
        let (tree, packed, bits) = encode_pipeline(b"");
        assert!(tree.is_none());
        assert_eq!(bits, 0);
        let mut br = reader(&packed, bits);
        assert_eq!(decode(tree.as_ref(), &mut br).unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn bits_without_tree_fail_test() {
        let mut br = BitReader::new([0xff_u8].as_slice());
        let result = decode(None, &mut br);
        assert!(matches!(result, Err(CodingError::EmptyTree)));
    }

    #[test]
    fn single_symbol_round_trip_test() {
        let (tree, packed, bits) = encode_pipeline(b"aaaa");
        assert_eq!(bits, 4);
        let mut br = reader(&packed, bits);
        assert_eq!(decode(tree.as_ref(), &mut br).unwrap(), b"aaaa".to_vec());
    }

    #[test]
    fn truncation_mid_path_fails_test() {
        let data = b"abracadabra";
        let (tree, packed, bits) = encode_pipeline(data);
        // One byte of payload ends partway through a code path.
        let mut br = reader(&packed[..1], bits);
        let result = decode(tree.as_ref(), &mut br);
        assert!(matches!(result, Err(CodingError::TruncatedStream)));
    }

    #[test]
    fn truncation_at_symbol_boundary_fails_test() {
        let data = b"abracadabra";
        let (tree, packed, bits) = encode_pipeline(data);
        // Drop the last payload byte. Even if the surviving bits happen to
        // end on a symbol boundary, the unmet budget gives it away.
        let mut br = reader(&packed[..packed.len() - 1], bits);
        let result = decode(tree.as_ref(), &mut br);
        assert!(matches!(result, Err(CodingError::TruncatedStream)));
    }

    #[test]
    fn unlimited_reader_consumes_padding_test() {
        // Without a budget the decoder happily decodes pad bits too; the
        // container layer always sets the budget. This pins the behavior
        // that the budget is what draws the line, not the decoder.
        let data = b"aaaa";
        let (tree, packed, _) = encode_pipeline(data);
        let mut br = BitReader::new(packed.as_slice());
        let out = decode(tree.as_ref(), &mut br).unwrap();
        assert_eq!(out.len(), 8);
    }
}
