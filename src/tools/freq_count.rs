use rayon::prelude::*;

/// Returns a frequency count of the input data: 256 counts indexed by byte
/// value. Iterating the table by index is the deterministic symbol order
/// the tree builder relies on. Uses parallelism when the data set is over
/// 64k; either path produces identical counts, and empty input produces an
/// all-zero table.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    // 16k is pretty much the sweet spot for chunk size.
    if data.len() <= 64_000 {
        return tally(data);
    }
    data.par_chunks(16_000).map(tally).reduce(
        || vec![0_u32; 256],
        |mut acc, counts| {
            acc.iter_mut().zip(&counts).for_each(|(a, b)| *a += b);
            acc
        },
    )
}

fn tally(chunk: &[u8]) -> Vec<u32> {
    let mut counts = vec![0_u32; 256];
    chunk.iter().for_each(|&el| counts[el as usize] += 1);
    counts
}
