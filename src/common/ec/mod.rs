pub mod galois;
pub mod poly;

pub use poly::Polynomial;

use super::error::QRResult;
use super::metadata::{ECLevel, Version};

// Error correction codewords
//------------------------------------------------------------------------------

/// Splits the data codewords into the block structure of the version and level and
/// computes the error correction codewords of every block.
pub fn ecc(data: &[u8], ver: Version, ecl: ECLevel) -> QRResult<(Vec<&[u8]>, Vec<Vec<u8>>)> {
    let data_blocks = blockify(data, ver, ecl);

    let generator = Polynomial::generator(ver.ecc_per_block(ecl));
    let ecc_blocks =
        data_blocks.iter().map(|b| ecc_per_block(b, &generator)).collect::<QRResult<Vec<_>>>()?;

    Ok((data_blocks, ecc_blocks))
}

pub fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<&[u8]> {
    let (block1_size, block1_count, block2_size, block2_count) =
        ver.data_codewords_per_block(ecl);

    let total_blocks = block1_count + block2_count;
    let total_block1_size = block1_size * block1_count;
    let total_size = total_block1_size + block2_size * block2_count;

    debug_assert!(
        total_size == data.len(),
        "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
        data.len(),
        total_size
    );

    let mut data_blocks = Vec::with_capacity(total_blocks);
    data_blocks.extend(data[..total_block1_size].chunks(block1_size));
    if block2_size > 0 {
        data_blocks.extend(data[total_block1_size..].chunks(block2_size));
    }
    data_blocks
}

// Remainder of (block * x^n) divided by the generator of degree n, right aligned
// into n codewords
fn ecc_per_block(block: &[u8], generator: &Polynomial) -> QRResult<Vec<u8>> {
    let ecc_count = generator.degree();
    let rem = Polynomial::new(block, ecc_count).modulo(generator)?;

    let mut res = vec![0; ecc_count];
    let offset = ecc_count - rem.len();
    res[offset..].copy_from_slice(&rem);
    Ok(res)
}
