use log::debug;

use super::segment::Segment;
use crate::common::bit_buffer::BitBuffer;
use crate::common::capacity::find_min_version;
use crate::common::error::{QRError, QRResult};
use crate::common::metadata::{ECLevel, Version};

// Encoder
//------------------------------------------------------------------------------

/// Encodes the segment into the data codewords of the smallest version that fits it.
pub fn encode(seg: &impl Segment, ecl: ECLevel) -> QRResult<(BitBuffer, Version)> {
    let ver = find_min_version(seg.char_count(), ecl)?;
    debug!("Smallest fitting version is {}", *ver);
    Ok((encode_with_version(seg, ver, ecl)?, ver))
}

/// Encodes the segment into exactly `ver.data_codewords(ecl)` codewords.
pub fn encode_with_version(seg: &impl Segment, ver: Version, ecl: ECLevel) -> QRResult<BitBuffer> {
    let bcap = ver.data_bit_capacity(ecl);
    let sz = seg.bit_len(ver);
    if sz > bcap {
        return Err(QRError::DataTooLong);
    }

    let mut bs = BitBuffer::with_capacity(bcap);
    seg.write(ver, &mut bs);
    push_terminator(&mut bs, bcap);
    pad_remaining_capacity(&mut bs, bcap);

    debug_assert_eq!(bs.len(), bcap, "Payload must fill the data capacity exactly");
    Ok(bs)
}

// Writer
//------------------------------------------------------------------------------

// Up to 4 zero bits, cut short when capacity runs out
fn push_terminator(bs: &mut BitBuffer, bcap: usize) {
    let bit_len = TERMINATOR_BIT_LEN.min(bcap - bs.len());
    bs.put(0u8, bit_len);
}

fn pad_remaining_capacity(bs: &mut BitBuffer, bcap: usize) {
    let offset = bs.len() & 7;
    if offset > 0 {
        bs.put(0u8, 8 - offset);
    }

    let remain_bytes = (bcap - bs.len()) >> 3;
    PADDING_CODEWORDS.iter().copied().cycle().take(remain_bytes).for_each(|pc| bs.put(pc, 8));
}


// Global constants
//------------------------------------------------------------------------------

static TERMINATOR_BIT_LEN: usize = 4;

static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];
