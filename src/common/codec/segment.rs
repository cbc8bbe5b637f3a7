use super::types::Mode;
use crate::common::bit_buffer::BitBuffer;
use crate::common::metadata::Version;

// Segment
//------------------------------------------------------------------------------

/// A run of input encoded in a single mode: mode indicator, character count and
/// the mode specific data bits.
pub trait Segment {
    fn mode(&self) -> Mode;

    fn char_count(&self) -> usize;

    fn data_bit_len(&self) -> usize;

    fn write_data(&self, buf: &mut BitBuffer);

    fn bit_len(&self, ver: Version) -> usize {
        ver.mode_bits() + ver.char_cnt_bits(self.mode()) + self.data_bit_len()
    }

    fn write(&self, ver: Version, buf: &mut BitBuffer) {
        let mode = self.mode();
        buf.put(mode.indicator(), ver.mode_bits());
        buf.put(self.char_count(), ver.char_cnt_bits(mode));
        self.write_data(buf);
    }
}

// Byte segment
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct ByteSegment<'a> {
    data: &'a [u8],
}

impl<'a> ByteSegment<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes())
    }
}

impl Segment for ByteSegment<'_> {
    fn mode(&self) -> Mode {
        Mode::Byte
    }

    fn char_count(&self) -> usize {
        self.data.len()
    }

    fn data_bit_len(&self) -> usize {
        self.data.len() << 3
    }

    fn write_data(&self, buf: &mut BitBuffer) {
        buf.extend(self.data);
    }
}
