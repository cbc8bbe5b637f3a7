use std::fmt::Display;
use std::mem;

use num_traits::PrimInt;

use super::error::{QRError, QRResult};

// Bit buffer
//------------------------------------------------------------------------------

/// Append-only bit sequence packed MSB first into bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    data: Vec<u8>,
    // Bit length
    len: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(bit_capacity: usize) -> Self {
        Self { data: Vec::with_capacity((bit_capacity + 7) >> 3), len: 0 }
    }

    #[cfg(test)]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self { data: bytes.to_vec(), len: bytes.len() << 3 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn get(&self, index: usize) -> QRResult<bool> {
        if index >= self.len {
            return Err(QRError::IndexOutOfRange);
        }
        Ok((self.data[index >> 3] >> (7 - (index & 7))) & 1 == 1)
    }

    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.data[i >> 3] >> (7 - (i & 7))) & 1 == 1)
    }
}

// Push bits
//------------------------------------------------------------------------------

impl BitBuffer {
    /// Appends the low `size` bits of `bits`, most significant first.
    pub fn put<T>(&mut self, bits: T, size: usize)
    where
        T: PrimInt + Display,
    {
        let max_bits = mem::size_of::<T>() * 8;
        debug_assert!(size <= max_bits, "Bit count {size} exceeds width of the value");
        debug_assert!(
            size >= max_bits - bits.leading_zeros() as usize,
            "Bit count shouldn't exceed bit length: Length {size}, Bits {bits}"
        );

        for i in (0..size).rev() {
            self.put_bit((bits >> i) & T::one() == T::one());
        }
    }

    pub fn put_bit(&mut self, bit: bool) {
        let pos = self.len >> 3;
        if pos == self.data.len() {
            self.data.push(0);
        }
        if bit {
            self.data[pos] |= 0b10000000 >> (self.len & 7);
        }
        self.len += 1;
    }

    pub fn extend(&mut self, bytes: &[u8]) {
        if self.len & 7 == 0 {
            self.data.extend_from_slice(bytes);
            self.len += bytes.len() << 3;
        } else {
            bytes.iter().for_each(|&b| self.put(b, 8));
        }
    }
}

#[cfg(test)]
mod bit_buffer_tests {
    use super::BitBuffer;
    use crate::common::error::QRError;

    #[test]
    fn test_len() {
        let mut bb = BitBuffer::new();
        assert_eq!(bb.len(), 0);
        bb.put(0u8, 0);
        assert_eq!(bb.len(), 0);
        bb.put(0b1000u8, 4);
        assert_eq!(bb.len(), 4);
        bb.put(0b1000u8, 8);
        assert_eq!(bb.len(), 12);
        bb.put(0b1000u16, 4);
        assert_eq!(bb.len(), 16);
        bb.put(0b1111111u32, 7);
        assert_eq!(bb.len(), 23);
        assert_eq!(bb.bytes().len(), 3);
    }

    #[test]
    fn test_put_bit() {
        let mut bb = BitBuffer::new();
        bb.put_bit(false);
        assert_eq!(bb.bytes(), [0b00000000]);
        bb.put_bit(true);
        assert_eq!(bb.bytes(), [0b01000000]);
    }

    #[test]
    fn test_put_across_bytes() {
        let mut bb = BitBuffer::new();
        bb.put(0b0100u8, 4);
        bb.put(0x1234u16, 16);
        bb.put(0b1u8, 1);
        assert_eq!(bb.bytes(), [0x41, 0x23, 0x48]);
        assert_eq!(bb.len(), 21);
    }

    #[test]
    fn test_get_out_of_range() {
        let mut bb = BitBuffer::new();
        bb.put(0b101u8, 3);
        assert_eq!(bb.get(2), Ok(true));
        assert_eq!(bb.get(3), Err(QRError::IndexOutOfRange));
        assert_eq!(bb.get(8), Err(QRError::IndexOutOfRange));
    }

    #[test]
    fn test_extend_unaligned() {
        let mut bb = BitBuffer::new();
        bb.put_bit(true);
        bb.extend(&[0xFF, 0x00]);
        assert_eq!(bb.bytes(), [0xFF, 0x80, 0x00]);
        assert_eq!(bb.len(), 17);
    }
}
