// Mode
//------------------------------------------------------------------------------

/// Data segment modes with their 4 bit indicators. Only `Byte` has an encoder in
/// this crate; the rest are listed so other segment encoders can plug in.
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
    Kanji = 0b1000,
}

impl Mode {
    pub fn indicator(self) -> u8 {
        self as u8
    }
}
