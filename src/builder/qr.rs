use std::ops::Deref;

use crate::common::bit_buffer::BitBuffer;
use crate::common::iter::EncRegionIter;
use crate::common::mask::MaskPattern;
use crate::common::metadata::{
    generate_format_info_qr, Color, ECLevel, Version, FORMAT_INFO_BIT_LEN,
    FORMAT_INFO_COORDS_QR_MAIN, FORMAT_INFO_COORDS_QR_SIDE, VERSION_INFO_BIT_LEN,
    VERSION_INFO_COORDS_BL, VERSION_INFO_COORDS_TR,
};
use crate::symbol::Symbol;

/// A module of the symbol under construction. Anything other than `Data` is
/// reserved and never touched by codeword placement or masking.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Module {
    Empty,
    Func(Color),
    Version(Color),
    Format(Color),
    Data(Color),
}

impl Deref for Module {
    type Target = Color;
    fn deref(&self) -> &Self::Target {
        match self {
            Module::Empty => &Color::Light,
            Module::Func(c) => c,
            Module::Version(c) => c,
            Module::Format(c) => c,
            Module::Data(c) => c,
        }
    }
}

#[derive(Debug, Clone)]
pub struct QR {
    grid: Vec<Module>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
    mask: Option<MaskPattern>,
}

// QR type for builder
//------------------------------------------------------------------------------

impl QR {
    pub fn new(ver: Version, ecl: ECLevel) -> Self {
        let w = ver.width();
        Self { grid: vec![Module::Empty; w * w], w, ver, ecl, mask: None }
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(**m, Color::Dark)).count()
    }

    pub fn count_empty_modules(&self) -> usize {
        self.grid.iter().filter(|&m| matches!(m, Module::Empty)).count()
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let w = self.w as i16;
        let mut res = String::with_capacity((w * (w + 1)) as usize);
        res.push('\n');
        for i in 0..w {
            for j in 0..w {
                let c = match self.get(i, j) {
                    Module::Empty => '.',
                    Module::Func(Color::Dark) => 'f',
                    Module::Func(Color::Light) => 'F',
                    Module::Version(Color::Dark) => 'v',
                    Module::Version(Color::Light) => 'V',
                    Module::Format(Color::Dark) => 'm',
                    Module::Format(Color::Light) => 'M',
                    Module::Data(Color::Dark) => 'd',
                    Module::Data(Color::Light) => 'D',
                };
                res.push(c);
            }
            res.push('\n');
        }
        res
    }

    fn coord_to_index(&self, r: i16, c: i16) -> usize {
        let w = self.w as i16;
        debug_assert!(-w <= r && r < w, "Row {r} out of range for width {w}");
        debug_assert!(-w <= c && c < w, "Column {c} out of range for width {w}");

        let r = if r < 0 { r + w } else { r };
        let c = if c < 0 { c + w } else { c };
        (r as usize) * self.w + c as usize
    }

    pub fn get(&self, r: i16, c: i16) -> Module {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn get_mut(&mut self, r: i16, c: i16) -> &mut Module {
        let index = self.coord_to_index(r, c);
        &mut self.grid[index]
    }

    pub fn set(&mut self, r: i16, c: i16, module: Module) {
        *self.get_mut(r, c) = module;
    }

    /// Freezes the grid into the immutable output symbol, dropping the
    /// reservation bookkeeping.
    pub fn into_symbol(self, mask: MaskPattern) -> Symbol {
        debug_assert!(self.count_empty_modules() == 0, "Empty module left in finished symbol");
        debug_assert_eq!(self.mask, Some(mask), "Symbol frozen with a different mask");
        let modules = self.grid.iter().map(|m| **m).collect();
        Symbol::new(modules, self.ver, self.ecl, mask)
    }
}


// Finder pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(3, 3);
        self.draw_finder_pattern_at(3, -4);
        self.draw_finder_pattern_at(-4, 3);
    }

    // Draws the 7x7 finder centred at (r, c) together with its light separator on
    // the sides facing the symbol interior
    fn draw_finder_pattern_at(&mut self, r: i16, c: i16) {
        let (dr_top, dr_bottom) = if r > 0 { (-3i16, 4i16) } else { (-4, 3) };
        let (dc_left, dc_right) = if c > 0 { (-3i16, 4i16) } else { (-4, 3) };
        for i in dr_top..=dr_bottom {
            for j in dc_left..=dc_right {
                let module = match i.abs().max(j.abs()) {
                    4 | 2 => Module::Func(Color::Light),
                    _ => Module::Func(Color::Dark),
                };
                self.set(r + i, c + j, module);
            }
        }
    }
}

// Timing pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_timing_pattern(&mut self) {
        let w = self.w as i16;
        let (off, last) = (6, w - 9);
        self.draw_line(off, 8, off, last);
        self.draw_line(8, off, last, off);
    }

    fn draw_line(&mut self, r1: i16, c1: i16, r2: i16, c2: i16) {
        debug_assert!(r1 == r2 || c1 == c2, "Line is neither vertical nor horizontal");

        let color = |k: i16| Module::Func(Color::from(k & 1 == 0));
        if r1 == r2 {
            for j in c1..=c2 {
                self.set(r1, j, color(j));
            }
        } else {
            for i in r1..=r2 {
                self.set(i, c1, color(i));
            }
        }
    }
}

// Alignment pattern
//------------------------------------------------------------------------------

impl QR {
    fn draw_alignment_patterns(&mut self) {
        let poses = self.ver.alignment_pattern();
        for &r in poses {
            for &c in poses {
                self.draw_alignment_pattern_at(r, c)
            }
        }
    }

    fn draw_alignment_pattern_at(&mut self, r: i16, c: i16) {
        let w = self.w as i16;
        // The three corners already hold finder patterns
        if (r == 6 && (c == 6 || c - w == -7)) || (r - w == -7 && c == 6) {
            return;
        }
        for i in -2..=2i16 {
            for j in -2..=2i16 {
                let module = match i.abs().max(j.abs()) {
                    1 => Module::Func(Color::Light),
                    _ => Module::Func(Color::Dark),
                };
                self.set(r + i, c + j, module);
            }
        }
    }
}

// All function patterns
//------------------------------------------------------------------------------

impl QR {
    /// Draws finder, separator, timing and alignment patterns and reserves the
    /// format and version information areas.
    pub fn draw_all_function_patterns(&mut self) {
        self.draw_finder_patterns();
        self.draw_timing_pattern();
        self.draw_alignment_patterns();
        self.reserve_format_area();
        self.draw_version_info();
    }
}


// Format & version info
//------------------------------------------------------------------------------

impl QR {
    fn reserve_format_area(&mut self) {
        self.draw_format_info((1 << FORMAT_INFO_BIT_LEN) - 1);
    }

    fn draw_format_info(&mut self, format_info: u32) {
        let off = Module::Format(Color::Light);
        let on = Module::Format(Color::Dark);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_QR_MAIN);
        self.draw_number(format_info, FORMAT_INFO_BIT_LEN, off, on, &FORMAT_INFO_COORDS_QR_SIDE);
        // Dark module
        self.set(-8, 8, on);
    }

    fn draw_version_info(&mut self) {
        if *self.ver < 7 {
            return;
        }
        let ver_info = self.ver.info();
        let off = Module::Version(Color::Light);
        let on = Module::Version(Color::Dark);
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, off, on, &VERSION_INFO_COORDS_BL);
        self.draw_number(ver_info, VERSION_INFO_BIT_LEN, off, on, &VERSION_INFO_COORDS_TR);
    }

    fn draw_number(
        &mut self,
        number: u32,
        bit_len: usize,
        off_clr: Module,
        on_clr: Module,
        coords: &[(i16, i16)],
    ) {
        let mut mask = 1 << (bit_len - 1);
        for &(r, c) in coords {
            self.set(r, c, if number & mask == 0 { off_clr } else { on_clr });
            mask >>= 1;
        }
    }
}

#[cfg(test)]
mod qr_information_tests {
    use crate::builder::{Module, QR};
    use crate::common::mask::MaskPattern;
    use crate::common::metadata::{generate_format_info_qr, Color, ECLevel, Version};

    #[test]
    fn test_version_info_skipped_below_7() {
        let mut qr = QR::new(Version::new(6).unwrap(), ECLevel::L);
        qr.draw_version_info();
        assert_eq!(qr.count_empty_modules(), 41 * 41);
    }

    #[test]
    fn test_format_info_copies_agree() {
        let mut qr = QR::new(Version::new(2).unwrap(), ECLevel::M);
        let info = generate_format_info_qr(ECLevel::M, MaskPattern::new(5).unwrap());
        qr.draw_format_info(info);

        let read = |coords: &[(i16, i16)]| {
            coords.iter().fold(0u32, |n, &(r, c)| (n << 1) | (*qr.get(r, c) == Color::Dark) as u32)
        };
        assert_eq!(read(&super::FORMAT_INFO_COORDS_QR_MAIN), info);
        assert_eq!(read(&super::FORMAT_INFO_COORDS_QR_SIDE), info);
        assert_eq!(qr.get(-8, 8), Module::Format(Color::Dark));
    }
}

// Encoding region
//------------------------------------------------------------------------------

impl QR {
    /// Places the codeword bits into the unreserved modules in zigzag order. The
    /// modules left over after the last codeword are remainder bits and stay light.
    pub fn draw_encoding_region(&mut self, payload: &BitBuffer) {
        let mut coords = EncRegionIter::new(self.ver);
        for bit in payload.iter() {
            let module = Module::Data(Color::from(bit));
            for (r, c) in coords.by_ref() {
                if matches!(self.get(r, c), Module::Empty) {
                    self.set(r, c, module);
                    break;
                }
            }
        }
        self.fill_remainder_bits(coords);

        debug_assert!(self.count_empty_modules() == 0, "Empty module found after placement");
    }

    fn fill_remainder_bits(&mut self, coords: impl Iterator<Item = (i16, i16)>) {
        let mut filled = 0;
        for (r, c) in coords {
            if matches!(self.get(r, c), Module::Empty) {
                self.set(r, c, Module::Data(Color::Light));
                filled += 1;
            }
        }
        debug_assert_eq!(filled, self.ver.remainder_bits(), "Unexpected remainder bit count");
    }

    /// XORs the mask into every data module and writes the matching format information.
    pub fn apply_mask(&mut self, pattern: MaskPattern) {
        self.mask = Some(pattern);
        let mask_fn = pattern.mask_function();
        let w = self.w as i16;
        for r in 0..w {
            for c in 0..w {
                if let Module::Data(clr) = self.get(r, c) {
                    if mask_fn(r, c) {
                        self.set(r, c, Module::Data(!clr))
                    }
                }
            }
        }
        let format_info = generate_format_info_qr(self.ecl, pattern);
        self.draw_format_info(format_info);
    }
}
