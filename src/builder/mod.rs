mod qr;

pub(crate) use qr::QR;

#[cfg(test)]
pub(crate) use qr::Module;

use std::ops::Deref;

use log::debug;

use crate::common::{
    bit_buffer::BitBuffer,
    codec::{encode, encode_with_version, ByteSegment},
    ec::ecc,
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{ECLevel, Version},
};
use crate::symbol::Symbol;

// Encode options
//------------------------------------------------------------------------------

/// Caller facing configuration of a single encode.
///
/// `ec_level` defaults to [`ECLevel::H`]. When `version` is `None` the smallest
/// version that fits the text is chosen, and when `mask` is `None` the mask with
/// the lowest penalty is chosen.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct EncodeOptions {
    pub ec_level: ECLevel,
    pub version: Option<Version>,
    pub mask: Option<MaskPattern>,
}

// Builder
//------------------------------------------------------------------------------

pub struct QRBuilder<'a> {
    data: &'a str,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a str) -> Self {
        Self { data, version: None, ec_level: ECLevel::default(), mask: None }
    }

    pub fn with_options(data: &'a str, options: &EncodeOptions) -> Self {
        Self { data, version: options.version, ec_level: options.ec_level, mask: options.mask }
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn metadata(&self) -> String {
        let version = self.version.map_or("None".to_string(), |v| (*v).to_string());
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        format!("{{ Version: {version}, Ec level: {:?}, Mask: {mask} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<Symbol> {
        debug!("Generating QR {}...", self.metadata());
        let mut qr = self.build_unmasked()?;

        let mask = match self.mask {
            Some(m) => {
                debug!("Applying mask {}...", *m);
                qr.apply_mask(m);
                m
            }
            None => {
                debug!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        let total_modules = qr.width() * qr.width();
        let dark_modules = qr.count_dark_modules();
        debug!(
            "QR generated: Version {}, Mask {}, Dark modules {dark_modules}/{total_modules}",
            *qr.version(),
            *mask,
        );

        Ok(qr.into_symbol(mask))
    }

    // Everything up to and including codeword placement
    pub(crate) fn build_unmasked(&self) -> QRResult<QR> {
        let seg = ByteSegment::from_text(self.data);

        debug!("Encoding {} bytes...", self.data.len());
        let (encoded_data, version) = match self.version {
            Some(v) => (encode_with_version(&seg, v, self.ec_level)?, v),
            None => {
                debug!("Finding best version...");
                encode(&seg, self.ec_level)?
            }
        };

        debug!("Constructing payload with ecc & interleaving...");
        let (data_blocks, ecc_blocks) = ecc(encoded_data.bytes(), version, self.ec_level)?;
        let mut payload = BitBuffer::with_capacity(version.total_codewords() << 3);
        payload.extend(&interleave(&data_blocks));
        payload.extend(&interleave(&ecc_blocks));
        debug_assert_eq!(payload.len(), version.total_codewords() << 3);

        debug!("Drawing functional patterns...");
        let mut qr = QR::new(version, self.ec_level);
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_encoding_region(&payload);

        Ok(qr)
    }
}

/// Round-robin over the blocks, skipping blocks that have run out.
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
    let mut res = Vec::with_capacity(total_size);
    for i in 0..max_block_size {
        for b in blocks {
            if i < b.len() {
                res.push(b[i]);
            }
        }
    }
    res
}
