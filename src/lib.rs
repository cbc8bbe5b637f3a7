//! # qrcraft
//!
//! A Rust library for encoding text into QR Code (Model 2) symbols with Reed-Solomon
//! error correction.
//!
//! ## Features
//!
//! - **Byte mode encoding**: Any UTF-8 text, measured by its exact byte length
//! - **Automatic version selection**: Smallest of the 40 versions that fits the data
//! - **Reed-Solomon Error Correction**: Configurable levels (L, M, Q, H)
//! - **Mask selection**: All 8 mask patterns are scored and the lowest penalty wins
//! - **Renderer agnostic**: Output is consumed through the [`Drawable`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use qrcraft::{encode, Drawable, EncodeOptions};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Defaults: EC level H, smallest fitting version, best mask
//! let symbol = encode("QRCode", &EncodeOptions::default())?;
//!
//! assert_eq!(symbol.module_count(), 21);
//! for r in 0..symbol.module_count() {
//!     let line: String = (0..symbol.module_count())
//!         .map(|c| if symbol.is_dark(r, c) { '#' } else { ' ' })
//!         .collect();
//!     println!("{line}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrcraft::{ECLevel, MaskPattern, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let symbol = QRBuilder::new("Hello, World!")
//!     .version(Version::new(2)?)     // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::M)          // if not provided, defaults to ECLevel::H
//!     .mask(MaskPattern::new(3)?)    // if not provided, finds best mask based on penalty score
//!     .build()?;
//!
//! assert_eq!(symbol.metadata().to_string(), "{ Version: 2, Ec level: M, Mask: 3 }");
//! # Ok(())
//! # }
//! ```
//!
//! ## QR Code Components
//!
//! ### Versions
//! Versions 1-40, with sizes from 21x21 to 177x177 modules.
//!
//! ### Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod symbol;

pub use builder::{EncodeOptions, QRBuilder};
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{Color, ECLevel, Metadata, Version};
pub use symbol::{Drawable, Symbol};

/// Encodes `text` into a symbol configured by `options`.
pub fn encode(text: &str, options: &EncodeOptions) -> QRResult<Symbol> {
    QRBuilder::with_options(text, options).build()
}
