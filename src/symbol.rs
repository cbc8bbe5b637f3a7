use crate::common::mask::MaskPattern;
use crate::common::metadata::{Color, ECLevel, Metadata, Version};

/// Read-only view of a square module grid. Renderers depend on this alone.
pub trait Drawable {
    /// Side length in modules.
    fn module_count(&self) -> usize;

    /// Whether the module at `(row, col)` is dark. Both indices must be below
    /// [`Drawable::module_count`].
    fn is_dark(&self, row: usize, col: usize) -> bool;
}

// Symbol
//------------------------------------------------------------------------------

/// A finished QR symbol. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    grid: Vec<Color>,
    width: usize,
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
}

impl Symbol {
    pub(crate) fn new(
        grid: Vec<Color>,
        version: Version,
        ec_level: ECLevel,
        mask: MaskPattern,
    ) -> Self {
        let width = version.width();
        debug_assert_eq!(grid.len(), width * width, "Grid doesn't match version width");
        Self { grid, width, version, ec_level, mask }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mask(&self) -> MaskPattern {
        self.mask
    }

    pub fn metadata(&self) -> Metadata {
        Metadata::new(self.version, self.ec_level, self.mask)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn get(&self, row: usize, col: usize) -> Color {
        assert!(row < self.width && col < self.width, "Module ({row}, {col}) out of bounds");
        self.grid[row * self.width + col]
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&c| c == Color::Dark).count()
    }
}

impl Drawable for Symbol {
    fn module_count(&self) -> usize {
        self.width
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Color::Dark
    }
}
