//! Structuring mask
//!
//! A mask is a `size × size` grid of flags with its origin at the center
//! `(size / 2, size / 2)`. Flags are stored row by row: the row offset `dy`
//! is the outer index and the column offset `dx` the inner one, the same
//! order in which the morphology step walks a neighborhood.
//!
//! Scanners that walk the column offset outermost consume their flag lists
//! transposed; [`StructuringMask::transposed`] converts between the two.

use crate::{MorphError, MorphResult};

const EROSION_BITS: [u8; 9] = [
    1, 0, 0, //
    1, 1, 1, //
    1, 0, 0,
];

const DILATION_BITS: [u8; 25] = [
    0, 1, 1, 1, 0, //
    1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, //
    1, 1, 1, 1, 1, //
    0, 1, 1, 1, 0,
];

/// Square structuring mask with an odd side length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringMask {
    size: u32,
    data: Vec<bool>,
}

impl StructuringMask {
    /// Build a mask from `size * size` flags, each 0 or 1.
    ///
    /// # Errors
    ///
    /// Returns [`MorphError::InvalidMask`] if `size` is zero or even, if
    /// `bits` has the wrong length, or if a flag is neither 0 nor 1.
    pub fn from_bits(size: u32, bits: &[u8]) -> MorphResult<Self> {
        check_size(size)?;
        let expected = size as usize * size as usize;
        if bits.len() != expected {
            return Err(MorphError::InvalidMask(format!(
                "expected {} flags for a {}x{} mask, got {}",
                expected,
                size,
                size,
                bits.len()
            )));
        }
        let data = bits
            .iter()
            .map(|&b| match b {
                0 => Ok(false),
                1 => Ok(true),
                other => Err(MorphError::InvalidMask(format!(
                    "flag must be 0 or 1, got {}",
                    other
                ))),
            })
            .collect::<MorphResult<Vec<_>>>()?;
        Ok(Self { size, data })
    }

    /// Build a mask from a text pattern.
    ///
    /// Each non-blank line is one row. `x` marks an active element, `.` or
    /// `o` an inactive one. Surrounding whitespace on a line is ignored.
    ///
    /// ```
    /// use despeckle_morph::StructuringMask;
    ///
    /// let mask = StructuringMask::from_pattern(
    ///     "x..
    ///      xxx
    ///      x..",
    /// )
    /// .unwrap();
    /// assert_eq!(mask, StructuringMask::pipeline_erosion());
    /// ```
    pub fn from_pattern(pattern: &str) -> MorphResult<Self> {
        let rows: Vec<&str> = pattern
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        let size = rows.len() as u32;
        check_size(size)?;

        let mut data = Vec::with_capacity(rows.len() * rows.len());
        for (r, row) in rows.iter().enumerate() {
            if row.chars().count() != rows.len() {
                return Err(MorphError::InvalidMask(format!(
                    "row {} has {} elements, expected {}",
                    r,
                    row.chars().count(),
                    rows.len()
                )));
            }
            for c in row.chars() {
                match c {
                    'x' => data.push(true),
                    '.' | 'o' => data.push(false),
                    other => {
                        return Err(MorphError::InvalidMask(format!(
                            "unexpected character {:?} in row {}",
                            other, r
                        )));
                    }
                }
            }
        }
        Ok(Self { size, data })
    }

    /// Mask with every element active.
    pub fn square(size: u32) -> MorphResult<Self> {
        check_size(size)?;
        Ok(Self {
            size,
            data: vec![true; size as usize * size as usize],
        })
    }

    /// Plus-shaped mask: the center row and center column are active.
    pub fn cross(size: u32) -> MorphResult<Self> {
        check_size(size)?;
        let half = size / 2;
        let data = (0..size)
            .flat_map(|row| (0..size).map(move |col| row == half || col == half))
            .collect();
        Ok(Self { size, data })
    }

    /// 3x3 mask used by the pipeline's erosion stage: the left column and
    /// the center row are active.
    pub fn pipeline_erosion() -> Self {
        Self::from_static(3, &EROSION_BITS)
    }

    /// 5x5 square with its corners cut, used by the pipeline's dilation stage.
    pub fn pipeline_dilation() -> Self {
        Self::from_static(5, &DILATION_BITS)
    }

    fn from_static(size: u32, bits: &[u8]) -> Self {
        Self {
            size,
            data: bits.iter().map(|&b| b == 1).collect(),
        }
    }

    /// Mask mirrored along its main diagonal, so element (`col`, `row`)
    /// becomes (`row`, `col`).
    pub fn transposed(&self) -> Self {
        let size = self.size;
        let data = (0..size)
            .flat_map(|row| (0..size).map(move |col| (row, col)))
            .map(|(row, col)| self.data[(col * size + row) as usize])
            .collect();
        Self { size, data }
    }

    /// Side length.
    #[inline]
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Distance from the origin to an edge (`size / 2`).
    #[inline]
    pub fn half(&self) -> u32 {
        self.size / 2
    }

    /// Whether the element at grid position (`col`, `row`) is active.
    /// Positions outside the grid are inactive.
    pub fn is_active(&self, col: u32, row: u32) -> bool {
        if col >= self.size || row >= self.size {
            return false;
        }
        self.data[(row * self.size + col) as usize]
    }

    /// Number of active elements.
    pub fn active_count(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Offsets `(dx, dy)` of the active elements relative to the origin, in
    /// row-major order.
    pub fn active_offsets(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        let size = self.size as usize;
        let half = self.half() as i64;
        self.data
            .iter()
            .enumerate()
            .filter(|&(_, &on)| on)
            .map(move |(i, _)| ((i % size) as i64 - half, (i / size) as i64 - half))
    }
}

fn check_size(size: u32) -> MorphResult<()> {
    if size == 0 || size % 2 == 0 {
        return Err(MorphError::InvalidMask(format!(
            "mask size must be odd and non-zero, got {}",
            size
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bits() {
        let mask = StructuringMask::from_bits(3, &[0, 1, 0, 1, 1, 1, 0, 1, 0]).unwrap();
        assert_eq!(mask, StructuringMask::cross(3).unwrap());
        assert_eq!(mask.active_count(), 5);
    }

    #[test]
    fn test_from_bits_rejects() {
        assert!(StructuringMask::from_bits(3, &[1; 8]).is_err());
        assert!(StructuringMask::from_bits(2, &[1; 4]).is_err());
        assert!(StructuringMask::from_bits(0, &[]).is_err());
        assert!(StructuringMask::from_bits(1, &[2]).is_err());
    }

    #[test]
    fn test_from_pattern() {
        let mask = StructuringMask::from_pattern(
            ".xxx.
             xxxxx
             xxxxx
             xxxxx
             oxxxo",
        )
        .unwrap();
        assert_eq!(mask, StructuringMask::pipeline_dilation());
        assert!(!mask.is_active(0, 0));
        assert!(mask.is_active(1, 0));
        assert!(!mask.is_active(4, 4));
        assert!(!mask.is_active(5, 0));
    }

    #[test]
    fn test_from_pattern_rejects() {
        assert!(StructuringMask::from_pattern("xx\nxx").is_err());
        assert!(StructuringMask::from_pattern("xxx\nxx\nxxx").is_err());
        assert!(StructuringMask::from_pattern("xxx\nx#x\nxxx").is_err());
        assert!(StructuringMask::from_pattern("").is_err());
    }

    #[test]
    fn test_erosion_preset_layout() {
        // left column fully active, arm to the right of the origin
        let mask = StructuringMask::pipeline_erosion();
        let offsets: Vec<_> = mask.active_offsets().collect();
        assert_eq!(offsets, vec![(-1, -1), (-1, 0), (0, 0), (1, 0), (-1, 1)]);
    }

    #[test]
    fn test_transposed() {
        // the same flags read column by column
        let t = StructuringMask::from_bits(3, &[1, 1, 1, 0, 1, 0, 0, 1, 0]).unwrap();
        assert_eq!(t.transposed(), StructuringMask::pipeline_erosion());
        assert_eq!(t.transposed().transposed(), t);

        let dilation = StructuringMask::pipeline_dilation();
        assert_eq!(dilation.transposed(), dilation);
    }

    #[test]
    fn test_square_and_half() {
        let mask = StructuringMask::square(5).unwrap();
        assert_eq!(mask.size(), 5);
        assert_eq!(mask.half(), 2);
        assert_eq!(mask.active_count(), 25);
        assert!(StructuringMask::square(4).is_err());
    }
}
