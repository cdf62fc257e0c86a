//! Hand-authored heart bitmaps, one per size tier.
//!
//! A mask is a grid of characters where `'0'` is an empty cell and anything else is a
//! pixel to paint. Each tier has its own dimensions; none is a rescale of another.

/// Discrete sprite resolution a particle renders at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeTier {
    Small,
    Medium,
    Large,
}

impl SizeTier {
    pub const ALL: [SizeTier; 3] = [SizeTier::Small, SizeTier::Medium, SizeTier::Large];

    #[inline]
    pub fn mask(self) -> &'static SpriteMask {
        mask_for(self)
    }
}

/// Immutable on/off grid.
#[derive(Debug)]
pub struct SpriteMask {
    rows: &'static [&'static str],
}

impl SpriteMask {
    const fn new(rows: &'static [&'static str]) -> Self {
        Self { rows }
    }

    /// Number of columns. All rows of a mask have the same length.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Out-of-range cells read as off.
    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.as_bytes().get(col))
            .is_some_and(|&c| c != b'0')
    }

    /// `(row, col)` of every painted cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, line)| {
            line.bytes()
                .enumerate()
                .filter(|&(_, c)| c != b'0')
                .map(move |(col, _)| (row, col))
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cells().count()
    }
}

static SMALL_HEART: SpriteMask = SpriteMask::new(&[
    "0^^00^^0",
    "<<^^^^>>",
    "<<^^^^>>",
    "0<<vv>>0",
    "00<vv>00",
    "000vv000",
]);

static MEDIUM_HEART: SpriteMask = SpriteMask::new(&[
    "001100001100",
    "011110011110",
    "111111111111",
    "011111111110",
    "001111111100",
    "000111111100",
    "000011111000",
    "000001110000",
    "000000100000",
]);

static LARGE_HEART: SpriteMask = SpriteMask::new(&[
    "0000110000110000",
    "0011111001111100",
    "1111111111111111",
    "1111111111111111",
    "0111111111111110",
    "0001111111111100",
    "0000011111110000",
    "0000001111100000",
    "0000000111000000",
    "0000000010000000",
]);

pub fn mask_for(tier: SizeTier) -> &'static SpriteMask {
    match tier {
        SizeTier::Small => &SMALL_HEART,
        SizeTier::Medium => &MEDIUM_HEART,
        SizeTier::Large => &LARGE_HEART,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_have_their_own_dimensions() {
        assert_eq!((SMALL_HEART.width(), SMALL_HEART.height()), (8, 6));
        assert_eq!((MEDIUM_HEART.width(), MEDIUM_HEART.height()), (12, 9));
        assert_eq!((LARGE_HEART.width(), LARGE_HEART.height()), (16, 10));
    }

    #[test]
    fn rows_are_rectangular() {
        for tier in SizeTier::ALL {
            let mask = tier.mask();
            for row in mask.rows {
                assert_eq!(row.len(), mask.width(), "ragged row in {tier:?}");
            }
        }
    }

    #[test]
    fn glyph_characters_count_as_painted() {
        // small heart uses arrow glyphs rather than '1'
        assert!(SMALL_HEART.is_set(0, 1));
        assert!(SMALL_HEART.is_set(3, 3));
        assert!(!SMALL_HEART.is_set(0, 0));
        assert!(!SMALL_HEART.is_set(5, 0));
        assert_eq!(SMALL_HEART.cell_count(), 32);
    }

    #[test]
    fn out_of_range_is_off() {
        assert!(!LARGE_HEART.is_set(10, 0));
        assert!(!LARGE_HEART.is_set(0, 16));
    }

    #[test]
    fn cells_agree_with_is_set() {
        for tier in SizeTier::ALL {
            let mask = tier.mask();
            let mut n = 0;
            for row in 0..mask.height() {
                for col in 0..mask.width() {
                    if mask.is_set(row, col) {
                        n += 1;
                    }
                }
            }
            assert_eq!(n, mask.cell_count());
            assert!(mask.cells().all(|(r, c)| mask.is_set(r, c)));
        }
    }
}
