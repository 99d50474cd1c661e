use super::metadata::TIMING_OFFSET;

// Iterator for placing data in encoding region of QR
//------------------------------------------------------------------------------

/// Walks the grid in two-column zig-zag order starting at the bottom-right
/// corner. The vertical timing column is skipped. Within a row the right
/// column of the pair is yielded before the left one.
#[derive(Debug, Clone)]
pub struct EncRegionIter {
    r: i16,
    // Right column of the current pair
    c: i16,
    // 0 for the right column, 1 for the left column
    dc: i16,
    upward: bool,
    width: i16,
}

impl EncRegionIter {
    pub const fn new(width: usize) -> Self {
        let w = width as i16;
        Self { r: w - 1, c: w - 1, dc: 0, upward: true, width: w }
    }

    fn advance(&mut self) {
        if self.dc == 0 {
            self.dc = 1;
            return;
        }
        self.dc = 0;
        match self.upward {
            true if self.r > 0 => self.r -= 1,
            false if self.r < self.width - 1 => self.r += 1,
            _ => {
                self.c -= 2;
                if self.c == TIMING_OFFSET {
                    self.c -= 1;
                }
                self.upward = !self.upward;
            }
        }
    }
}

impl Iterator for EncRegionIter {
    type Item = (i16, i16);
    fn next(&mut self) -> Option<Self::Item> {
        if self.c < 0 {
            return None;
        }
        let res = (self.r, self.c - self.dc);
        self.advance();
        Some(res)
    }
}

#[cfg(test)]
mod iter_tests {
    use std::collections::HashSet;

    use super::EncRegionIter;
    use crate::common::metadata::{TIMING_OFFSET, WIDTH};

    #[test]
    fn test_enc_region_iter_start() {
        let coords = EncRegionIter::new(WIDTH).take(6).collect::<Vec<_>>();
        assert_eq!(coords, [(32, 32), (32, 31), (31, 32), (31, 31), (30, 32), (30, 31)]);
    }

    #[test]
    fn test_enc_region_iter_turns_at_edges() {
        let coords = EncRegionIter::new(WIDTH).skip(64).take(4).collect::<Vec<_>>();
        // Top of the first pair, then down the second pair
        assert_eq!(coords, [(0, 32), (0, 31), (0, 30), (0, 29)]);
    }

    #[test]
    fn test_enc_region_iter_skips_timing_column() {
        let coords = EncRegionIter::new(WIDTH).collect::<Vec<_>>();
        let w = WIDTH as i16;
        assert_eq!(coords.len(), WIDTH * (WIDTH - 1));
        assert!(coords.iter().all(|&(_, c)| c != TIMING_OFFSET));

        let unique = coords.iter().collect::<HashSet<_>>();
        assert_eq!(unique.len(), coords.len());
        assert!(coords.iter().all(|&(r, c)| (0..w).contains(&r) && (0..w).contains(&c)));

        // Pair (5, 4) follows (8, 7) and the walk ends going down pair (1, 0)
        let after_timing = coords.iter().position(|&(_, c)| c == 5).unwrap();
        assert_eq!(coords[after_timing - 1], (0, 7));
        assert_eq!(coords[after_timing], (0, 5));
        assert_eq!(coords[coords.len() - 2..], [(32, 1), (32, 0)]);
    }

    #[test]
    fn test_enc_region_iter_small_grid() {
        let coords = EncRegionIter::new(4).collect::<Vec<_>>();
        assert_eq!(
            coords,
            [
                (3, 3), (3, 2), (2, 3), (2, 2), (1, 3), (1, 2), (0, 3), (0, 2),
                (0, 1), (0, 0), (1, 1), (1, 0), (2, 1), (2, 0), (3, 1), (3, 0),
            ]
        );
    }
}
