use crate::error::GridError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Im<T, const N_CH: usize> {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride in elements (w * N_CH)
    pub arr: Vec<T>,
}

// Constructor
// -----------------------------------------------------------------------------
impl<T: Copy + Default, const N_CH: usize> Im<T, N_CH> {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w * N_CH;
        let arr = vec![T::default(); s * h];
        Self { w, h, s, arr }
    }
}

impl<T, const N_CH: usize> Im<T, N_CH> {
    #[inline(always)]
    pub unsafe fn get_unchecked(&self, x: usize, y: usize, ch: usize) -> &T {
        unsafe { self.arr.get_unchecked(y * self.s + x * N_CH + ch) }
    }

    #[inline(always)]
    pub unsafe fn get_unchecked_mut(&mut self, x: usize, y: usize, ch: usize) -> &mut T {
        unsafe { self.arr.get_unchecked_mut(y * self.s + x * N_CH + ch) }
    }

    /// True when the storage actually backs a non-empty `w x h` image.
    pub fn has_valid_shape(&self) -> bool {
        self.w > 0 && self.h > 0 && self.s >= self.w * N_CH && self.arr.len() >= self.s * self.h
    }
}

impl<T: Copy, const N_CH: usize> Im<T, N_CH> {
    /// Bounds-checked read of channel `ch` at `(x, y)`.
    pub fn get(&self, x: usize, y: usize, ch: usize) -> Option<T> {
        if x >= self.w || y >= self.h || ch >= N_CH {
            return None;
        }
        self.arr.get(y * self.s + x * N_CH + ch).copied()
    }

    /// Mirror left-to-right (column reversal).
    pub fn flipped_x(&self) -> Self {
        let mut out = self.clone();
        for y in 0..self.h {
            for x in 0..self.w {
                let src = y * self.s + x * N_CH;
                let dst = y * self.s + (self.w - 1 - x) * N_CH;
                out.arr[dst..dst + N_CH].copy_from_slice(&self.arr[src..src + N_CH]);
            }
        }
        out
    }

    /// Mirror top-to-bottom (row reversal).
    pub fn flipped_y(&self) -> Self {
        let mut out = self.clone();
        for y in 0..self.h {
            let src = y * self.s;
            let dst = (self.h - 1 - y) * self.s;
            out.arr[dst..dst + self.s].copy_from_slice(&self.arr[src..src + self.s]);
        }
        out
    }
}

pub type RGBAIm = Im<u8, 4>;
pub type MaskIm = Im<u8, 1>;
pub type Lum16Im = Im<u16, 1>;
pub type HeightIm = Im<u32, 1>;

/// Value written into a `MaskIm` for open (water-conducting) cells.
pub const MASK_OPEN: u8 = 255;

// Height images
// -----------------------------------------------------------------------------

impl Im<u32, 1> {
    /// Build a height image from nested rows of signed heights.
    /// Jagged rows are rejected rather than padded.
    pub fn from_rows<R: AsRef<[i64]>>(rows: &[R]) -> Result<Self, GridError> {
        let h = rows.len();
        let w = rows.first().map_or(0, |r| r.as_ref().len());
        if h == 0 || w == 0 {
            return Err(GridError::InvalidShape { w, h });
        }

        let mut im = Self::new(w, h);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.is_empty() {
                return Err(GridError::InvalidShape { w: 0, h });
            }
            if row.len() != w {
                return Err(GridError::NonRectangular {
                    row: y,
                    expected: w,
                    found: row.len(),
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(GridError::NegativeHeight { x, y, value });
                }
                im.arr[y * im.s + x] = u32::try_from(value)
                    .map_err(|_| GridError::HeightOverflow { x, y, value })?;
            }
        }
        Ok(im)
    }

    /// Back to nested rows, for comparing against literals.
    #[cfg(test)]
    pub fn to_rows(&self) -> Vec<Vec<u32>> {
        (0..self.h)
            .map(|y| self.arr[y * self.s..y * self.s + self.w].to_vec())
            .collect()
    }

    /// `(min, max)` height, or `None` for an empty image.
    pub fn min_max(&self) -> Option<(u32, u32)> {
        let mut it = (0..self.h)
            .flat_map(move |y| self.arr[y * self.s..y * self.s + self.w].iter());
        let first = *it.next()?;
        Some(it.fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))))
    }

    /// Slice the terrain at water level `z`: a cell is open iff its height is below `z`.
    /// The mask owns fresh storage and never aliases the heights.
    pub fn to_layer_mask(&self, z: u32) -> MaskIm {
        assert!(
            self.has_valid_shape(),
            "height image storage does not cover {}x{}",
            self.w,
            self.h
        );
        let mut mask_im = MaskIm::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                let v = unsafe { *self.get_unchecked(x, y, 0) };
                let m: u8 = if v < z { MASK_OPEN } else { 0 };
                unsafe {
                    *mask_im.get_unchecked_mut(x, y, 0) = m;
                }
            }
        }
        mask_im
    }
}

impl Im<u16, 1> {
    pub fn to_height_im(&self) -> HeightIm {
        let mut out = HeightIm::new(self.w, self.h);
        for y in 0..self.h {
            for x in 0..self.w {
                out.arr[y * out.s + x] = u32::from(self.arr[y * self.s + x]);
            }
        }
        out
    }
}

impl Im<u8, 1> {
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.get(x, y, 0).is_some_and(|m| m != 0)
    }

    pub fn count_open(&self) -> usize {
        (0..self.h)
            .map(|y| self.arr[y * self.s..y * self.s + self.w].iter().filter(|&&m| m != 0).count())
            .sum()
    }
}

pub fn copy_mask_im_to_rgba_im(src: &MaskIm, dst: &mut RGBAIm, r: u8, g: u8, b: u8) {
    assert_eq!(src.w, dst.w, "width mismatch");
    assert_eq!(src.h, dst.h, "height mismatch");

    for y in 0..src.h {
        for x in 0..src.w {
            let m = unsafe { *src.get_unchecked(x, y, 0) };
            if m == 0 {
                continue;
            }
            let rgba = [r, g, b, 255_u8];
            for (ch, &v) in rgba.iter().enumerate() {
                unsafe {
                    *dst.get_unchecked_mut(x, y, ch) = v;
                }
            }
        }
    }
}

/// Gray terrain shading, `max_height` maps to white.
pub fn height_im_to_rgba_im(src: &HeightIm, max_height: u32) -> RGBAIm {
    let mut dst = RGBAIm::new(src.w, src.h);
    let denom = u64::from(max_height.max(1));
    for y in 0..src.h {
        for x in 0..src.w {
            let v = u64::from(src.arr[y * src.s + x].min(max_height.max(1)));
            let g = (v * 255 / denom) as u8;
            for (ch, c) in [g, g, g, 255_u8].into_iter().enumerate() {
                unsafe {
                    *dst.get_unchecked_mut(x, y, ch) = c;
                }
            }
        }
    }
    dst
}
