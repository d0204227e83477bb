/// A set of pixel coordinates over a fixed `w x h` frame, stored as one flag per pixel.
/// Keys are the packed row-major index `y * s + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
    pub w: usize,
    pub h: usize,
    pub s: usize, // stride: elements per row
    arr: Vec<bool>,
    len: usize,
}

impl Bitmap {
    pub fn new(w: usize, h: usize) -> Self {
        let s = w;
        let arr = vec![false; s * h];
        Self { w, h, s, arr, len: 0 }
    }

    #[inline(always)]
    pub fn index_of(&self, x: usize, y: usize) -> usize {
        debug_assert!(x < self.w && y < self.h, "({x}, {y}) outside {}x{}", self.w, self.h);
        y * self.s + x
    }

    #[inline]
    pub fn contains(&self, x: usize, y: usize) -> bool {
        self.contains_index(self.index_of(x, y))
    }

    #[inline]
    pub fn contains_index(&self, i: usize) -> bool {
        self.arr.get(i).copied().unwrap_or(false)
    }

    /// Returns true if the pixel was not already present.
    #[inline]
    pub fn insert(&mut self, x: usize, y: usize) -> bool {
        let i = self.index_of(x, y);
        self.insert_index(i)
    }

    #[inline]
    pub fn insert_index(&mut self, i: usize) -> bool {
        let slot = &mut self.arr[i];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in row-major order as `(x, y)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.arr
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(|(i, _)| (i % self.s, i / self.s))
    }

    /// True if every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Bitmap) -> bool {
        self.arr
            .iter()
            .zip(other.arr.iter())
            .all(|(&a, &b)| !a || b)
            && self.arr.len() <= other.arr.len()
    }
}
