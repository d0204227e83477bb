use super::core::MaskIm;
use super::roi::ROI;
use crate::bitmap::Bitmap;
use std::collections::HashSet;

/// In-bounds 4-neighbors of `(x, y)` in a `w x h` frame, always in the order
/// left, up, right, down.
pub fn neighbors(w: usize, h: usize, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
    debug_assert!(x < w && y < h, "({x}, {y}) outside {w}x{h}");

    let left = (x > 0).then(|| (x - 1, y));
    let up = (y > 0).then(|| (x, y - 1));
    let right = (x + 1 < w).then_some((x + 1, y));
    let down = (y + 1 < h).then_some((x, y + 1));
    [left, up, right, down].into_iter().flatten()
}

/// One maximal 4-connected component of open mask pixels.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Region {
    pub start_x: usize,
    pub start_y: usize,
    /// Stride of the mask the region was found in.
    pub s: usize,
    pub roi: ROI,
    /// Row-major pixel indices (`y * s + x`), sorted.
    pub pixel_iz: Vec<usize>,
    /// The flood ran into an open pixel of the avoid set and stopped there.
    pub reached_avoided: bool,
}

impl Region {
    pub fn size(&self) -> usize {
        self.pixel_iz.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixel_iz.is_empty()
    }

    /// Member coordinates as `(x, y)`.
    pub fn coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let s = self.s;
        self.pixel_iz.iter().map(move |&i| (i % s, i / s))
    }
}

/// Flood the open component containing `(start_x, start_y)`.
///
/// Uses an explicit stack so large masks cannot blow the call stack. Every unvisited
/// neighbor of an accepted pixel is pushed; openness is only tested on pop.
/// A closed seed yields an empty region without touching anything else.
pub fn find_region(mask_im: &MaskIm, start_x: usize, start_y: usize) -> Region {
    flood_region(mask_im, start_x, start_y, None)
}

/// Like `find_region`, but open pixels in `avoid` are never entered. Meeting one sets
/// `reached_avoided` on the returned region; its members are left out.
pub fn find_region_avoiding(
    mask_im: &MaskIm,
    start_x: usize,
    start_y: usize,
    avoid: &Bitmap,
) -> Region {
    assert_eq!((avoid.w, avoid.h), (mask_im.w, mask_im.h), "avoid set / mask size mismatch");
    flood_region(mask_im, start_x, start_y, Some(avoid))
}

fn flood_region(
    mask_im: &MaskIm,
    start_x: usize,
    start_y: usize,
    avoid: Option<&Bitmap>,
) -> Region {
    let w = mask_im.w;
    let h = mask_im.h;
    assert!(start_x < w && start_y < h, "start coords out of bounds");

    let mut region = Region {
        start_x,
        start_y,
        s: mask_im.s,
        ..Region::default()
    };

    // Deliberately safe indexing here: if our bounds assumptions are wrong,
    // we want a clear panic rather than UB.
    if mask_im.arr[start_y * mask_im.s + start_x] == 0 {
        return region;
    }

    let mut visited: HashSet<usize> = HashSet::new();
    let mut stack: Vec<(usize, usize)> = vec![(start_x, start_y)];
    let mut roi: Option<ROI> = None;

    while let Some((x, y)) = stack.pop() {
        let im_i = y * mask_im.s + x;
        if !visited.insert(im_i) {
            continue;
        }

        if mask_im.arr[im_i] == 0 {
            continue;
        }

        if avoid.is_some_and(|avoid| avoid.contains(x, y)) {
            region.reached_avoided = true;
            continue;
        }

        region.pixel_iz.push(im_i);
        match roi.as_mut() {
            Some(roi) => roi.include(x, y),
            None => roi = Some(ROI::of_pixel(x, y)),
        }

        for (nx, ny) in neighbors(w, h, x, y) {
            if !visited.contains(&(ny * mask_im.s + nx)) {
                stack.push((nx, ny));
            }
        }
    }

    region.pixel_iz.sort_unstable();
    region.roi = roi.unwrap_or_default();
    region
}

// Tests
// -----------------------------------------------------------------------------
