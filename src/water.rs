use crate::bitmap::Bitmap;
use crate::error::GridError;
use crate::im::{HeightIm, MASK_OPEN, MaskIm, Region, find_region_avoiding};
use log::{debug, info, trace};

/// Height between consecutive water levels. Each pooled cell contributes this much volume
/// per level it is under water.
pub const Z_STEP: u32 = 1;

/// What one water level contributed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerReport {
    pub z: u32,
    /// Cells of this layer that hold water.
    pub area: usize,
    pub valid_regions: usize,
    pub leaked_regions: usize,
    /// Cells added to the leak cache by this layer.
    pub newly_invalid: usize,
    /// Open pixels are the cells holding water at this level.
    pub water_im: MaskIm,
}

/// Receives every processed level. Purely for inspection; it cannot influence the result.
pub trait LayerObserver {
    fn on_layer(&mut self, layer_im: &MaskIm, report: &LayerReport);
}

impl<F: FnMut(&MaskIm, &LayerReport)> LayerObserver for F {
    fn on_layer(&mut self, layer_im: &MaskIm, report: &LayerReport) {
        self(layer_im, report)
    }
}

/// A region holds water only if none of its cells sits on the outer ring of the frame;
/// anything touching the edge drains off the map. So does a region that ran into a cell
/// already known to leak. An empty region is never valid.
pub fn is_region_valid(w: usize, h: usize, region: &Region) -> bool {
    debug_assert!(
        region.is_empty()
            || region.coords().all(|(x, y)| x > 0 && y > 0 && x + 1 < w && y + 1 < h)
                == !region.roi.touches_border(w, h)
    );
    !region.is_empty() && !region.reached_avoided && !region.roi.touches_border(w, h)
}

/// Sum the sizes of all non-leaking open regions of one layer.
///
/// `invalid` persists across layers. Cells in it are never seeds or region members again:
/// a region that reaches one leaks without re-walking the cached cells. Every cell of a
/// leaking region found here is added to it. It only ever grows: open sets grow with
/// the water level, so a region that reaches the border keeps reaching it.
pub fn layer_empty_area(layer_im: &MaskIm, z: u32, invalid: &mut Bitmap) -> LayerReport {
    let w = layer_im.w;
    let h = layer_im.h;
    assert_eq!((invalid.w, invalid.h), (w, h), "invalid set / layer size mismatch");

    let mut processed = Bitmap::new(w, h);
    let mut report = LayerReport {
        z,
        area: 0,
        valid_regions: 0,
        leaked_regions: 0,
        newly_invalid: 0,
        water_im: MaskIm::new(w, h),
    };

    for y in 0..h {
        for x in 0..w {
            if invalid.contains(x, y) || processed.contains(x, y) {
                continue;
            }

            let region = find_region_avoiding(layer_im, x, y, invalid);
            if region.is_empty() {
                continue;
            }

            let is_valid = is_region_valid(w, h, &region);
            trace!(
                "z={z} region at ({x}, {y}) size={} roi={:?} valid={is_valid}",
                region.size(),
                region.roi
            );

            for (rx, ry) in region.coords() {
                processed.insert(rx, ry);
                if is_valid {
                    report.water_im.arr[ry * report.water_im.s + rx] = MASK_OPEN;
                } else if invalid.insert(rx, ry) {
                    report.newly_invalid += 1;
                }
            }

            if is_valid {
                report.area += region.size();
                report.valid_regions += 1;
            } else {
                report.leaked_regions += 1;
            }
        }
    }

    report
}

/// Total water volume the terrain holds at equilibrium.
pub fn estimate_water_volume(height_im: &HeightIm) -> Result<u64, GridError> {
    estimate_water_volume_with(height_im, &mut |_: &MaskIm, _: &LayerReport| {})
}

/// Same as `estimate_water_volume`, reporting each level to `observer` as it is processed.
///
/// Levels run from `min + 1` up to `max` inclusive. The leak cache is local to this call,
/// so repeated or interleaved estimations never share state.
pub fn estimate_water_volume_with<O>(
    height_im: &HeightIm,
    observer: &mut O,
) -> Result<u64, GridError>
where
    O: LayerObserver + ?Sized,
{
    let w = height_im.w;
    let h = height_im.h;
    if !height_im.has_valid_shape() {
        return Err(GridError::InvalidShape { w, h });
    }
    let Some((min_h, max_h)) = height_im.min_max() else {
        return Err(GridError::InvalidShape { w, h });
    };

    if min_h == max_h {
        debug!("flat terrain at height {min_h}, nothing to pool");
        return Ok(0);
    }

    let mut invalid = Bitmap::new(w, h);
    let mut volume = 0u64;

    for z in (min_h + 1..=max_h).step_by(Z_STEP as usize) {
        let layer_im = height_im.to_layer_mask(z);
        let report = layer_empty_area(&layer_im, z, &mut invalid);
        debug!(
            "z={z} area={} valid_regions={} leaked_regions={} invalid_total={}",
            report.area,
            report.valid_regions,
            report.leaked_regions,
            invalid.len()
        );

        observer.on_layer(&layer_im, &report);
        volume += report.area as u64 * u64::from(Z_STEP);
    }

    info!("{w}x{h} terrain, heights {min_h}..={max_h}: water volume {volume}");
    Ok(volume)
}

// Tests
// -----------------------------------------------------------------------------
