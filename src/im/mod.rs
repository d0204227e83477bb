pub mod core;
#[allow(unused_imports)]
pub use self::core::{
    HeightIm, Im, Lum16Im, MASK_OPEN, MaskIm, RGBAIm, copy_mask_im_to_rgba_im,
    height_im_to_rgba_im,
};

pub mod roi;
#[allow(unused_imports)]
pub use roi::ROI;

pub mod flood;
pub use flood::{Region, find_region, find_region_avoiding, neighbors};

// Optional extras
// -----------------------------------------------------------------------------

#[cfg(feature = "im-io")]
pub mod io;
