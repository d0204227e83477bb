use super::core::{HeightIm, Im, Lum16Im};
use image::ImageResult;
use std::path::Path;

fn dim_mismatch_err() -> image::ImageError {
    image::ImageError::Parameter(image::error::ParameterError::from_kind(
        image::error::ParameterErrorKind::DimensionMismatch,
    ))
}

// PNG I/O
// -----------------------------------------------------------------------------
impl Im<u8, 1> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let img = image::GrayImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl Im<u8, 4> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let img = image::RgbaImage::from_raw(self.w as u32, self.h as u32, self.arr.clone())
            .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }
}

impl Im<u16, 1> {
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> ImageResult<()> {
        let img = image::ImageBuffer::<image::Luma<u16>, _>::from_raw(
            self.w as u32,
            self.h as u32,
            self.arr.clone(),
        )
        .ok_or_else(dim_mismatch_err)?;

        img.save_with_format(path, image::ImageFormat::Png)
    }

    /// Any grayscale or color PNG is read as 16-bit luma; 8-bit sources are widened by `image`.
    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<Self> {
        let img = image::open(path)?.into_luma16();
        let w = img.width() as usize;
        let h = img.height() as usize;
        let arr = img.into_raw();

        if arr.len() != w * h {
            return Err(dim_mismatch_err());
        }
        Ok(Self { w, h, s: w, arr })
    }
}

impl Im<u32, 1> {
    /// Load a height-map where each gray level is one height unit.
    pub fn load_png<P: AsRef<Path>>(path: P) -> ImageResult<HeightIm> {
        Ok(Lum16Im::load_png(path)?.to_height_im())
    }
}

// Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::im::MaskIm;

    fn scratch_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("rpool-{}-{name}", std::process::id()))
    }

    #[test]
    fn lum16_png_round_trips_into_heights() {
        let mut src = Lum16Im::new(3, 2);
        src.arr.copy_from_slice(&[0, 1, 2, 300, 4, 65535]);

        let path = scratch_path("heights.png");
        src.save_png(&path).unwrap();
        let heights = HeightIm::load_png(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(heights.to_rows(), vec![vec![0, 1, 2], vec![300, 4, 65535]]);
    }

    #[test]
    fn mask_png_saves() {
        let mut mask = MaskIm::new(2, 2);
        mask.arr[3] = 255;
        let path = scratch_path("mask.png");
        mask.save_png(&path).unwrap();
        let back = image::open(&path).unwrap().into_luma8();
        let _ = std::fs::remove_file(&path);
        assert_eq!(back.into_raw(), vec![0, 0, 0, 255]);
    }
}
