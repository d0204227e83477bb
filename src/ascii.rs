use crate::im::{HeightIm, MaskIm};
use std::fmt::Write;

const MIN_FIELD_W: usize = 2;

fn render_table<F>(w: usize, h: usize, field_w: usize, cell: F) -> String
where
    F: Fn(usize, usize) -> u64,
{
    let mut out = String::new();
    for y in 0..h {
        for x in 0..w {
            if x > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{:>field_w$}", cell(x, y));
        }
        out.push('\n');
    }
    out
}

/// Heights right-aligned in equal-width columns.
pub fn height_im_to_ascii(im: &HeightIm) -> String {
    let field_w = im
        .min_max()
        .map_or(1, |(_, max_h)| max_h.to_string().len())
        .max(MIN_FIELD_W);
    render_table(im.w, im.h, field_w, |x, y| u64::from(im.arr[y * im.s + x]))
}

/// `1` where the mask is open, `0` where it is closed.
pub fn mask_to_ascii(mask: &MaskIm) -> String {
    render_table(mask.w, mask.h, MIN_FIELD_W, |x, y| {
        u64::from(mask.arr[y * mask.s + x] != 0)
    })
}
