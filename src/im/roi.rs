/// Axis-aligned bounding box of a set of pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ROI {
    pub l: usize,
    pub t: usize,
    /// Exclusive right bound.
    pub r: usize,
    /// Exclusive bottom bound.
    pub b: usize,
}

impl ROI {
    /// The 1x1 box covering a single pixel.
    pub fn of_pixel(x: usize, y: usize) -> ROI {
        ROI {
            l: x,
            t: y,
            r: x + 1,
            b: y + 1,
        }
    }

    /// Grow to cover pixel `(x, y)`.
    pub fn include(&mut self, x: usize, y: usize) {
        self.l = self.l.min(x);
        self.t = self.t.min(y);
        self.r = self.r.max(x + 1);
        self.b = self.b.max(y + 1);
    }

    /// True if the box reaches the outermost ring of a `max_w x max_h` image.
    pub fn touches_border(&self, max_w: usize, max_h: usize) -> bool {
        self.l == 0 || self.t == 0 || self.r >= max_w || self.b >= max_h
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn include_grows_the_box() {
        let mut roi = ROI::of_pixel(2, 3);
        roi.include(4, 1);
        assert_eq!(roi, ROI { l: 2, t: 1, r: 5, b: 4 });

        roi.include(3, 2);
        assert_eq!(roi, ROI { l: 2, t: 1, r: 5, b: 4 });
    }

    #[test]
    fn border_contact() {
        assert!(!ROI::of_pixel(1, 1).touches_border(3, 3));
        assert!(ROI::of_pixel(2, 1).touches_border(3, 3));
        assert!(ROI::of_pixel(1, 0).touches_border(3, 3));
        assert!(!ROI { l: 1, t: 1, r: 4, b: 4 }.touches_border(5, 5));
        assert!(ROI { l: 1, t: 1, r: 5, b: 4 }.touches_border(5, 5));
    }
}
