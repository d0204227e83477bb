use crate::im::flood::neighbors;
use crate::im::{HeightIm, MASK_OPEN, MaskIm};
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn ascii_rows(grid: &str) -> Vec<&str> {
    let rows: Vec<&str> = grid
        .lines()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty())
        .collect();

    let h = rows.len();
    assert!(h > 0, "grid must have at least one non-empty row");
    let w = rows[0].len();
    assert!(w > 0, "grid rows must be non-empty");
    for r in &rows {
        assert_eq!(r.len(), w, "all rows must have equal length");
    }
    rows
}

/// One digit per cell.
pub fn height_im_from_ascii(grid: &str) -> HeightIm {
    let rows = ascii_rows(grid);
    let mut im = HeightIm::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            let v = ch
                .to_digit(10)
                .unwrap_or_else(|| panic!("invalid height char '{ch}', expected digit"));
            im.arr[y * im.s + x] = v;
        }
    }
    im
}

/// `#` is open, `.` is closed.
pub fn mask_im_from_ascii(grid: &str) -> MaskIm {
    let rows = ascii_rows(grid);
    let mut im = MaskIm::new(rows[0].len(), rows.len());
    for (y, row) in rows.iter().enumerate() {
        for (x, ch) in row.chars().enumerate() {
            im.arr[y * im.s + x] = match ch {
                '#' => MASK_OPEN,
                '.' => 0,
                _ => panic!("invalid mask char '{ch}', expected '#' or '.'"),
            };
        }
    }
    im
}

/// Priority-flood reference: grow inward from the border in height order, the water level at
/// each cell is the lowest spill height on any path to the outside.
pub fn priority_flood_volume(im: &HeightIm) -> u64 {
    let (w, h) = (im.w, im.h);
    let mut seen = vec![false; w * h];
    let mut heap: BinaryHeap<Reverse<(u32, usize, usize)>> = BinaryHeap::new();

    for y in 0..h {
        for x in 0..w {
            if x == 0 || y == 0 || x + 1 == w || y + 1 == h {
                seen[y * w + x] = true;
                heap.push(Reverse((im.arr[y * im.s + x], x, y)));
            }
        }
    }

    let mut volume = 0u64;
    while let Some(Reverse((level, x, y))) = heap.pop() {
        for (nx, ny) in neighbors(w, h, x, y) {
            if seen[ny * w + nx] {
                continue;
            }
            seen[ny * w + nx] = true;
            let nh = im.arr[ny * im.s + nx];
            if nh < level {
                volume += u64::from(level - nh);
            }
            heap.push(Reverse((level.max(nh), nx, ny)));
        }
    }
    volume
}

#[test]
fn priority_flood_matches_hand_count() {
    let im = height_im_from_ascii(
        r#"
            33333
            31113
            31013
            31113
            33333
        "#,
    );
    assert_eq!(priority_flood_volume(&im), 19);
}
