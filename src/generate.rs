use crate::im::HeightIm;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Random terrain with every cell drawn uniformly from `0..=max_height`.
///
/// A fixed `seed` always yields the same terrain; `None` seeds from OS entropy.
pub fn random_height_im(w: usize, h: usize, max_height: u32, seed: Option<u64>) -> HeightIm {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let mut im = HeightIm::new(w, h);
    for y in 0..h {
        for x in 0..w {
            im.arr[y * im.s + x] = rng.gen_range(0..=max_height);
        }
    }
    im
}
