// Library crate root.
//
// This crate is used both as a binary (src/main.rs) and as a library.
// The estimator lives in `water`; everything else feeds it terrain or shows its work.

pub mod ascii;
pub mod bitmap;
pub mod desc;
pub mod error;
pub mod generate;
pub mod im;
pub mod water;

pub use error::{GridError, PoolError, PoolResult};
pub use water::{LayerObserver, LayerReport, estimate_water_volume, estimate_water_volume_with};

#[cfg(test)]
pub mod test_helpers;
