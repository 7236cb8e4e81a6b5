//! The fixed lookup table of datasets and their target lines.

mod dataset;
mod target;

pub use dataset::{Dataset, DatasetId, Point};
pub use target::TargetModel;
