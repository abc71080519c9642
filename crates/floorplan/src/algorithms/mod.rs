pub mod grayscale;
pub mod preprocessing;
pub mod extraction;
pub mod simplification;

pub use grayscale::*;
pub use preprocessing::*;
pub use extraction::*;
pub use simplification::*;

/// Intensities strictly below this value are classified as wall pixels.
pub const WALL_THRESHOLD: u8 = 50;
