pub mod data;
pub mod district;
pub mod geo;
pub mod selection;

pub use district::*;
pub use geo::LatLng;
pub use selection::*;
