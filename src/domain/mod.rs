pub mod feature;
pub mod house;

pub use feature::*;
pub use house::*;
