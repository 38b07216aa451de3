#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use chromalut_grid as grid;

#[doc(inline)]
pub use chromalut_ops as ops;

#[doc(inline)]
pub use chromalut_io as io;
