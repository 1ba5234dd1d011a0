#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use cifar_aug_image as image;

#[doc(inline)]
pub use cifar_aug_imgproc as imgproc;

#[doc(inline)]
pub use cifar_aug_io as io;
