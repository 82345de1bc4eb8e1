//! Landmark-driven geometric face warping.
//!
//! - [`image`]: the RGBA pixel buffer and pixel-space points
//! - [`imgproc`]: bilinear sampling and the directional and radial warps
//! - [`face`]: landmark sets, the preset registry and the preset pipeline

#[doc(inline)]
pub use facewarp_image as image;

#[doc(inline)]
pub use facewarp_imgproc as imgproc;

#[doc(inline)]
pub use facewarp_face as face;
