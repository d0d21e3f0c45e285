//! Raster side of the image compositor
//!
//! [`ImageLoader`] resolves an [`ImageRef`](sportify_domain::ImageRef) into
//! pixels and [`Compositor`] paints them into a fixed-size canvas following
//! the domain's crop-and-cover plan.

mod compositor;
mod loader;

pub use compositor::{Compositor, FALLBACK_BACKGROUND, FALLBACK_LABEL};
pub use loader::{ImageLoader, LoadError};
