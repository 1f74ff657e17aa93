/// Analysis modules — reference counting and useless-image collection.

pub mod references;
pub mod useless;

pub use references::{count_references, ReferenceStats};
pub use useless::{extension, get_useless_images, useless_images, ImageTypes};
