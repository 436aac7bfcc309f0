//! Well-known networks, ready to feed into an `InterLayerPipeline`.

pub mod googlenet;
pub mod resnet;
pub mod vgg;
pub mod zfnet;

pub use googlenet::googlenet;
pub use resnet::{RESNET50_BLOCKS, RESNET152_BLOCKS, resnet};
pub use vgg::vgg16;
pub use zfnet::zfnet;
