pub mod resource;

pub use resource::{PhyDim2, Resource};
