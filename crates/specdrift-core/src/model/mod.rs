pub mod spec;

pub use spec::{MethodDescriptor, PathItem, ResponseDescriptor, SpecDocument};
