pub mod coordinate;
pub mod descriptor;
pub mod effective_model;
pub mod recommendation_map;

pub use coordinate::{Coordinate, ModuleId};
pub use descriptor::{
    DescriptorFile, DESCRIPTOR_CLASSIFIER, DESCRIPTOR_EXTENSION, PACKAGING_MARKER,
};
pub use effective_model::{EffectiveModel, ManagedDependency};
pub use recommendation_map::RecommendationMap;
