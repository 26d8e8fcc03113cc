pub mod descriptor_locator;
pub mod interpolation;
pub mod map_builder;
pub mod model_builder;
pub mod pom_parser;

pub use descriptor_locator::DescriptorLocator;
pub use interpolation::Interpolator;
pub use map_builder::RecommendationMapBuilder;
pub use model_builder::EffectiveModelBuilder;
