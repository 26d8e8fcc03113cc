pub mod recommend_versions;

pub use recommend_versions::RecommendVersionsUseCase;
