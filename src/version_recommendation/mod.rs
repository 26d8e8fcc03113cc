//! Version recommendation bounded context: domain models and the services
//! that turn a project's resolvable dependency set into a recommendation map.

pub mod domain;
pub mod services;
