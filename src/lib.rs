// Library for tests to access modules

pub mod config;
pub mod dashboard;
pub mod docker_repo;
pub mod error;
pub mod export;
pub mod generator;
pub mod models;
pub mod runtime;
pub mod version;
