pub mod config;
pub mod logging;

pub mod catalog;
pub mod encode;
pub mod fetch;
pub mod normalize;
pub mod processor;
pub mod storage;
pub mod summary;
pub mod url_model;
