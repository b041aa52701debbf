pub mod error;
pub mod model;
pub mod output;
pub mod providers;
pub mod report;
pub mod service;
