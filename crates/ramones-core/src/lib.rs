pub mod config;
pub mod domain;
pub mod modules;
pub mod numerics;
