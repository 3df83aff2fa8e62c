// src/form/mod.rs

pub mod answers;
pub mod convert;
pub mod fixed;
pub mod session;
pub mod submit;
pub mod validate;
