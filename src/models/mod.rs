// src/models/mod.rs

pub mod application;
pub mod question;
pub mod recruitment;
pub mod stage;
