//! HTTP обработчики

pub mod hash;
pub mod root;
