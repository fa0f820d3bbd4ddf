//! Вспомогательные утилиты

pub mod crypto;
