// Copyright @yucwang 2026

pub mod checker;
pub mod uniform;
