pub mod api;
pub mod components;
pub mod text_utils;
