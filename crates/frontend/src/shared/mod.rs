pub mod api_utils;
pub mod components;
pub mod icons;
pub mod number_format;
pub mod request_guard;
pub mod toast;
