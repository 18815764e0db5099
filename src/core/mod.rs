pub mod palette;
pub mod services;
