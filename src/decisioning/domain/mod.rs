pub mod model;
pub mod policies;
pub mod services;
