pub mod cities;
pub mod entities;

pub use cities::get_or_create_city;
pub use entities::*;
