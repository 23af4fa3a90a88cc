pub mod corner;
pub mod layers;
pub mod model;
