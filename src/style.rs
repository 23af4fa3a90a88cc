pub mod color;
pub mod defaults;
