mod linear;
pub mod loss;
mod model;

pub use linear::{Linear, predict};
pub use model::Model;
