mod gradient;
mod history;
mod trainer;

pub use gradient::gradient;
pub use history::{EpochRecord, History};
pub use trainer::{Trainer, train_step};
