//! SQLite storage implementation for savings plans.

mod model;
mod repository;

pub use model::{NewSavingsPlanDB, SavingsPlanDB};
pub use repository::SavingsPlanRepository;
