pub mod cli;
pub mod error;
pub mod packages;
pub mod report;
pub mod training;
pub mod types;
pub mod utils;

pub use error::{WorkoutError, WorkoutResult};
pub use packages::{Package, WorkoutCode, read_package};
pub use report::report;
pub use training::{Running, SportsWalking, Swimming, Training, Workout};
pub use types::InfoMessage;
