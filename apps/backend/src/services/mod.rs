pub mod scheduler;

pub use scheduler::LeitnerScheduler;
