pub mod formatting;
pub mod time;

pub use formatting::describe_estimate;
