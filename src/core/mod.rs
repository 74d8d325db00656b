pub mod calculator;
pub mod estimate;
pub mod press;
