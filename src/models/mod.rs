pub mod button;
pub mod press;
