pub mod dump;
pub mod estimate;
pub mod init;
pub mod press;
pub mod serve;
