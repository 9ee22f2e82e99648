pub mod generate;
pub mod solve;
pub mod verify;
