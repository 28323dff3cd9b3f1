pub mod pin;
pub mod verify;
