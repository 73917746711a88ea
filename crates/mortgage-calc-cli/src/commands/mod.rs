pub mod interactive;
pub mod mortgage;
