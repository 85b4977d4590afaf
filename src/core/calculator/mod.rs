pub mod dominant;
pub mod window;
