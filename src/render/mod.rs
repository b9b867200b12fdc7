pub mod compositor;
pub mod export;
