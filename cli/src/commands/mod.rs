pub mod address;
pub mod amount;
pub mod assets;
pub mod color;
pub mod number;
pub mod storage;
pub mod text;
