pub mod download;
pub mod message;
pub mod navigation;
pub mod storage;
pub mod time;
