pub mod camera;
pub mod lifetime;
pub mod navigation;
pub mod storage;
pub mod time;
