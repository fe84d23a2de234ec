// Data models exchanged with the plugin host
// Author: kelexine (https://github.com/kelexine)

pub mod translation;

pub use translation::*;
