pub mod collections;

pub use self::collections::*;
