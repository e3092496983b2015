use std::fmt::Debug;
use std::sync::Arc;

/// Marker for values that can travel through a shared queue.<br/>
/// 共有キューを通して受け渡しできる値のマーカー。
pub trait Element: Debug + Send {}

impl Element for i8 {}

impl Element for i16 {}

impl Element for i32 {}

impl Element for i64 {}

impl Element for u8 {}

impl Element for u16 {}

impl Element for u32 {}

impl Element for u64 {}

impl Element for usize {}

impl Element for f32 {}

impl Element for f64 {}

impl Element for char {}

impl Element for &'static str {}

impl Element for String {}

impl<T: Debug + Send> Element for Box<T> {}

impl<T: Debug + Send + Sync> Element for Arc<T> {}

impl<T: Debug + Send> Element for Option<T> {}

impl<T: Debug + Send> Element for Vec<T> {}
