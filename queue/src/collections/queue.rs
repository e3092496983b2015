use std::fmt::Debug;

use thiserror::Error;

mod circular_queue;
mod ring_buffer;

pub use self::circular_queue::*;

use crate::collections::element::Element;

/// The default number of elements held by a queue built with `Default`.<br/>
/// `Default` で生成したキューが保持できる要素数。
pub const DEFAULT_CAPACITY: usize = 32;

/// An error that occurs when a queue operation fails.<br/>
/// キューの操作に失敗した場合に発生するエラー。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError<E> {
  /// The queue is full. Carries the element that was rejected.<br/>
  /// キューが満杯。追加できなかった要素を返却する。
  #[error("queue full: cannot enqueue {0:?}")]
  Full(E),
  /// The requested capacity cannot back a queue.<br/>
  /// 指定された容量ではキューを構築できない。
  #[error("invalid queue capacity: {0}")]
  InvalidCapacity(usize),
}

impl<E> QueueError<E> {
  /// Takes back the element that could not be enqueued, if any.<br/>
  /// 追加できなかった要素があれば取り戻します。
  pub fn into_element(self) -> Option<E> {
    match self {
      QueueError::Full(element) => Some(element),
      QueueError::InvalidCapacity(_) => None,
    }
  }
}

/// A trait that defines the behavior of a bounded queue.<br/>
/// 有界キューの振る舞いを定義するトレイト。
pub trait QueueBase<E: Element>: Debug + Send + Sync {
  /// Returns the number of elements currently held.<br/>
  /// 現在保持している要素数を返します。
  fn len(&self) -> usize;

  /// Returns the maximum number of elements this queue can hold.<br/>
  /// このキューが保持できる最大要素数を返します。
  fn capacity(&self) -> usize;

  /// Returns whether this queue is empty.<br/>
  /// このキューが空かどうかを返します。
  fn is_empty(&self) -> bool {
    self.len() == 0
  }

  /// Returns whether this queue is non-empty.<br/>
  /// このキューが空でないかどうかを返します。
  fn non_empty(&self) -> bool {
    !self.is_empty()
  }

  /// Returns whether the queue size has reached its capacity.<br/>
  /// このキューのサイズが容量まで到達したかどうかを返します。
  fn is_full(&self) -> bool {
    self.len() == self.capacity()
  }

  /// Returns whether the queue size has not reached its capacity.<br/>
  /// このキューのサイズが容量まで到達してないかどうかを返します。
  fn non_full(&self) -> bool {
    !self.is_full()
  }
}

pub trait QueueWriter<E: Element>: QueueBase<E> {
  /// Inserts the element if it can be done immediately without violating the capacity limit.<br/>
  /// 容量制限に違反せずにすぐ実行できる場合は、指定された要素をこのキューに挿入します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(())` - If the element is inserted. / 要素が挿入された場合。
  /// - `Err(QueueError::Full(element))` - If the queue is full. / キューが満杯の場合。
  fn offer(&self, element: E) -> Result<(), QueueError<E>>;
}

pub trait QueueReader<E: Element>: QueueBase<E> {
  /// Retrieves and removes the head of the queue. Returns `None` if the queue is empty.<br/>
  /// キューの先頭を取得および削除します。キューが空の場合は `None` を返します。
  fn poll(&self) -> Option<E>;

  /// Drops every element held by the queue.<br/>
  /// キューが保持している全要素を破棄します。
  fn clean_up(&self);
}

/// A trait that defines the behavior of a queue that can be peeked.<br/>
/// Peekができるキューの振る舞いを定義するトレイト。
pub trait HasPeekBehavior<E: Element>: QueueReader<E> {
  /// Gets the head of the queue without removing it. Returns `None` if the queue is empty.<br/>
  /// キューの先頭を削除せずに取得します。キューが空の場合は `None` を返します。
  fn peek(&self) -> Option<E>;
}

#[cfg(test)]
mod tests {
  use super::QueueError;

  #[test]
  fn queue_error_messages() {
    assert_eq!(
      QueueError::Full("D").to_string(),
      "queue full: cannot enqueue \"D\""
    );
    assert_eq!(
      QueueError::<u8>::InvalidCapacity(0).to_string(),
      "invalid queue capacity: 0"
    );
  }

  #[test]
  fn queue_error_returns_rejected_element() {
    assert_eq!(QueueError::Full(7).into_element(), Some(7));
    assert_eq!(QueueError::<i32>::InvalidCapacity(0).into_element(), None);
  }
}
