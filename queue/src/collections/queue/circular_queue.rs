use std::fmt::{Debug, Formatter};
use std::sync::Arc;

use parking_lot::Mutex;

use crate::collections::element::Element;
use crate::collections::queue::ring_buffer::RingBuffer;
use crate::collections::queue::{
  HasPeekBehavior, QueueBase, QueueError, QueueReader, QueueWriter, DEFAULT_CAPACITY,
};


/// A bounded FIFO queue shared between producers and consumers.<br/>
/// 生産者と消費者で共有する有界FIFOキュー。
///
/// Every operation takes the single per-queue lock once and returns without
/// waiting: offering into a full queue fails with [`QueueError::Full`], and
/// polling or peeking an empty queue yields `None`.
///
/// Cloning produces another handle to the same queue. The storage is released
/// when the last handle is dropped.
///
/// # Examples
/// ```
/// use nexus_circular_queue_rs::{CircularQueue, QueueError};
///
/// let queue = CircularQueue::new(2).unwrap();
/// queue.offer("a").unwrap();
/// queue.offer("b").unwrap();
/// assert_eq!(queue.offer("c"), Err(QueueError::Full("c")));
/// assert_eq!(queue.poll(), Some("a"));
/// ```
pub struct CircularQueue<E> {
  inner: Arc<Mutex<RingBuffer<E>>>,
  capacity: usize,
}

static_assertions::assert_impl_all!(CircularQueue<u8>: Send, Sync, Clone);
static_assertions::assert_not_impl_any!(CircularQueue<std::rc::Rc<u8>>: Send, Sync);

impl<E> CircularQueue<E> {
  /// Creates an empty queue able to hold `capacity` elements.<br/>
  /// `capacity` 個の要素を保持できる空のキューを生成します。
  ///
  /// # Return Value / 戻り値
  /// - `Ok(queue)` - A queue with `capacity + 1` allocated slots. / `capacity + 1` 個のスロットを確保したキュー。
  /// - `Err(QueueError::InvalidCapacity(capacity))` - If `capacity` is zero or too large to allocate. / `capacity` が0または確保できない大きさの場合。
  pub fn new(capacity: usize) -> Result<Self, QueueError<E>> {
    let buffer = RingBuffer::new(capacity)?;
    tracing::debug!(capacity, slots = buffer.slot_count(), "circular queue created");
    Ok(Self {
      capacity: buffer.capacity(),
      inner: Arc::new(Mutex::new(buffer)),
    })
  }

  /// Appends `element` at the tail unless the queue is full.<br/>
  /// キューが満杯でなければ `element` を末尾に追加します。
  pub fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    let mut buffer = self.inner.lock();
    let result = buffer.offer_mut(element);
    if result.is_err() {
      tracing::trace!(capacity = self.capacity, "rejected offer to a full circular queue");
    }
    result
  }

  /// Removes and returns the head element, or `None` when the queue is empty.<br/>
  /// 先頭の要素を取り出して返します。キューが空の場合は `None` を返します。
  pub fn poll(&self) -> Option<E> {
    self.inner.lock().poll_mut()
  }

  /// Returns a copy of the element the next [`poll`](Self::poll) would return, leaving the queue untouched.<br/>
  /// 次の [`poll`](Self::poll) が返す要素の複製を返します。キューは変更しません。
  pub fn peek(&self) -> Option<E>
  where
    E: Clone, {
    self.inner.lock().peek().cloned()
  }

  /// Applies `f` to the head element while the lock is held.<br/>
  /// ロックを保持したまま先頭の要素に `f` を適用します。
  ///
  /// `f` must not call back into this queue.
  pub fn peek_with<R>(&self, f: impl FnOnce(&E) -> R) -> Option<R> {
    self.inner.lock().peek().map(f)
  }

  pub fn is_empty(&self) -> bool {
    self.inner.lock().is_empty()
  }

  pub fn non_empty(&self) -> bool {
    !self.is_empty()
  }

  pub fn is_full(&self) -> bool {
    self.inner.lock().is_full()
  }

  pub fn non_full(&self) -> bool {
    !self.is_full()
  }

  /// Returns the number of elements currently held, always within `0..=capacity`.<br/>
  /// 現在保持している要素数を返します。常に `0..=capacity` の範囲です。
  pub fn len(&self) -> usize {
    self.inner.lock().len()
  }

  /// Returns the number of elements that can still be offered.<br/>
  /// あと何個の要素を追加できるかを返します。
  pub fn remaining_capacity(&self) -> usize {
    self.capacity - self.len()
  }

  /// Returns the capacity given at construction. Does not lock.<br/>
  /// 生成時に指定した容量を返します。ロックは取得しません。
  pub fn capacity(&self) -> usize {
    self.capacity
  }

  /// Same as [`capacity`](Self::capacity).
  pub fn size(&self) -> usize {
    self.capacity
  }

  /// Drops every held element and rewinds the cursors.<br/>
  /// 保持している全要素を破棄し、カーソルを巻き戻します。
  pub fn clean_up(&self) {
    let dropped = self.inner.lock().clean_up_mut();
    tracing::debug!(dropped, "circular queue cleaned up");
  }
}

impl<E> Clone for CircularQueue<E> {
  fn clone(&self) -> Self {
    Self {
      inner: self.inner.clone(),
      capacity: self.capacity,
    }
  }
}

impl<E> Debug for CircularQueue<E> {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("CircularQueue")
      .field("len", &self.len())
      .field("capacity", &self.capacity)
      .finish()
  }
}

impl<E> Default for CircularQueue<E> {
  fn default() -> Self {
    match Self::new(DEFAULT_CAPACITY) {
      Ok(queue) => queue,
      Err(_) => unreachable!("DEFAULT_CAPACITY is a valid capacity"),
    }
  }
}

impl<E: Element> QueueBase<E> for CircularQueue<E> {
  fn len(&self) -> usize {
    CircularQueue::len(self)
  }

  fn capacity(&self) -> usize {
    self.capacity
  }

  fn is_empty(&self) -> bool {
    CircularQueue::is_empty(self)
  }

  fn is_full(&self) -> bool {
    CircularQueue::is_full(self)
  }
}

impl<E: Element> QueueWriter<E> for CircularQueue<E> {
  fn offer(&self, element: E) -> Result<(), QueueError<E>> {
    CircularQueue::offer(self, element)
  }
}

impl<E: Element> QueueReader<E> for CircularQueue<E> {
  fn poll(&self) -> Option<E> {
    CircularQueue::poll(self)
  }

  fn clean_up(&self) {
    CircularQueue::clean_up(self)
  }
}

impl<E: Element + Clone> HasPeekBehavior<E> for CircularQueue<E> {
  fn peek(&self) -> Option<E> {
    CircularQueue::peek(self)
  }
}
