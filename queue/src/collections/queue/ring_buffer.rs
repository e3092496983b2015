use crate::collections::queue::QueueError;


/// Fixed-size circular storage with one sacrificial slot.
///
/// `slots` holds `capacity + 1` entries so that an empty buffer (`head == tail`)
/// and a full one (`tail + 1 == head`, modulo the slot count) never collapse
/// into the same cursor state. None of the methods lock; the owner must hold
/// whatever guard protects the buffer.
#[derive(Debug)]
pub(crate) struct RingBuffer<E> {
  slots: Box<[Option<E>]>,
  head: usize,
  tail: usize,
  capacity: usize,
}

impl<E> RingBuffer<E> {
  pub(crate) fn new(capacity: usize) -> Result<Self, QueueError<E>> {
    if capacity == 0 {
      return Err(QueueError::InvalidCapacity(capacity));
    }
    let slot_count = capacity.checked_add(1).ok_or(QueueError::InvalidCapacity(capacity))?;
    let mut slots: Vec<Option<E>> = Vec::new();
    slots
      .try_reserve_exact(slot_count)
      .map_err(|_| QueueError::InvalidCapacity(capacity))?;
    slots.resize_with(slot_count, || None);
    Ok(Self {
      slots: slots.into_boxed_slice(),
      head: 0,
      tail: 0,
      capacity,
    })
  }

  pub(crate) fn capacity(&self) -> usize {
    self.capacity
  }

  pub(crate) fn slot_count(&self) -> usize {
    self.slots.len()
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.head == self.tail
  }

  pub(crate) fn is_full(&self) -> bool {
    self.advance(self.tail) == self.head
  }

  pub(crate) fn len(&self) -> usize {
    (self.tail + self.slots.len() - self.head) % self.slots.len()
  }

  pub(crate) fn peek(&self) -> Option<&E> {
    if self.is_empty() {
      return None;
    }
    self.slots[self.head].as_ref()
  }

  pub(crate) fn offer_mut(&mut self, element: E) -> Result<(), QueueError<E>> {
    if self.is_full() {
      return Err(QueueError::Full(element));
    }
    self.slots[self.tail] = Some(element);
    self.tail = self.advance(self.tail);
    Ok(())
  }

  pub(crate) fn poll_mut(&mut self) -> Option<E> {
    if self.is_empty() {
      return None;
    }
    let element = self.slots[self.head].take();
    self.head = self.advance(self.head);
    element
  }

  /// Drops every held element and rewinds both cursors. Returns how many were dropped.
  pub(crate) fn clean_up_mut(&mut self) -> usize {
    let dropped = self.len();
    self.slots.iter_mut().for_each(|slot| *slot = None);
    self.head = 0;
    self.tail = 0;
    dropped
  }

  fn advance(&self, index: usize) -> usize {
    (index + 1) % self.slots.len()
  }
}
