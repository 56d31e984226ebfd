// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Data mutations as values.
//!
//! A [`DataCommand`] describes one change to a recycler's sequence. Applying
//! commands has exactly the effect of the matching [`Recycler`] method, so
//! producers that do not own the recycler (another thread, a network handler)
//! can describe changes and leave the owner to apply them at a frame boundary.

use alloc::vec::Vec;

use crate::recycler::Recycler;
use crate::renderer::{ItemRenderer, RendererFactory};
use crate::sequence::DataSequence;

/// One mutation of a recycler's data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DataCommand<T> {
    /// Append an item.
    Push(T),
    /// Insert an item; indices past the end append.
    Insert {
        /// Insertion index.
        index: usize,
        /// The new item.
        item: T,
    },
    /// Remove the first item equal to this one.
    Remove(T),
    /// Remove the item at an index.
    RemoveAt(usize),
    /// Remove every item.
    Clear,
    /// Replace the whole sequence; `None` detaches it.
    Replace(Option<Vec<T>>),
}

impl<T, R, F> Recycler<T, R, F>
where
    T: PartialEq,
    R: ItemRenderer<T>,
    F: RendererFactory<R>,
{
    /// Applies one command. Returns whether it changed anything.
    pub fn apply(&mut self, command: DataCommand<T>) -> bool {
        match command {
            DataCommand::Push(item) => self.add_item(item),
            DataCommand::Insert { index, item } => self.insert_item(index, item),
            DataCommand::Remove(item) => self.remove_item(&item),
            DataCommand::RemoveAt(index) => self.remove_item_at(index),
            DataCommand::Clear => self.remove_all_items(),
            DataCommand::Replace(items) => {
                self.set_data(items.map(DataSequence::from));
                true
            }
        }
    }

    /// Applies every command waiting in `queue`, returning how many were
    /// drained.
    ///
    /// All of them land before the next tick, so a burst of commands costs a
    /// single resize pass.
    #[cfg(feature = "std")]
    pub fn apply_pending(&mut self, queue: &CommandReceiver<T>) -> usize {
        let mut drained = 0;
        for command in queue.inner.try_iter() {
            self.apply(command);
            drained += 1;
        }
        if drained > 0 {
            tracing::debug!(drained, "applied queued data commands");
        }
        drained
    }
}

/// Creates a command queue for feeding a recycler from other threads.
///
/// ```
/// use carousel_recycler::{DataCommand, command_queue};
///
/// let (tx, rx) = command_queue::<u32>();
/// let producer = std::thread::spawn(move || {
///     for i in 0..3 {
///         tx.send(DataCommand::Push(i));
///     }
/// });
/// producer.join().unwrap();
/// assert_eq!(rx.try_iter().count(), 3);
/// ```
#[cfg(feature = "std")]
#[must_use]
pub fn command_queue<T>() -> (CommandSender<T>, CommandReceiver<T>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (CommandSender { inner: tx }, CommandReceiver { inner: rx })
}

/// Sending half of a [`command_queue`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct CommandSender<T> {
    inner: std::sync::mpsc::Sender<DataCommand<T>>,
}

#[cfg(feature = "std")]
impl<T> Clone for CommandSender<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

#[cfg(feature = "std")]
impl<T> CommandSender<T> {
    /// Queues `command`. Returns `false` if the receiver is gone.
    pub fn send(&self, command: DataCommand<T>) -> bool {
        self.inner.send(command).is_ok()
    }
}

/// Receiving half of a [`command_queue`], drained by
/// [`Recycler::apply_pending`].
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct CommandReceiver<T> {
    inner: std::sync::mpsc::Receiver<DataCommand<T>>,
}

#[cfg(feature = "std")]
impl<T> CommandReceiver<T> {
    /// Drains queued commands without blocking.
    pub fn try_iter(&self) -> impl Iterator<Item = DataCommand<T>> + '_ {
        self.inner.try_iter()
    }
}
