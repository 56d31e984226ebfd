// Copyright 2025 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item renderers and the factory that makes them.

use carousel_grid::Visual;

/// A visual that displays one item of a sequence at a time.
///
/// The recycler rebinds renderers as they scroll in and out of view, so
/// [`set_data`](Self::set_data) must be cheap: no work proportional to the
/// sequence length.
pub trait ItemRenderer<T>: Visual {
    /// Shows `item`, which sits at `index` in the sequence.
    fn set_data(&mut self, index: usize, item: &T);

    /// Index of the item currently shown, if any has been bound.
    fn data_index(&self) -> Option<usize>;
}

/// Produces renderers for a recycler.
///
/// Every renderer a factory produces must have the same intrinsic size; the
/// recycler creates one on installation to learn it. Returning `None` reports
/// that no renderer could be made right now. The recycler keeps the renderers
/// it already has and retries on a later tick.
///
/// Any `FnMut() -> Option<R>` is a factory:
///
/// ```
/// use carousel_recycler::RendererFactory;
///
/// let mut made = 0;
/// let mut factory = || {
///     made += 1;
///     (made <= 2).then_some(made)
/// };
/// assert_eq!(factory.create(), Some(1));
/// assert_eq!(factory.create(), Some(2));
/// assert_eq!(factory.create(), None);
/// ```
pub trait RendererFactory<R> {
    /// Makes a new renderer.
    fn create(&mut self) -> Option<R>;
}

impl<R, F> RendererFactory<R> for F
where
    F: FnMut() -> Option<R>,
{
    fn create(&mut self) -> Option<R> {
        self()
    }
}
