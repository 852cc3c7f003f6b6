//! Fixed-size batching of the candidate stream.

/// Groups an iterator's items into `Vec`s of `batch_size` for
/// coarse-grained dispatch; only the final batch may be shorter. No
/// item is dropped, duplicated or reordered relative to the inner
/// iterator.
pub struct Batches<I: Iterator> {
    inner: I,
    batch_size: usize,
}

impl<I: Iterator> Batches<I> {
    pub fn new(inner: I, batch_size: usize) -> Self {
        Self {
            inner,
            batch_size: batch_size.max(1),
        }
    }
}

impl<I: Iterator> Iterator for Batches<I> {
    type Item = Vec<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut batch = Vec::with_capacity(self.batch_size);
        for item in self.inner.by_ref() {
            batch.push(item);
            if batch.len() == self.batch_size {
                break;
            }
        }
        if batch.is_empty() {
            None
        } else {
            Some(batch)
        }
    }
}
