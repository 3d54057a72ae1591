//! Restartable, read-once object streams.
//!
//! Training, evaluation and cross-validation all consume their samples
//! through the same [`ObjectStream`] abstraction: `read` pulls the next item
//! (or `None` at the end), `reset` rewinds the stream so another full pass
//! can be made. Streams are forward-only between resets.
//!
//! # Examples
//!
//! ```
//! use tanager::stream::{ObjectStream, VecObjectStream};
//!
//! let mut stream = VecObjectStream::new(vec![1, 2, 3]);
//! assert_eq!(stream.read().unwrap(), Some(1));
//! assert_eq!(stream.read().unwrap(), Some(2));
//! stream.reset().unwrap();
//! assert_eq!(stream.read().unwrap(), Some(1));
//! ```

use crate::error::Result;

/// A restartable stream of objects.
///
/// Implementations must return `Ok(None)` once the stream is exhausted and
/// keep returning it until `reset` is called.
pub trait ObjectStream<T> {
    /// Read the next object, or `None` if the stream is exhausted.
    fn read(&mut self) -> Result<Option<T>>;

    /// Rewind the stream to its beginning.
    fn reset(&mut self) -> Result<()>;
}

/// An object stream backed by an owned vector.
#[derive(Debug, Clone)]
pub struct VecObjectStream<T> {
    items: Vec<T>,
    cursor: usize,
}

impl<T> VecObjectStream<T> {
    /// Create a new stream over the given items.
    pub fn new(items: Vec<T>) -> Self {
        VecObjectStream { items, cursor: 0 }
    }

    /// Number of items in the underlying vector.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check whether the underlying vector is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> ObjectStream<T> for VecObjectStream<T> {
    fn read(&mut self) -> Result<Option<T>> {
        let item = self.items.get(self.cursor).cloned();
        if item.is_some() {
            self.cursor += 1;
        }
        Ok(item)
    }

    fn reset(&mut self) -> Result<()> {
        self.cursor = 0;
        Ok(())
    }
}

/// Create an object stream from any iterator.
pub fn object_stream<T, I>(iter: I) -> VecObjectStream<T>
where
    I: IntoIterator<Item = T>,
{
    VecObjectStream::new(iter.into_iter().collect())
}

/// A stream that chains several streams of the same item type.
///
/// `reset` rewinds every underlying stream and restarts from the first.
pub struct ConcatenatedObjectStream<'a, T> {
    streams: Vec<Box<dyn ObjectStream<T> + 'a>>,
    index: usize,
}

impl<'a, T> ConcatenatedObjectStream<'a, T> {
    /// Create a new concatenated stream.
    pub fn new(streams: Vec<Box<dyn ObjectStream<T> + 'a>>) -> Self {
        ConcatenatedObjectStream { streams, index: 0 }
    }
}

impl<T> ObjectStream<T> for ConcatenatedObjectStream<'_, T> {
    fn read(&mut self) -> Result<Option<T>> {
        while self.index < self.streams.len() {
            if let Some(item) = self.streams[self.index].read()? {
                return Ok(Some(item));
            }
            self.index += 1;
        }
        Ok(None)
    }

    fn reset(&mut self) -> Result<()> {
        for stream in &mut self.streams {
            stream.reset()?;
        }
        self.index = 0;
        Ok(())
    }
}

/// Drain a stream into a vector, leaving the stream exhausted.
pub fn collect<T>(stream: &mut dyn ObjectStream<T>) -> Result<Vec<T>> {
    let mut items = Vec::new();
    while let Some(item) = stream.read()? {
        items.push(item);
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_stream_read_and_reset() {
        let mut stream = VecObjectStream::new(vec!["a", "b"]);
        assert_eq!(stream.read().unwrap(), Some("a"));
        assert_eq!(stream.read().unwrap(), Some("b"));
        assert_eq!(stream.read().unwrap(), None);
        assert_eq!(stream.read().unwrap(), None);

        stream.reset().unwrap();
        assert_eq!(stream.read().unwrap(), Some("a"));
    }

    #[test]
    fn test_object_stream_from_iterator() {
        let mut stream = object_stream(0..3);
        assert_eq!(collect(&mut stream).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn test_concatenated_stream() {
        let first = VecObjectStream::new(vec![1, 2]);
        let second = VecObjectStream::new(vec![]);
        let third = VecObjectStream::new(vec![3]);
        let mut stream =
            ConcatenatedObjectStream::new(vec![Box::new(first), Box::new(second), Box::new(third)]);

        assert_eq!(collect(&mut stream).unwrap(), vec![1, 2, 3]);
        assert_eq!(stream.read().unwrap(), None);

        stream.reset().unwrap();
        assert_eq!(collect(&mut stream).unwrap(), vec![1, 2, 3]);
    }
}
