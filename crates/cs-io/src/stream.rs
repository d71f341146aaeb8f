//! Reading whole streams into memory.

use std::future::Future;
use std::io::{self, Read};

use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::trace;

/// Whole-stream reads for blocking readers.
pub trait StreamExt {
    /// Read from the current position to the end.
    ///
    /// # Errors
    /// Propagates the reader's I/O error.
    fn read_to_byte_array(&mut self) -> io::Result<Vec<u8>>;
}

impl<R: Read + ?Sized> StreamExt for R {
    fn read_to_byte_array(&mut self) -> io::Result<Vec<u8>> {
        let mut buffer = Vec::new();
        let read = Read::read_to_end(self, &mut buffer)?;
        trace!(bytes = read, "stream read to end");
        Ok(buffer)
    }
}

/// Whole-stream reads for tokio readers.
pub trait AsyncStreamExt {
    /// Read from the current position to the end.
    ///
    /// # Errors
    /// Propagates the reader's I/O error.
    fn read_to_byte_array_async(&mut self) -> impl Future<Output = io::Result<Vec<u8>>> + Send
    where
        Self: Send;
}

impl<R: AsyncRead + Unpin> AsyncStreamExt for R {
    fn read_to_byte_array_async(&mut self) -> impl Future<Output = io::Result<Vec<u8>>> + Send
    where
        Self: Send,
    {
        async move {
            let mut buffer = Vec::new();
            let read = AsyncReadExt::read_to_end(self, &mut buffer).await?;
            trace!(bytes = read, "async stream read to end");
            Ok(buffer)
        }
    }
}
