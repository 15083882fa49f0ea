/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */
use crate::bytestream::{ByteIoError, ByteReaderTrait};

/// An in memory byte source.
///
/// This does not own the bytes unless `T` does, it only tracks
/// a read position into them. The position never goes past the end
/// of the buffer, reads that would do so fail instead.
pub struct ByteCursor<T: AsRef<[u8]>> {
    stream:   T,
    position: usize
}

impl<T: AsRef<[u8]>> ByteCursor<T> {
    pub fn new(buffer: T) -> ByteCursor<T> {
        ByteCursor {
            stream:   buffer,
            position: 0
        }
    }

    /// Return the underlying buffer
    pub fn into_inner(self) -> T {
        self.stream
    }

    #[inline(always)]
    fn remaining_slice(&self) -> &[u8] {
        // position is kept <= len by every read
        &self.stream.as_ref()[self.position..]
    }
}

impl<T: AsRef<[u8]>> ByteReaderTrait for ByteCursor<T> {
    #[inline(always)]
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining_slice();

        match remaining.get(..buf.len()) {
            Some(bytes) => {
                buf.copy_from_slice(bytes);
                self.position += buf.len();
                Ok(())
            }
            None => Err(ByteIoError::NotEnoughBytes(buf.len(), remaining.len()))
        }
    }

    #[inline(always)]
    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        let remaining = self.remaining_slice();

        if let Some(bytes) = remaining.first_chunk::<N>() {
            buf.copy_from_slice(bytes);
            self.position += N;
            return Ok(());
        }
        Err(ByteIoError::NotEnoughBytes(N, remaining.len()))
    }

    #[inline]
    fn skip_bytes(&mut self, num: usize) -> Result<(), ByteIoError> {
        let remaining = self.remaining_bytes();

        if num > remaining {
            return Err(ByteIoError::NotEnoughBytes(num, remaining));
        }
        self.position += num;
        Ok(())
    }

    #[inline(always)]
    fn remaining_bytes(&self) -> usize {
        self.stream.as_ref().len() - self.position
    }

    #[inline(always)]
    fn z_position(&self) -> u64 {
        self.position as u64
    }
}

#[cfg(feature = "std")]
impl<T: AsRef<[u8]>> ByteReaderTrait for std::io::Cursor<T> {
    fn read_exact_bytes(&mut self, buf: &mut [u8]) -> Result<(), ByteIoError> {
        let remaining = self.remaining_bytes();
        if buf.len() > remaining {
            return Err(ByteIoError::NotEnoughBytes(buf.len(), remaining));
        }
        std::io::Read::read_exact(self, buf).map_err(ByteIoError::from)
    }

    fn read_const_bytes<const N: usize>(&mut self, buf: &mut [u8; N]) -> Result<(), ByteIoError> {
        self.read_exact_bytes(buf)
    }

    fn skip_bytes(&mut self, num: usize) -> Result<(), ByteIoError> {
        let remaining = self.remaining_bytes();
        if num > remaining {
            return Err(ByteIoError::NotEnoughBytes(num, remaining));
        }
        self.set_position(self.position() + num as u64);
        Ok(())
    }

    fn remaining_bytes(&self) -> usize {
        let len = self.get_ref().as_ref().len();
        len.saturating_sub(usize::try_from(self.position()).unwrap_or(usize::MAX))
    }

    fn z_position(&self) -> u64 {
        self.position()
    }
}

#[cfg(test)]
mod tests {
    use crate::bytestream::{ByteCursor, ByteIoError, ByteReaderTrait};

    #[test]
    fn failed_read_keeps_position() {
        let mut cursor = ByteCursor::new([1_u8, 2, 3]);
        let mut buf = [0; 4];

        assert!(matches!(
            cursor.read_exact_bytes(&mut buf),
            Err(ByteIoError::NotEnoughBytes(4, 3))
        ));
        assert_eq!(cursor.z_position(), 0);

        let mut buf = [0; 3];
        cursor.read_const_bytes(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert_eq!(cursor.remaining_bytes(), 0);
    }

    #[test]
    fn skip_past_end_fails() {
        let mut cursor = ByteCursor::new([0_u8; 10]);
        cursor.skip_bytes(10).unwrap();
        assert!(cursor.skip_bytes(1).is_err());
        assert_eq!(cursor.z_position(), 10);
    }

    #[cfg(feature = "std")]
    #[test]
    fn std_cursor_reads() {
        let mut cursor = std::io::Cursor::new(vec![7_u8, 8, 9]);
        let mut buf = [0; 2];
        cursor.skip_bytes(1).unwrap();
        cursor.read_const_bytes(&mut buf).unwrap();
        assert_eq!(buf, [8, 9]);
        assert!(cursor.read_const_bytes(&mut buf).is_err());
    }
}
