use std::io::{self, Read};

const BLOCK_SIZE: usize = 8 * 1024; // 8KB

/// Reads a stream in blocks and hands it out one byte at a time.
///
/// A read error is yielded once; the iterator is finished after it.
pub struct BlockIterator<R: Read> {
    reader: R,
    block: Vec<u8>,
    pos: usize,
    done: bool,
}

impl<R: Read> BlockIterator<R> {
    pub fn new(reader: R) -> Self {
        BlockIterator {
            reader,
            block: Vec::new(),
            pos: 0,
            done: false,
        }
    }

    fn refill(&mut self) -> io::Result<usize> {
        self.block.resize(BLOCK_SIZE, 0);
        self.pos = 0;
        loop {
            match self.reader.read(&mut self.block) {
                Ok(n) => {
                    self.block.truncate(n);
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.block.clear();
                    return Err(e);
                }
            }
        }
    }
}

impl<R: Read> Iterator for BlockIterator<R> {
    type Item = io::Result<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.pos == self.block.len() {
            match self.refill() {
                Ok(0) => {
                    self.done = true;
                    return None; // End of stream
                }
                Ok(_) => {}
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
        let byte = self.block[self.pos];
        self.pos += 1;
        Some(Ok(byte))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    struct FailingReader {
        served: bool,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.served {
                return Err(io::Error::new(io::ErrorKind::Other, "device unplugged"));
            }
            self.served = true;
            buf[0] = b'7';
            Ok(1)
        }
    }

    #[test]
    fn test_bytes_across_blocks() {
        let data: Vec<u8> = (0..BLOCK_SIZE * 2 + 3).map(|i| (i % 251) as u8).collect();
        let read: Vec<u8> = BlockIterator::new(Cursor::new(data.clone()))
            .collect::<io::Result<_>>()
            .unwrap();
        assert_eq!(read, data);
    }

    #[test]
    fn test_empty_stream() {
        let mut it = BlockIterator::new(Cursor::new(Vec::new()));
        assert!(it.next().is_none());
        assert!(it.next().is_none());
    }

    #[test]
    fn test_error_yielded_once() {
        let mut it = BlockIterator::new(FailingReader { served: false });
        assert_eq!(it.next().unwrap().unwrap(), b'7');
        assert!(it.next().unwrap().is_err());
        assert!(it.next().is_none());
    }
}
