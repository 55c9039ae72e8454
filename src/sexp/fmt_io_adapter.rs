//! Use a fmt::Write as an io::Write.
//!
//! Node::write_text is generic over io::Write, but fmt::Display hands out a
//! fmt::Write. This adapter lets Display reuse the io-based serializer.

use std::str::from_utf8;
use std::{fmt, io};


pub struct FmtIoAdapter<'a, F: fmt::Write> {
    fmt_writer: &'a mut F,
}

impl<'a, F: fmt::Write> FmtIoAdapter<'a, F> {
    pub fn new(fmt_writer: &'a mut F) -> Self {
        Self { fmt_writer }
    }
}


impl<'a, F: fmt::Write> io::Write for FmtIoAdapter<'a, F> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        // fmt::Write only takes UTF-8, while io::Write is a byte-oriented sink.
        let utf = from_utf8(bytes).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;

        match self.fmt_writer.write_str(utf) {
            Ok(()) => Ok(utf.len()),
            Err(err) => Err(io::Error::new(io::ErrorKind::Other, err)),
        }
    }

    // Nothing is buffered here.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
