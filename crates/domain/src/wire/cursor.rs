use super::errors::WireError;

/// Bounds-checked forward reader over a DNS message.
#[derive(Debug, Clone)]
pub struct WireReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Starts reading at `pos`. Positions past the end are clamped so that
    /// every subsequent read fails.
    pub fn at(buf: &'a [u8], pos: usize) -> Self {
        Self {
            buf,
            pos: pos.min(buf.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub fn peek_u8(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    pub fn read_u8(&mut self) -> Result<u8, WireError> {
        let byte = self
            .peek_u8()
            .ok_or(WireError::MalformedInput("unexpected end of message"))?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_u16(&mut self) -> Result<u16, WireError> {
        let bytes = self.read_bytes(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&'a [u8], WireError> {
        if len > self.remaining() {
            return Err(WireError::MalformedInput("unexpected end of message"));
        }
        let bytes = &self.buf[self.pos..self.pos + len];
        self.pos += len;
        Ok(bytes)
    }

    /// Reads up to `len` bytes, stopping early at the end of the buffer.
    pub fn read_up_to(&mut self, len: usize) -> &'a [u8] {
        let take = len.min(self.remaining());
        let bytes = &self.buf[self.pos..self.pos + take];
        self.pos += take;
        bytes
    }

    pub fn skip(&mut self, len: usize) -> Result<(), WireError> {
        self.read_bytes(len).map(|_| ())
    }
}

/// Bounds-checked forward writer into a caller-supplied buffer.
///
/// A write that does not fit fails with [`WireError::EncodeOverflow`] and
/// leaves the buffer unchanged.
#[derive(Debug)]
pub struct WireWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> WireWriter<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Fails unless `len` more bytes fit after the current position.
    pub fn ensure(&self, len: usize) -> Result<(), WireError> {
        let needed = self.pos + len;
        if needed > self.buf.len() {
            return Err(WireError::EncodeOverflow {
                needed,
                capacity: self.buf.len(),
            });
        }
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), WireError> {
        self.write_bytes(&[value])
    }

    pub fn write_u16(&mut self, value: u16) -> Result<(), WireError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_u32(&mut self, value: u32) -> Result<(), WireError> {
        self.write_bytes(&value.to_be_bytes())
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), WireError> {
        self.ensure(bytes.len())?;
        self.buf[self.pos..self.pos + bytes.len()].copy_from_slice(bytes);
        self.pos += bytes.len();
        Ok(())
    }

    /// Number of bytes written so far.
    pub fn finish(self) -> usize {
        self.pos
    }
}
