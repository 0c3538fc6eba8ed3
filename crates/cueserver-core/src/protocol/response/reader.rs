pub struct ResponseReader<'a> {
    payload: &'a [u8],
}

impl<'a> ResponseReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn read_u8(&self, offset: usize) -> u8 {
        self.check_window(offset, offset + 1);
        self.payload[offset]
    }

    /// Reconstructs a 16-bit value stored little-endian at `offset`.
    pub fn read_u16_le(&self, offset: usize) -> u16 {
        self.check_window(offset, offset + 2);
        u16::from_le_bytes([self.payload[offset], self.payload[offset + 1]])
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> &'a [u8] {
        self.check_window(range.start, range.end);
        &self.payload[range]
    }

    /// Extracts a fixed-width ASCII field.
    ///
    /// Scans exactly the window given by `range`, appending every non-zero
    /// byte as an ASCII character. A zero byte is skipped, not a terminator:
    /// device strings may carry non-trailing padding, so all non-zero bytes
    /// in the window are concatenated in order. The next unconsumed offset
    /// is `range.end`.
    pub fn read_ascii_field(&self, range: std::ops::Range<usize>) -> String {
        self.read_slice(range)
            .iter()
            .filter(|&&byte| byte != 0)
            .map(|&byte| byte as char)
            .collect()
    }

    /// Window validity: `start <= end`, `start < len`, `end <= len`
    /// (exclusive end). A violation is a layout bug, not a device fault,
    /// and panics immediately.
    fn check_window(&self, start: usize, end: usize) {
        assert!(
            start <= end,
            "window start {start} is past its end {end}"
        );
        assert!(
            start < self.payload.len(),
            "window start {start} is outside the {} byte payload",
            self.payload.len()
        );
        assert!(
            end <= self.payload.len(),
            "window end {end} is outside the {} byte payload",
            self.payload.len()
        );
    }
}
