/// Fixed-capacity text accumulator. An append either fits in full or is refused;
/// the buffer never grows past `capacity` bytes.
#[derive(Debug, Clone)]
pub struct BoundedText {
    buf: String,
    capacity: usize,
}

impl BoundedText {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: String::new(),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.buf.len()
    }

    /// Append `text` if it fits in the remaining space. Returns `false` and
    /// leaves the buffer untouched otherwise.
    pub fn try_append(&mut self, text: &str) -> bool {
        if text.len() > self.remaining() {
            return false;
        }
        self.buf.push_str(text);
        true
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}
