/// Wrap-around index arithmetic for a ring of `len` vertices.
///
/// Edge `i` connects vertex `i` to `next(i)`. All methods assume `len > 0`
/// and `i < len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingIndex {
    pub len: usize,
}

impl RingIndex {
    #[inline]
    pub fn new(len: usize) -> Self {
        Self { len }
    }
    #[inline]
    pub fn next(&self, i: usize) -> usize {
        if i + 1 >= self.len {
            0
        } else {
            i + 1
        }
    }
    #[inline]
    pub fn prev(&self, i: usize) -> usize {
        if i == 0 {
            self.len - 1
        } else {
            i - 1
        }
    }
    #[inline]
    pub fn add(&self, i: usize, k: usize) -> usize {
        (i + k % self.len) % self.len
    }
    #[inline]
    pub fn sub(&self, i: usize, k: usize) -> usize {
        (i + self.len - k % self.len) % self.len
    }
}
