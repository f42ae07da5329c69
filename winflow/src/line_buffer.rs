//! Rolling line buffer: the last `depth` rows for every horizontal position.

use crate::config::Sample;

/// Fixed-size column-stack storage.
///
/// Column `x` occupies one contiguous `depth`-sample slice; slot 0 is the oldest retained row and
/// slot `depth - 1` the newest. Capacity is fixed at construction and never reallocated.
#[derive(Debug)]
pub(crate) struct LineBuffer {
    depth: usize,
    data: Box<[Sample]>,
}

impl LineBuffer {
    pub(crate) fn new(width: usize, depth: usize) -> Self {
        Self { depth, data: vec![0; width * depth].into_boxed_slice() }
    }

    /// Overwrites one slot of the column stack at `x`.
    pub(crate) fn write_slot(&mut self, x: usize, slot: usize, sample: Sample) {
        self.data[x * self.depth + slot] = sample;
    }

    /// Copies slot `slot + 1` into `slot`: one restore step of the rolling shift.
    ///
    /// Walking `slot` over `0..depth - 1` drops the oldest row and frees the newest slot.
    pub(crate) fn shift_slot(&mut self, x: usize, slot: usize) {
        let base = x * self.depth;
        self.data[base + slot] = self.data[base + slot + 1];
    }

    /// The full column stack at `x`.
    pub(crate) fn column(&self, x: usize) -> &[Sample] {
        let base = x * self.depth;
        &self.data[base..base + self.depth]
    }

    pub(crate) fn clear(&mut self) { self.data.fill(0); }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let buf = LineBuffer::new(3, 2);
        assert_eq!(buf.column(0), [0, 0]);
        assert_eq!(buf.column(2), [0, 0]);
    }

    #[test]
    fn slot_writes_are_independent_per_column() {
        let mut buf = LineBuffer::new(2, 3);
        buf.write_slot(0, 0, 1);
        buf.write_slot(0, 2, 3);
        buf.write_slot(1, 1, 7);
        assert_eq!(buf.column(0), [1, 0, 3]);
        assert_eq!(buf.column(1), [0, 7, 0]);
    }

    #[test]
    fn shift_drops_oldest() {
        let mut buf = LineBuffer::new(1, 3);
        for (slot, v) in [10, 20, 30].into_iter().enumerate() {
            buf.write_slot(0, slot, v);
        }
        buf.shift_slot(0, 0);
        buf.shift_slot(0, 1);
        buf.write_slot(0, 2, 40);
        assert_eq!(buf.column(0), [20, 30, 40]);
    }

    #[test]
    fn clear_restores_initial_state() {
        let mut buf = LineBuffer::new(2, 2);
        buf.write_slot(1, 1, 9);
        buf.clear();
        assert_eq!(buf.column(1), [0, 0]);
    }
}
