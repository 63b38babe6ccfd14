// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// A running tally of linked nodes, bumped on every link and unlink.
pub(crate) trait Counter: Default {
    fn inc(&mut self) -> usize;
    fn dec(&mut self) -> usize;
    fn count(&self) -> usize;
}

impl Counter for usize {
    /// Returns the count after incrementing.
    #[inline(always)]
    fn inc(&mut self) -> usize {
        *self += 1;
        *self
    }

    /// Returns the count after decrementing.
    #[inline(always)]
    fn dec(&mut self) -> usize {
        debug_assert!(*self > 0, "unlinked a node from an empty chain");
        *self -= 1;
        *self
    }

    #[inline(always)]
    fn count(&self) -> usize {
        *self
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn inc_and_dec_report_new_count() {
        let mut count: usize = Default::default();
        assert_eq!(1, count.inc());
        assert_eq!(2, count.inc());
        assert_eq!(1, count.dec());
        assert_eq!(1, count.count());
    }
}
