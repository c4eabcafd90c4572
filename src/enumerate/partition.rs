//! Deck partition enumeration.
//!
//! Enumerates every way to draw disjoint groups of fixed sizes out of `n`
//! deck positions. Group `g` picks a combination from the positions the
//! earlier groups left free, so the number of partitions is the multinomial
//! `n! / (k0! k1! ... (n - Σk)!)`.
//!
//! Masks are over deck positions, not card ids; `Deck::peek` maps them to
//! cards.

/// Iterator state over disjoint position groups.
#[derive(Debug, Clone)]
pub struct PartitionEnumerator {
    sizes: Vec<usize>,
    /// Per group: positions not taken by earlier groups.
    free: Vec<Vec<usize>>,
    /// Per group: ascending indices into `free[g]`.
    combos: Vec<Vec<usize>>,
    masks: Vec<u64>,
    done: bool,
}

impl PartitionEnumerator {
    /// Create an enumerator positioned on the first partition.
    ///
    /// If the group sizes need more than `n` positions there are no
    /// partitions and the enumerator starts out done.
    pub fn new(n: usize, sizes: &[usize]) -> Self {
        let mut pe = Self {
            sizes: Vec::new(),
            free: Vec::new(),
            combos: Vec::new(),
            masks: Vec::new(),
            done: true,
        };
        pe.reset(n, sizes);
        pe
    }

    /// Restart on a new deck size and group layout, reusing the buffers.
    pub fn reset(&mut self, n: usize, sizes: &[usize]) {
        debug_assert!(n <= 64, "positions must fit a u64 mask");
        let groups = sizes.len();
        self.sizes.clear();
        self.sizes.extend_from_slice(sizes);
        self.free.resize_with(groups, Vec::new);
        self.combos.resize_with(groups, Vec::new);
        self.masks.clear();
        self.masks.resize(groups, 0);
        for (combo, &k) in self.combos.iter_mut().zip(sizes) {
            combo.clear();
            combo.extend(0..k);
        }
        self.done = sizes.iter().sum::<usize>() > n;
        if !self.done && groups > 0 {
            self.free[0].clear();
            self.free[0].extend(0..n);
            self.refresh_from(0);
        }
    }

    /// Number of groups.
    pub fn groups(&self) -> usize {
        self.sizes.len()
    }

    /// True once every partition has been visited.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Position mask of the given group in the current partition.
    #[inline]
    pub fn mask(&self, group: usize) -> u64 {
        self.masks[group]
    }

    /// Advance to the next partition. Returns `false` when exhausted.
    pub fn next(&mut self) -> bool {
        if self.done {
            return false;
        }
        for g in (0..self.sizes.len()).rev() {
            if advance_combination(&mut self.combos[g], self.free[g].len()) {
                self.refresh_from(g);
                return true;
            }
        }
        self.done = true;
        false
    }

    /// Recompute the mask of group `g` and restart every later group on its
    /// first combination of the positions still free.
    fn refresh_from(&mut self, g: usize) {
        self.masks[g] = self.group_mask(g);
        for h in g + 1..self.sizes.len() {
            let taken = self.masks[h - 1];
            let (before, after) = self.free.split_at_mut(h);
            let next = &mut after[0];
            next.clear();
            next.extend(before[h - 1].iter().copied().filter(|&p| taken & (1u64 << p) == 0));

            for (i, c) in self.combos[h].iter_mut().enumerate() {
                *c = i;
            }
            self.masks[h] = self.group_mask(h);
        }
    }

    fn group_mask(&self, g: usize) -> u64 {
        self.combos[g]
            .iter()
            .fold(0u64, |acc, &i| acc | (1u64 << self.free[g][i]))
    }
}

/// Step an ascending k-combination of `0..m` to its lexicographic successor.
fn advance_combination(combo: &mut [usize], m: usize) -> bool {
    let k = combo.len();
    for i in (0..k).rev() {
        if combo[i] < m - k + i {
            combo[i] += 1;
            for j in i + 1..k {
                combo[j] = combo[j - 1] + 1;
            }
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(n: usize, sizes: &[usize]) -> usize {
        let mut pe = PartitionEnumerator::new(n, sizes);
        if pe.is_done() {
            return 0;
        }
        let mut total = 0;
        loop {
            total += 1;
            if !pe.next() {
                break;
            }
        }
        total
    }

    #[test]
    fn test_partition_count_is_multinomial() {
        // C(6,2) * C(4,1) * C(3,3)
        assert_eq!(count(6, &[2, 1, 3]), 60);
        // C(10,2) * C(8,2)
        assert_eq!(count(10, &[2, 2]), 45 * 28);
        // C(48,5)
        assert_eq!(count(48, &[0, 0, 5]), 1_712_304);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert_eq!(count(5, &[0, 0]), 1);
        assert_eq!(count(5, &[]), 1);
        assert_eq!(count(3, &[2, 2]), 0);
    }

    #[test]
    fn test_groups_are_disjoint_and_sized() {
        let sizes = [2, 3, 1];
        let mut pe = PartitionEnumerator::new(8, &sizes);
        let mut seen = std::collections::HashSet::new();
        loop {
            let mut union = 0u64;
            for (g, &k) in sizes.iter().enumerate() {
                let m = pe.mask(g);
                assert_eq!(m.count_ones() as usize, k);
                assert_eq!(union & m, 0);
                assert_eq!(m >> 8, 0);
                union |= m;
            }
            assert!(seen.insert((pe.mask(0), pe.mask(1), pe.mask(2))));
            if !pe.next() {
                break;
            }
        }
        // C(8,2) * C(6,3) * C(3,1)
        assert_eq!(seen.len(), 28 * 20 * 3);
    }

    #[test]
    fn test_reset_reuses_enumerator() {
        let mut pe = PartitionEnumerator::new(3, &[2, 2]);
        assert!(pe.is_done());

        pe.reset(5, &[1, 2]);
        assert!(!pe.is_done());
        let mut total = 1;
        while pe.next() {
            total += 1;
        }
        // C(5,1) * C(4,2)
        assert_eq!(total, 30);

        pe.reset(4, &[0]);
        assert_eq!(pe.groups(), 1);
        assert_eq!(pe.mask(0), 0);
        assert!(!pe.next());
    }

    #[test]
    fn test_combination_successor() {
        let mut c = vec![0, 1];
        assert!(advance_combination(&mut c, 3));
        assert_eq!(c, vec![0, 2]);
        assert!(advance_combination(&mut c, 3));
        assert_eq!(c, vec![1, 2]);
        assert!(!advance_combination(&mut c, 3));
        assert!(!advance_combination(&mut [], 3));
    }
}
