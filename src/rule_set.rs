/// Rules of Conway's Game of Life.
pub const B3S23: RuleSet = RuleSet::new(0b1000, 0b1100);

/// # Representation
/// Life rules are represented as
/// ```notrust
/// |------birth------|
/// 0000_0000_0000_0000_0000_0000_0000_0000
///                     |----survival-----|
/// ```
///
/// # Examples
/// ```notrust
/// b3s23:                0000_0000_0000_1000_0000_0000_0000_1100
/// ```
///
/// Only [`B3S23`] is exposed.
///
/// See: https://conwaylife.com/wiki/Rulestring
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleSet {
    rule: u32,
}

impl Default for RuleSet {
    fn default() -> Self {
        B3S23
    }
}

impl RuleSet {
    /// For both `b` and `s`, bit `i` set means `i` neighbors are included in the set of births
    /// (resp. survivals). Any bit past the 8th is ignored.
    const fn new(b: u16, s: u16) -> Self {
        let b = b & 0x1FF;
        let s = s & 0x1FF;

        Self {
            rule: ((b as u32) << 16) | s as u32,
        }
    }

    pub fn births(&self) -> u16 {
        ((self.rule & 0x1FF0000) >> 0x10) as u16
    }

    pub fn survivals(&self) -> u16 {
        (self.rule & 0x1FF) as u16
    }

    /// State of a cell in the next generation, given its current state and how many of its 8
    /// neighbors are alive.
    #[inline]
    pub fn next(&self, alive: bool, neighbors: u8) -> bool {
        // more than 8 neighbors is impossible on a Moore neighborhood
        if neighbors > 8 {
            return false;
        }

        let n = 1u16 << neighbors;

        if alive {
            self.survivals() & n == n
        } else {
            self.births() & n == n
        }
    }
}

#[cfg(test)]
mod test {
    use super::B3S23;

    #[test]
    fn masks() {
        assert_eq!(B3S23.births(), 0b1000);
        assert_eq!(B3S23.survivals(), 0b1100);
    }

    #[test]
    fn survival() {
        for n in 0..=8 {
            assert_eq!(B3S23.next(true, n), n == 2 || n == 3, "live cell, {n} neighbors");
        }
    }

    #[test]
    fn birth() {
        for n in 0..=8 {
            assert_eq!(B3S23.next(false, n), n == 3, "dead cell, {n} neighbors");
        }
    }

    #[test]
    fn too_many_neighbors() {
        assert!(!B3S23.next(true, 9));
        assert!(!B3S23.next(false, 200));
    }
}
