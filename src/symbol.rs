use std::fmt;

/// An integer code identifying one character of the alphabet.
pub type Symbol = u32;

/// A single bit, always `0` or `1`.
pub type Bit = u8;

/// Size of the natural byte alphabet.
pub const BYTE_ALPHABET: usize = 256;

/// A root-to-leaf path: `0` means "went left", `1` means "went right".
///
/// Displays as the persisted text form, e.g. `"0110"`. The empty code is the
/// valid path of the lone symbol in a single-leaf tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    bits: Vec<Bit>,
}

impl Code {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Returns this code extended by one branch choice.
    pub(crate) fn child(&self, bit: Bit) -> Self {
        debug_assert!(bit <= 1, "bit must be 0 or 1");
        let mut bits = Vec::with_capacity(self.bits.len() + 1);
        bits.extend_from_slice(&self.bits);
        bits.push(bit);
        Self { bits }
    }

    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a (non-strict) prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl FromIterator<Bit> for Code {
    fn from_iter<I: IntoIterator<Item = Bit>>(iter: I) -> Self {
        Self {
            bits: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in &self.bits {
            f.write_str(if bit == 0 { "0" } else { "1" })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let code: Code = vec![0, 1, 1, 0].into_iter().collect();
        assert_eq!(code.to_string(), "0110");
        assert_eq!(Code::new().to_string(), "");
    }

    #[test]
    fn test_child_extends() {
        let root = Code::new();
        let left = root.child(0);
        let left_right = left.child(1);
        assert_eq!(left_right.bits(), &[0, 1]);
        assert_eq!(left_right.len(), 2);
        assert!(root.is_empty());
    }

    #[test]
    fn test_prefix() {
        let a: Code = vec![0, 1].into_iter().collect();
        let b: Code = vec![0, 1, 1].into_iter().collect();
        let c: Code = vec![1].into_iter().collect();

        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
        assert!(!c.is_prefix_of(&b));
        assert!(Code::new().is_prefix_of(&c));
    }
}
