use rayon::prelude::*;

use crate::constants::COMPOSITION_CHUNK_SIZE;

/// Tally of recognized bases in a sequence.
///
/// # Examples
///
/// ```rust
/// use pcrsim_core::sequence::BaseComposition;
///
/// let counts = BaseComposition::count(b"AACGTtn");
/// assert_eq!(counts.a, 2);
/// assert_eq!(counts.t, 2);
/// assert_eq!(counts.total(), 6);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BaseComposition {
    pub a: usize,
    pub c: usize,
    pub g: usize,
    pub t: usize,
}

impl BaseComposition {
    /// Counts A, C, G and T (case-insensitive), in parallel for long input.
    #[must_use]
    pub fn count(sequence: &[u8]) -> Self {
        if sequence.len() <= COMPOSITION_CHUNK_SIZE {
            return Self::count_serial(sequence);
        }
        sequence
            .par_chunks(COMPOSITION_CHUNK_SIZE)
            .map(Self::count_serial)
            .reduce(Self::default, Self::merge)
    }

    /// Counts the bases on every line that is not a header.
    ///
    /// A line containing `>` is treated as a FASTA-style header and skipped
    /// as a whole.
    #[must_use]
    pub fn count_plain_text(text: &[u8]) -> Self {
        let lines: Vec<&[u8]> = text
            .split(|&byte| byte == b'\n')
            .filter(|line| !line.contains(&b'>'))
            .collect();
        lines
            .par_iter()
            .map(|line| Self::count(line))
            .reduce(Self::default, Self::merge)
    }

    fn count_serial(chunk: &[u8]) -> Self {
        let mut counts = Self::default();
        for &byte in chunk {
            match byte.to_ascii_uppercase() {
                b'A' => counts.a += 1,
                b'C' => counts.c += 1,
                b'G' => counts.g += 1,
                b'T' => counts.t += 1,
                _ => {}
            }
        }
        counts
    }

    /// Sums two tallies
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            a: self.a + other.a,
            c: self.c + other.c,
            g: self.g + other.g,
            t: self.t + other.t,
        }
    }

    /// Number of recognized bases
    #[must_use]
    pub const fn total(&self) -> usize {
        self.a + self.c + self.g + self.t
    }

    /// Number of G and C bases
    #[must_use]
    pub const fn gc(&self) -> usize {
        self.g + self.c
    }
}
