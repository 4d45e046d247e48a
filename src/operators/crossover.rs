//! # Crossover
//!
//! Uniform crossover over the shared prefix of two parents, followed by the
//! unshared tail of the longer one. The offspring is always as long as the
//! longer parent.

use crate::{candidate::Candidate, rng::UniformSource};

/// Combines two parents into one offspring.
///
/// Each position of the shorter parent takes either its own character or the
/// longer parent's with equal probability. When both parents have the same
/// length, `b` plays the shorter parent.
///
/// ```rust
/// use mustrings::candidate::Candidate;
/// use mustrings::operators::crossover;
/// use mustrings::rng::RandomNumberGenerator;
///
/// let mut rng = RandomNumberGenerator::from_seed(3);
/// let child = crossover(&Candidate::from("AB"), &Candidate::from("CDEF"), &mut rng);
/// assert_eq!(child.len(), 4);
/// assert_eq!(&child.chars()[2..], &['E', 'F']);
/// ```
pub fn crossover<R: UniformSource + ?Sized>(
    a: &Candidate,
    b: &Candidate,
    rng: &mut R,
) -> Candidate {
    let (short, long) = if a.len() < b.len() { (a, b) } else { (b, a) };

    let mut child = Vec::with_capacity(long.len());
    for (s, l) in short.chars().iter().zip(long.chars()) {
        child.push(if 0.5 > rng.next_uniform() { *s } else { *l });
    }
    child.extend_from_slice(&long.chars()[short.len()..]);

    Candidate::new(child)
}
