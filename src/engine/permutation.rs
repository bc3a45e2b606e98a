use rand::Rng;

use super::Position;

/// Produce a uniformly random reordering of the given positions.
///
/// Classic Fisher-Yates over indices N-1 down to 1, drawing j in [0, i]
/// and swapping, so each of the N! orderings is equally likely given a
/// uniform source. A seat may land on its own original position; that is
/// accepted behavior, not a bug.
pub fn shuffle_positions<R: Rng>(rng: &mut R, positions: &[Position]) -> Vec<Position> {
    let mut shuffled = positions.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
