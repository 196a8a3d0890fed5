//! Endpoint sampling.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::MAX_DROP;
use crate::domain::{Endpoint, EndpointCatalog};

/// Shuffle the whole catalog, then drop `0..=MAX_DROP` entries from the front.
///
/// The catalog itself is never reordered; sampling works on a copy. The
/// result has between `len - MAX_DROP` and `len` entries, and is empty when
/// the drop count reaches the catalog size.
pub fn select_endpoints<R: Rng + ?Sized>(catalog: &EndpointCatalog, rng: &mut R) -> Vec<Endpoint> {
    let mut shuffled = catalog.entries().to_vec();
    shuffled.shuffle(rng);

    let drop = rng.gen_range(0..=MAX_DROP);
    shuffled.into_iter().skip(drop).collect()
}
