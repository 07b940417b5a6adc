use rand::Rng;

/// Picks one item of `source` uniformly at random in a single pass, or `None` if it is empty.
pub fn reservoir_sample_one<T, I: Iterator<Item = T>, R: Rng>(rng: &mut R, mut source: I) -> Option<T> {
    let mut chosen = source.next()?;

    for (seen, sample) in (2usize..).zip(source) {
        if rng.gen_range(0..seen) == 0 {
            chosen = sample;
        }
    }

    Some(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn empty_source_yields_nothing() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert_eq!(reservoir_sample_one(&mut rng, std::iter::empty::<u8>()), None);
    }

    #[test]
    fn single_item_is_always_chosen() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(0);
        assert_eq!(reservoir_sample_one(&mut rng, std::iter::once(9)), Some(9));
    }

    #[test]
    fn every_item_gets_picked_eventually() {
        let mut rng = Xoshiro256StarStar::seed_from_u64(42);
        let mut counts = [0usize; 4];

        for _ in 0..4000 {
            let picked = reservoir_sample_one(&mut rng, 0..4usize).unwrap();
            counts[picked] += 1;
        }

        assert!(counts.iter().all(|&count| (800..1200).contains(&count)), "{counts:?}");
    }
}
