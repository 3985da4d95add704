use rand::Rng;

/// Sample a boolean outcome that is true with the given probability.
/// Probabilities at or below 0.0 never fire; 1.0 or more always fires.
pub fn chance(probability: f64, rng: &mut impl Rng) -> bool {
    rng.gen::<f64>() < probability
}

/// Split a stack into a front block of floor(len / 2) items and a back block
/// holding the remainder, preserving order. The back block carries the extra
/// item when the count is odd.
pub fn split_front_back<T>(items: Vec<T>) -> (Vec<T>, Vec<T>) {
    let mut front = items;
    let back = front.split_off(front.len() / 2);
    (front, back)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn test_chance_extremes() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..100 {
            assert!(!chance(0.0, &mut rng));
            assert!(chance(1.0, &mut rng));
        }
    }

    #[test]
    fn test_split_front_back() {
        let (front, back) = split_front_back(vec![1, 2, 3, 4, 5]);
        assert_eq!(front, vec![1, 2]);
        assert_eq!(back, vec![3, 4, 5]);

        let (front, back) = split_front_back(vec![1, 2, 3, 4]);
        assert_eq!(front, vec![1, 2]);
        assert_eq!(back, vec![3, 4]);

        let (front, back) = split_front_back(vec![7]);
        assert!(front.is_empty());
        assert_eq!(back, vec![7]);

        let (front, back) = split_front_back(Vec::<i32>::new());
        assert!(front.is_empty());
        assert!(back.is_empty());
    }
}
