/// `n!` is exact in a `u64` for `n < FACTORIAL_LIMIT`
pub(crate) const FACTORIAL_LIMIT: usize = 21;
pub(crate) const FACTORIALS: [u64; FACTORIAL_LIMIT] = {
    let mut facts = [1u64; FACTORIAL_LIMIT];
    let mut i = 1;
    while i < FACTORIAL_LIMIT {
        facts[i] = facts[i - 1] * (i as u64);
        i += 1;
    }
    facts
};

/// `n!` from the table; `None` once it no longer fits a `u64`
pub(crate) fn factorial(n: usize) -> Option<u64> {
    FACTORIALS.get(n).copied()
}

/// Advance `items` to the next lexicographic permutation
///
/// Returns `false` (leaving `items` untouched) once the last permutation has
/// been reached. Starting from sorted input visits every permutation once.
pub(crate) fn next_permutation<T: Ord>(items: &mut [T]) -> bool {
    if items.len() < 2 {
        return false;
    }

    let mut pivot = items.len() - 1;
    while pivot > 0 && items[pivot - 1] >= items[pivot] {
        pivot -= 1;
    }
    if pivot == 0 {
        return false;
    }

    let mut successor = items.len() - 1;
    while items[successor] <= items[pivot - 1] {
        successor -= 1;
    }
    items.swap(pivot - 1, successor);
    items[pivot..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_factorial() {
        assert_eq!(factorial(0), Some(1));
        assert_eq!(factorial(5), Some(120));
        assert_eq!(factorial(10), Some(3_628_800));
        assert_eq!(factorial(20), Some(2_432_902_008_176_640_000));
        assert_eq!(factorial(FACTORIAL_LIMIT), None);
    }

    #[test]
    fn test_next_permutation_visits_all() {
        let mut items = vec![0, 1, 2, 3];
        let mut seen = HashSet::new();
        seen.insert(items.clone());
        while next_permutation(&mut items) {
            assert!(seen.insert(items.clone()), "repeated {items:?}");
        }
        assert_eq!(seen.len(), 24);
        assert_eq!(items, vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_next_permutation_small_inputs() {
        let mut empty: Vec<usize> = vec![];
        assert!(!next_permutation(&mut empty));

        let mut single = vec![7];
        assert!(!next_permutation(&mut single));

        let mut pair = vec![1, 2];
        assert!(next_permutation(&mut pair));
        assert_eq!(pair, vec![2, 1]);
        assert!(!next_permutation(&mut pair));
    }
}
