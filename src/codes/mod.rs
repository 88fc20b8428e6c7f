
use itertools::Itertools;

/// Cluster id assigned to each distinct value, by position
pub type Code = Vec<usize>;

/// Every code of length `len` that uses each cluster id in `[0, k)` at least once
///
/// Brute force: walks the full cartesian product `[0, k)^len` and keeps the
/// surjective codes, so the cost is `k^len`. Codes come out in
/// lexicographic order. Returns nothing when `k` is 0 or exceeds `len`.
pub fn surjective_codes(len: usize, k: usize) -> Vec<Code> {
    if k == 0 || k > len {
        return Vec::new();
    }

    (0..len)
        .map(|_| 0..k)
        .multi_cartesian_product()
        .filter(|code| is_surjective(code, k))
        .collect()
}

/// Number of surjective codes of length `len` onto `k` clusters, `k! · S(len, k)`
///
/// Uses `s(n, k) = k · (s(n-1, k) + s(n-1, k-1))` without generating any
/// code. Saturates at `usize::MAX`.
pub fn surjection_count(len: usize, k: usize) -> usize {
    if k > len {
        return 0;
    }

    // row[j] = s(n, j) for the current n
    let mut row = vec![0usize; k + 1];
    row[0] = 1;
    for _ in 0..len {
        for j in (1..=k).rev() {
            row[j] = j.saturating_mul(row[j].saturating_add(row[j - 1]));
        }
        row[0] = 0;
    }
    row[k]
}

/// Whether `code` uses every cluster id in `[0, k)`
pub fn is_surjective(code: &[usize], k: usize) -> bool {
    code.iter().all(|&id| id < k) && code.iter().unique().count() == k
}
