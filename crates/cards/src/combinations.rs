// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Binomial coefficients and k-subsets iteration.

/// The largest subset size supported.
pub const MAX_K: usize = 7;

/// Creates table for nck(n, k) for n <= 52 and k <= 7.
const fn make_nck() -> [[u64; MAX_K + 1]; 53] {
    let mut t = [[0u64; MAX_K + 1]; 53];
    let mut n = 0;

    while n <= 52 {
        // base case nck(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n {
            // nck(n, k) = nck(n-1, k-1) + nck(n-1, k)
            t[n][k] = t[n - 1][k - 1] + t[n - 1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

const NCKS: [[u64; MAX_K + 1]; 53] = make_nck();

/// Returns the binomial coefficient for n choose k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn nck(n: usize, k: usize) -> u64 {
    assert!(n <= 52, "n={n} must be 0 <= n <= 52");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");
    NCKS[n][k]
}

/// Calls the given closure for each k-subset of the indices `0..n`.
///
/// Subsets are visited once each in colex order, every subset is passed as a
/// sorted slice of k positions. Panics if k is not 1 <= k <= 7.
pub fn for_each_ksubset<F>(n: usize, k: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!((1..=MAX_K).contains(&k), "k={k} must be 1 <= k <= {MAX_K}");

    if k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] is the current subset with the
    // sentinels c[k + 1] = n and c[k + 2] = 0.
    let mut c = [0usize; MAX_K + 3];
    for (j, slot) in c.iter_mut().enumerate().take(k + 1).skip(1) {
        *slot = j - 1;
    }

    c[k + 1] = n;
    c[k + 2] = 0;

    loop {
        f(&c[1..=k]);

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}
