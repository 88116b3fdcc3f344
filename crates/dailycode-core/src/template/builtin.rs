//! Built-in templates.
//!
//! Each generator draws only values its template can run with: strings for
//! the edit-distance template are never empty, sequences and grids always
//! have at least the length the algorithm needs.

use rand::{Rng, RngCore};

use super::Template;
use crate::params::{ParamValue, Params};

/// Returns all built-in templates in selection order.
pub fn builtin_templates() -> Vec<Template> {
    vec![
        fibonacci_iterative(),
        sieve_of_eratosthenes(),
        merge_sort(),
        levenshtein_distance(),
        dijkstra_on_grid(),
    ]
}

fn single(name: &str, value: impl Into<ParamValue>) -> Params {
    let mut params = Params::new();
    params.insert(name.to_string(), value.into());
    params
}

fn random_word(rng: &mut dyn RngCore, alphabet: &str, min_len: usize, max_len: usize) -> String {
    let letters: Vec<char> = alphabet.chars().collect();
    let len = rng.gen_range(min_len..=max_len);
    (0..len)
        .map(|_| letters[rng.gen_range(0..letters.len())])
        .collect()
}

// ============================================================================
// TEMPLATES
// ============================================================================

fn fibonacci_iterative() -> Template {
    Template {
        name: "fibonacci_iterative",
        description: "Compute the first N Fibonacci numbers iteratively.",
        code: r#"
            def fibonacci(n: int) -> list[int]:
                """Return the first n Fibonacci numbers (n>=1)."""
                if n <= 0:
                    return []
                if n == 1:
                    return [0]
                seq = [0, 1]
                for _ in range(2, n):
                    seq.append(seq[-1] + seq[-2])
                return seq

            if __name__ == "__main__":
                N = {N}
                print(f"Fibonacci first {N}: ", fibonacci(N))
        "#,
        params: |rng| single("N", rng.gen_range(8..=20_i64)),
    }
}

fn sieve_of_eratosthenes() -> Template {
    Template {
        name: "sieve_of_eratosthenes",
        description: "Generate primes up to a limit using the Sieve of Eratosthenes.",
        code: r#"
            def primes_up_to(limit: int) -> list[int]:
                """Return all primes <= limit using the sieve."""
                if limit < 2:
                    return []
                sieve = [True] * (limit + 1)
                sieve[0] = sieve[1] = False
                p = 2
                while p * p <= limit:
                    if sieve[p]:
                        for m in range(p * p, limit + 1, p):
                            sieve[m] = False
                    p += 1
                return [i for i, is_prime in enumerate(sieve) if is_prime]

            if __name__ == "__main__":
                LIMIT = {LIMIT}
                print(f"Primes up to {LIMIT}: ", primes_up_to(LIMIT))
        "#,
        params: |rng| single("LIMIT", rng.gen_range(50..=200_i64)),
    }
}

fn merge_sort() -> Template {
    Template {
        name: "merge_sort",
        description: "Stable merge sort implementation with type hints.",
        code: r#"
            from typing import List, TypeVar
            T = TypeVar('T')

            def merge_sort(arr: List[T]) -> List[T]:
                if len(arr) <= 1:
                    return arr[:]
                mid = len(arr) // 2
                left = merge_sort(arr[:mid])
                right = merge_sort(arr[mid:])
                return merge(left, right)

            def merge(left: List[T], right: List[T]) -> List[T]:
                i = j = 0
                out: List[T] = []
                while i < len(left) and j < len(right):
                    if left[i] <= right[j]:
                        out.append(left[i]); i += 1
                    else:
                        out.append(right[j]); j += 1
                out.extend(left[i:]); out.extend(right[j:])
                return out

            if __name__ == "__main__":
                data = {DATA}
                print("Input:", data)
                print("Sorted:", merge_sort(data))
        "#,
        params: |rng| {
            let count = rng.gen_range(8..=14);
            let mut data: Vec<i64> = Vec::with_capacity(count);
            for _ in 0..count {
                let value = rng.gen_range(-50..=50_i64);
                if !data.contains(&value) {
                    data.push(value);
                }
            }
            if data.is_empty() {
                data.push(0);
            }
            single("DATA", data)
        },
    }
}

fn levenshtein_distance() -> Template {
    Template {
        name: "levenshtein_distance",
        description: "Compute Levenshtein (edit) distance between two strings.",
        code: r#"
            def levenshtein(a: str, b: str) -> int:
                """Return edit distance between a and b."""
                if a == b:
                    return 0
                if not a:
                    return len(b)
                if not b:
                    return len(a)
                prev = list(range(len(b) + 1))
                for i, ca in enumerate(a, 1):
                    curr = [i]
                    for j, cb in enumerate(b, 1):
                        ins = curr[j-1] + 1
                        delete = prev[j] + 1
                        subst = prev[j-1] + (ca != cb)
                        curr.append(min(ins, delete, subst))
                    prev = curr
                return prev[-1]

            if __name__ == "__main__":
                A = "{A}"
                B = "{B}"
                print(f"levenshtein('{A}','{B}') =", levenshtein(A, B))
        "#,
        params: |rng| {
            let mut params = single("A", random_word(rng, "codecraft", 4, 7));
            params.insert("B".to_string(), random_word(rng, "workflows", 4, 7).into());
            params
        },
    }
}

fn dijkstra_on_grid() -> Template {
    Template {
        name: "dijkstra_on_grid",
        description: "Dijkstra shortest path on a small weighted grid (no deps).",
        code: r#"
            import heapq
            from typing import Tuple, List

            def neighbors(r: int, c: int, R: int, C: int):
                for dr, dc in ((1,0),(-1,0),(0,1),(0,-1)):
                    nr, nc = r+dr, c+dc
                    if 0 <= nr < R and 0 <= nc < C:
                        yield nr, nc

            def dijkstra(grid: List[List[int]], start=(0,0), goal=None) -> int:
                R, C = len(grid), len(grid[0])
                if goal is None: goal = (R-1, C-1)
                dist = [[float('inf')]*C for _ in range(R)]
                sr, sc = start
                dist[sr][sc] = grid[sr][sc]
                pq: List[Tuple[int,int,int]] = [(grid[sr][sc], sr, sc)]
                while pq:
                    d, r, c = heapq.heappop(pq)
                    if (r,c) == goal:
                        return d
                    if d != dist[r][c]:
                        continue
                    for nr, nc in neighbors(r,c,R,C):
                        nd = d + grid[nr][nc]
                        if nd < dist[nr][nc]:
                            dist[nr][nc] = nd
                            heapq.heappush(pq, (nd, nr, nc))
                return -1

            if __name__ == "__main__":
                grid = {GRID}
                print("Grid:")
                for row in grid: print(row)
                print("Min path cost:", dijkstra(grid))
        "#,
        params: |rng| {
            let rows = rng.gen_range(4..=6);
            let cols = rng.gen_range(4..=6);
            let grid: Vec<Vec<i64>> = (0..rows)
                .map(|_| (0..cols).map(|_| rng.gen_range(1..=9_i64)).collect())
                .collect();
            single("GRID", grid)
        },
    }
}
