//! Domain-specific assertions for usersearch harnesses.
//!
//! These wrap `pretty_assertions` and add failure messages that say which
//! ordering or paging invariant was violated.

use usersearch::OrderBy;

// ---------------------------------------------------------------------------
// Result identity
// ---------------------------------------------------------------------------

/// Assert that a result set of `Record`s has exactly these ids, in order.
///
/// ```rust
/// assert_ids!(records, [1, 2, 3]);
/// ```
#[macro_export]
macro_rules! assert_ids {
    ($records:expr, [$($id:expr),* $(,)?]) => {{
        let records: &[usersearch::Record] = &$records;
        let actual: Vec<i64> = records.iter().map(usersearch::Record::id).collect();
        let expected: Vec<i64> = vec![$($id),*];
        pretty_assertions::assert_eq!(actual, expected, "result ids (in order)");
    }};
}

/// Assert that a result set of wire `User`s has exactly these names, in order.
///
/// ```rust
/// assert_names!(users, ["Boyd Wolf", "Hilda Mayer"]);
/// ```
#[macro_export]
macro_rules! assert_names {
    ($users:expr, [$($name:expr),* $(,)?]) => {{
        let users: &[usersearch::User] = &$users;
        let actual: Vec<&str> = users.iter().map(|u| u.name.as_str()).collect();
        let expected: Vec<&str> = vec![$($name),*];
        pretty_assertions::assert_eq!(actual, expected, "result names (in order)");
    }};
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

/// Assert that `key` is monotonic across `items` in the direction of `order`.
/// `AsIs` imposes no ordering and always passes.
pub fn assert_sorted_by<T, K, F>(items: &[T], key: F, order: OrderBy)
where
    K: Ord + std::fmt::Debug,
    F: Fn(&T) -> K,
{
    for (i, pair) in items.windows(2).enumerate() {
        let (a, b) = (key(&pair[0]), key(&pair[1]));
        let ok = match order {
            OrderBy::Asc => a <= b,
            OrderBy::Desc => a >= b,
            OrderBy::AsIs => true,
        };
        assert!(
            ok,
            "assert_sorted_by failed at position {i}:\n  order: {order:?}\n  {a:?} then {b:?}"
        );
    }
}

/// Assert the paging contract: `len == min(limit, max(0, n - offset))`.
pub fn assert_window_len(actual: usize, n: usize, limit: usize, offset: usize) {
    let expected = limit.min(n.saturating_sub(offset));
    assert_eq!(
        actual, expected,
        "window length: n={n} limit={limit} offset={offset}"
    );
    assert!(actual <= limit && actual <= n);
}
