//! Longest run of consecutive `true` values.

/// Length of the longest contiguous run of `true` in `flags`.
///
/// Single linear pass: the running counter resets whenever the condition
/// breaks. Returns 0 when no element is `true`.
pub fn longest_run<I>(flags: I) -> u64
where
    I: IntoIterator<Item = bool>,
{
    let mut longest = 0u64;
    let mut current = 0u64;

    for flag in flags {
        if flag {
            current += 1;
            longest = longest.max(current);
        } else {
            current = 0;
        }
    }

    longest
}
