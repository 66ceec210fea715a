/// Converts a `H:MM:SS`, `MM:SS`, or bare `SS` timestamp to seconds.
///
/// Parts are folded left-to-right with base-60 positional weights; there
/// is no fixed width. Unparseable parts count as zero, and a fold that
/// would overflow yields zero.
pub fn time_to_seconds(time: &str) -> u64 {
    time.trim()
        .split(':')
        .try_fold(0u64, |acc, part| {
            let part = part.trim().parse::<u64>().unwrap_or(0);
            acc.checked_mul(60)?.checked_add(part)
        })
        .unwrap_or(0)
}
