//! Display percentages for vote options.
//!
//! Percentages are taken against the reported participant total, not the sum
//! of counts, and are rounded half-up per option. They are never normalised,
//! so a poll may add up to 99 or 101.

pub fn percentage(count: u32, total: u32) -> u8 {
    if total == 0 {
        return 0;
    }
    let (count, total) = (u64::from(count), u64::from(total));
    let rounded = (count * 100 + total / 2) / total;
    rounded.min(100) as u8
}

pub fn percentages(counts: &[u32], total: u32) -> Vec<u8> {
    counts.iter().map(|&count| percentage(count, total)).collect()
}
