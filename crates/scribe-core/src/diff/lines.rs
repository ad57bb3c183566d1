//! Line-oriented diff counting.
//!
//! Counts non-blank lines in added and removed blocks between two texts.
//! Blank lines never contribute to either count.

/// Non-blank line counts for one file comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineDiff {
    pub added: usize,
    pub removed: usize,
}

/// Upper bound on the LCS table size. Beyond this, every middle line is
/// counted as changed rather than allocating an unbounded table.
const MAX_LCS_CELLS: usize = 16_000_000;

/// Count non-blank added and removed lines between `old` and `new`.
///
/// Lines common to both texts (in order) contribute nothing; an edited line
/// counts once as removed and once as added. Identical inputs yield zero.
pub fn count_changed_lines(old: &str, new: &str) -> LineDiff {
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    // Trim the common prefix and suffix; edits usually touch a small region.
    let mut start = 0;
    while start < old_lines.len()
        && start < new_lines.len()
        && old_lines[start] == new_lines[start]
    {
        start += 1;
    }

    let mut old_end = old_lines.len();
    let mut new_end = new_lines.len();
    while old_end > start && new_end > start && old_lines[old_end - 1] == new_lines[new_end - 1] {
        old_end -= 1;
        new_end -= 1;
    }

    let old_mid = &old_lines[start..old_end];
    let new_mid = &new_lines[start..new_end];

    let (removed, added) = unmatched_lines(old_mid, new_mid);
    LineDiff {
        added: count_non_blank(&added),
        removed: count_non_blank(&removed),
    }
}

/// Align two line slices by longest common subsequence and return the lines
/// unique to each side (removed from old, added to new).
fn unmatched_lines<'a>(old: &[&'a str], new: &[&'a str]) -> (Vec<&'a str>, Vec<&'a str>) {
    let m = old.len();
    let n = new.len();

    if m == 0 {
        return (Vec::new(), new.to_vec());
    }
    if n == 0 {
        return (old.to_vec(), Vec::new());
    }
    if (m + 1).saturating_mul(n + 1) > MAX_LCS_CELLS {
        return (old.to_vec(), new.to_vec());
    }

    // table[i][j] = LCS length of old[i..] and new[j..], filled back-to-front
    // so the walk below moves forward through both slices.
    let width = n + 1;
    let mut table = vec![0u32; (m + 1) * width];
    for i in (0..m).rev() {
        for j in (0..n).rev() {
            table[i * width + j] = if old[i] == new[j] {
                table[(i + 1) * width + j + 1] + 1
            } else {
                table[(i + 1) * width + j].max(table[i * width + j + 1])
            };
        }
    }

    let mut removed = Vec::new();
    let mut added = Vec::new();
    let (mut i, mut j) = (0, 0);
    while i < m && j < n {
        if old[i] == new[j] {
            i += 1;
            j += 1;
        } else if table[(i + 1) * width + j] >= table[i * width + j + 1] {
            removed.push(old[i]);
            i += 1;
        } else {
            added.push(new[j]);
            j += 1;
        }
    }
    removed.extend_from_slice(&old[i..]);
    added.extend_from_slice(&new[j..]);

    (removed, added)
}

fn count_non_blank(lines: &[&str]) -> usize {
    lines.iter().filter(|line| !line.trim().is_empty()).count()
}
