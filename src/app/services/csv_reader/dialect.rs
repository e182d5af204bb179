//! Delimiter detection from a leading sample of a file
//!
//! A candidate delimiter qualifies when it occurs on the header record and
//! occurs the same number of times on every complete record of the sample.
//! Records are split on newlines outside double quotes.
//! Occurrences inside double-quoted sections are not counted. Among
//! qualifying candidates the one with the most occurrences per line wins;
//! ties go to the earlier candidate.

use tracing::debug;

/// Detect the field delimiter of `sample`
///
/// `truncated` marks a sample cut off at the size limit, in which case the
/// final partial record is ignored. Returns `None` when no candidate qualifies.
pub fn detect_delimiter(sample: &str, candidates: &[u8], truncated: bool) -> Option<u8> {
    let (mut lines, terminated) = split_records(sample);

    if truncated && !terminated && lines.len() > 1 {
        lines.pop();
    }

    let lines: Vec<&str> = lines
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .collect();

    let header = lines.first()?;

    let mut best: Option<(u8, usize)> = None;
    for &candidate in candidates {
        let header_count = count_unquoted(header, candidate);
        if header_count == 0 {
            continue;
        }

        let consistent = lines
            .iter()
            .all(|line| count_unquoted(line, candidate) == header_count);
        if !consistent {
            debug!(
                "Delimiter {:?} rejected: inconsistent counts across sample lines",
                candidate as char
            );
            continue;
        }

        match best {
            Some((_, count)) if count >= header_count => {}
            _ => best = Some((candidate, header_count)),
        }
    }

    best.map(|(delimiter, _)| delimiter)
}

/// Split `sample` into logical records
///
/// Newlines inside double-quoted sections belong to the current record.
/// The flag is false when the last record has no closing newline or is
/// still inside quotes.
fn split_records(sample: &str) -> (Vec<&str>, bool) {
    let mut records = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (index, byte) in sample.bytes().enumerate() {
        match byte {
            b'"' => in_quotes = !in_quotes,
            b'\n' if !in_quotes => {
                records.push(sample[start..index].trim_end_matches('\r'));
                start = index + 1;
            }
            _ => {}
        }
    }

    let terminated = start == sample.len() && !in_quotes;
    if start < sample.len() {
        records.push(sample[start..].trim_end_matches('\r'));
    }

    (records, terminated)
}

/// Count `delimiter` occurrences outside double-quoted sections
fn count_unquoted(line: &str, delimiter: u8) -> usize {
    let mut in_quotes = false;
    let mut count = 0;

    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
        } else if byte == delimiter && !in_quotes {
            count += 1;
        }
    }

    count
}
