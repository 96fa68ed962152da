/// Inclusive byte interval, `0 <= start <= end < size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ByteRange {
    pub start: u64,
    pub end: u64,
}

impl ByteRange {
    pub fn len(&self) -> u64 {
        self.end - self.start + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeDecision {
    Whole,
    Partial(ByteRange),
    Unsatisfiable,
}

/// Resolve a `Range` header against a known file size.
///
/// Only the single form `bytes=<start>-<end?>` is supported; `end` defaults
/// to the last byte and is clamped to it. Suffix ranges, multi-ranges, and
/// anything unparseable degrade to `Whole` so a malformed header can never
/// fail the response path. A range starting at or past the end of the file
/// is `Unsatisfiable`, as is one that is empty after clamping.
pub fn resolve(header: Option<&str>, size: u64) -> RangeDecision {
    let value = match header {
        Some(value) => value.trim(),
        None => return RangeDecision::Whole,
    };
    let range = match value.strip_prefix("bytes=") {
        Some(range) => range,
        None => return RangeDecision::Whole,
    };
    if range.contains(',') || range.starts_with('-') {
        return RangeDecision::Whole;
    }

    let mut parts = range.splitn(2, '-');
    let start_str = parts.next().unwrap_or("");
    let end_str = parts.next();

    let start: u64 = match start_str.trim().parse() {
        Ok(start) => start,
        Err(_) => return RangeDecision::Whole,
    };
    let end = match end_str {
        None => return RangeDecision::Whole,
        Some("") => size.saturating_sub(1),
        Some(text) => match text.trim().parse::<u64>() {
            Ok(end) => end.min(size.saturating_sub(1)),
            Err(_) => return RangeDecision::Whole,
        },
    };

    if start >= size || start > end {
        return RangeDecision::Unsatisfiable;
    }

    RangeDecision::Partial(ByteRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::{resolve, ByteRange, RangeDecision};

    #[test]
    fn no_header_is_whole() {
        assert_eq!(resolve(None, 1000), RangeDecision::Whole);
    }

    #[test]
    fn parses_closed_range() {
        let decision = resolve(Some("bytes=0-99"), 1000);
        assert_eq!(
            decision,
            RangeDecision::Partial(ByteRange { start: 0, end: 99 })
        );
        if let RangeDecision::Partial(range) = decision {
            assert_eq!(range.len(), 100);
        }
    }

    #[test]
    fn parses_open_ended_range() {
        assert_eq!(
            resolve(Some("bytes=500-"), 1000),
            RangeDecision::Partial(ByteRange {
                start: 500,
                end: 999
            })
        );
    }

    #[test]
    fn clamps_end_overflow() {
        assert_eq!(
            resolve(Some("bytes=900-2000"), 1000),
            RangeDecision::Partial(ByteRange {
                start: 900,
                end: 999
            })
        );
    }

    #[test]
    fn start_past_end_of_file_is_unsatisfiable() {
        assert_eq!(
            resolve(Some("bytes=1000-1005"), 1000),
            RangeDecision::Unsatisfiable
        );
        assert_eq!(resolve(Some("bytes=1000-"), 1000), RangeDecision::Unsatisfiable);
    }

    #[test]
    fn inverted_range_is_unsatisfiable() {
        assert_eq!(resolve(Some("bytes=10-5"), 1000), RangeDecision::Unsatisfiable);
    }

    #[test]
    fn suffix_range_degrades_to_whole() {
        assert_eq!(resolve(Some("bytes=-500"), 1000), RangeDecision::Whole);
    }

    #[test]
    fn multiple_ranges_degrade_to_whole() {
        assert_eq!(resolve(Some("bytes=0-1,2-3"), 1000), RangeDecision::Whole);
    }

    #[test]
    fn garbage_degrades_to_whole() {
        assert_eq!(resolve(Some("bytes=abc-def"), 1000), RangeDecision::Whole);
        assert_eq!(resolve(Some("bytes=10"), 1000), RangeDecision::Whole);
        assert_eq!(resolve(Some("items=0-99"), 1000), RangeDecision::Whole);
    }

    #[test]
    fn empty_file_cannot_satisfy_a_range() {
        assert_eq!(resolve(Some("bytes=0-"), 0), RangeDecision::Unsatisfiable);
    }
}
