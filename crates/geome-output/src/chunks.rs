//! Splitting the final table into contiguous, near-equal chunks.

use std::ops::Range;

use crate::error::{OutputError, Result};

/// Row ranges for `rows` split into `count` chunks.
///
/// The first `rows % count` chunks hold one extra row. When there are fewer
/// rows than chunks the trailing ranges are empty.
pub fn chunk_bounds(rows: usize, count: usize) -> Result<Vec<Range<usize>>> {
    if count == 0 {
        return Err(OutputError::InvalidChunkCount);
    }
    let base = rows / count;
    let extra = rows % count;
    let mut start = 0;
    let bounds = (0..count)
        .map(|idx| {
            let len = base + usize::from(idx < extra);
            let range = start..start + len;
            start += len;
            range
        })
        .collect();
    Ok(bounds)
}

/// `<prefix><number>.csv`, numbered from 1.
pub fn chunk_file_name(prefix: &str, number: usize) -> String {
    format!("{prefix}{number}.csv")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extra_rows_go_to_leading_chunks() {
        let bounds = chunk_bounds(10, 3).unwrap();
        assert_eq!(bounds, vec![0..4, 4..7, 7..10]);
    }

    #[test]
    fn fewer_rows_than_chunks_leaves_empty_tail() {
        let bounds = chunk_bounds(2, 4).unwrap();
        let lens: Vec<usize> = bounds.iter().map(ExactSizeIterator::len).collect();
        assert_eq!(lens, vec![1, 1, 0, 0]);
    }

    #[test]
    fn zero_chunks_is_rejected() {
        assert!(matches!(chunk_bounds(5, 0), Err(OutputError::InvalidChunkCount)));
    }

    #[test]
    fn file_names_are_one_based() {
        assert_eq!(
            chunk_file_name("FuTRES_Mammals_VertNet_Global_Modern_", 1),
            "FuTRES_Mammals_VertNet_Global_Modern_1.csv"
        );
    }
}
