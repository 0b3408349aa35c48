pub mod console;
pub mod json;

/// Number of items to emit for a limit value, where 0 means "all"
pub(crate) fn effective_count(total: usize, limit: usize) -> usize {
    if limit == 0 {
        total
    } else {
        total.min(limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effective_count() {
        assert_eq!(effective_count(5, 0), 5);
        assert_eq!(effective_count(5, 3), 3);
        assert_eq!(effective_count(5, 9), 5);
        assert_eq!(effective_count(0, 3), 0);
    }
}
