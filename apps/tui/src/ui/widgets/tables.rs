use std::ops::Range;

/// Rows to draw so that `selected` stays visible in a window of `max_visible` rows.
pub fn visible_rows(total_rows: usize, max_visible: usize, selected: usize) -> Range<usize> {
    if total_rows <= max_visible {
        return 0..total_rows;
    }

    let start = if selected >= max_visible {
        selected + 1 - max_visible
    } else {
        0
    };

    start..(start + max_visible).min(total_rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn everything_fits() {
        assert_eq!(visible_rows(6, 10, 5), 0..6);
    }

    #[test]
    fn window_follows_selection() {
        assert_eq!(visible_rows(6, 3, 0), 0..3);
        assert_eq!(visible_rows(6, 3, 2), 0..3);
        assert_eq!(visible_rows(6, 3, 3), 1..4);
        assert_eq!(visible_rows(6, 3, 5), 3..6);
    }

    #[test]
    fn zero_height_window_is_empty() {
        assert!(visible_rows(6, 0, 2).is_empty());
    }
}
