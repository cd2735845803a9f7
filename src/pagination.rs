/// Builds the pager window for a zero-based `index` into a result set whose
/// final zero-based page is `last_page`. Returns up to five consecutive
/// 1-based page numbers centered near the current page, or `None` when the
/// result set has no pages (`last_page < 0`).
pub fn page_interval(index: i32, last_page: i32) -> Option<Vec<i32>> {
    if last_page < 0 {
        return None;
    }

    let interval = if index - 2 <= 0 {
        build_interval(1, last_page + 1)
    } else if index + 2 > last_page {
        if last_page - 4 <= 0 {
            build_interval(1, last_page + 1)
        } else {
            build_interval(last_page - 3, last_page + 1)
        }
    } else {
        build_interval(index - 1, index + 3)
    };

    Some(interval)
}

fn build_interval(min: i32, max: i32) -> Vec<i32> {
    let mut pages = Vec::with_capacity(5);
    let mut page = min;
    while page <= max && pages.len() < 5 {
        pages.push(page);
        page += 1;
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_interval_without_pages() {
        assert_eq!(page_interval(0, -1), None);
    }

    #[test]
    fn window_at_start() {
        assert_eq!(page_interval(1, 20), Some(vec![1, 2, 3, 4, 5]));
    }

    #[test]
    fn window_at_end() {
        assert_eq!(page_interval(19, 20), Some(vec![17, 18, 19, 20, 21]));
    }

    #[test]
    fn short_result_set() {
        assert_eq!(page_interval(1, 3), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn window_in_middle() {
        assert_eq!(page_interval(17, 20), Some(vec![16, 17, 18, 19, 20]));
    }

    #[test]
    fn single_page() {
        assert_eq!(page_interval(0, 0), Some(vec![1]));
    }

    #[test]
    fn near_end_of_short_set() {
        assert_eq!(page_interval(3, 3), Some(vec![1, 2, 3, 4]));
    }

    #[test]
    fn window_tracks_every_reachable_page() {
        for last_page in 0..=30 {
            for index in 0..=last_page {
                let pages = page_interval(index, last_page)
                    .unwrap_or_else(|| panic!("no window for index {index} of {last_page}"));
                assert_eq!(pages.len() as i32, (last_page + 1).min(5));
                assert!(pages[0] >= 1);
                assert!(*pages.last().unwrap() <= last_page + 1);
                assert!(pages.windows(2).all(|w| w[1] == w[0] + 1));
                assert!(pages.contains(&(index + 1)));
            }
        }
    }

    // An index beyond the final page still yields the tail window, which
    // does not contain the requested page. Callers get this input from the
    // query string, so the behavior is pinned here.
    #[test]
    fn index_past_last_page_keeps_tail_window() {
        assert_eq!(page_interval(100, 5), Some(vec![2, 3, 4, 5, 6]));
    }
}
