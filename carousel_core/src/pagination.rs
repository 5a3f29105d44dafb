// Copyright 2026 the Carousel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Page arithmetic.
//!
//! A page is `slides_to_show` consecutive items. Pages are never
//! materialized; everything here is derived from the item count, the current
//! slide count and live item geometry.

/// Returns the number of pages for `item_count` items shown
/// `slides_to_show` at a time. Never less than 1.
#[must_use]
pub const fn page_count(item_count: usize, slides_to_show: usize) -> usize {
    let slides = if slides_to_show == 0 { 1 } else { slides_to_show };
    let pages = item_count.div_ceil(slides);
    if pages == 0 { 1 } else { pages }
}

/// Clamps `page` into `0..page_count`.
#[must_use]
pub const fn clamp_page(page: usize, page_count: usize) -> usize {
    let last = page_count.saturating_sub(1);
    if page > last { last } else { page }
}

/// Returns the page after `current`, wrapping to the first.
#[must_use]
pub const fn next_page(current: usize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    (current + 1) % page_count
}

/// Returns the page before `current`, wrapping to the last.
#[must_use]
pub const fn prev_page(current: usize, page_count: usize) -> usize {
    if page_count == 0 {
        return 0;
    }
    (current % page_count + page_count - 1) % page_count
}

/// Returns the track translation (CSS px) that brings `page` into view.
///
/// The offset is measured from live geometry: the distance between the first
/// item of the page and the first item overall, negated. Uneven item widths
/// and gaps are therefore handled without assuming a fixed page width. A page
/// whose first item does not exist maps to 0.
#[must_use]
pub fn page_offset(
    page: usize,
    slides_to_show: usize,
    item_offset: impl Fn(usize) -> Option<f64>,
) -> f64 {
    let Some(first_index) = page.checked_mul(slides_to_show) else {
        return 0.0;
    };
    match (item_offset(first_index), item_offset(0)) {
        (Some(first), Some(origin)) => origin - first,
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_count_is_ceiling_with_floor_of_one() {
        assert_eq!(page_count(5, 1), 5);
        assert_eq!(page_count(5, 2), 3);
        assert_eq!(page_count(4, 2), 2);
        assert_eq!(page_count(2, 3), 1);
        assert_eq!(page_count(0, 2), 1);
        assert_eq!(page_count(3, 0), 3);
    }

    #[test]
    fn page_count_matches_ceiling_for_small_grid() {
        for n in 1..=12 {
            for s in 1..=5 {
                let expected = n / s + usize::from(n % s != 0);
                assert_eq!(page_count(n, s), expected, "n={n} s={s}");
            }
        }
    }

    #[test]
    fn clamp_keeps_index_in_range() {
        assert_eq!(clamp_page(4, 3), 2);
        assert_eq!(clamp_page(1, 3), 1);
        assert_eq!(clamp_page(7, 1), 0);
        assert_eq!(clamp_page(0, 0), 0);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(next_page(2, 3), 0);
        assert_eq!(prev_page(0, 3), 2);
        assert_eq!(next_page(0, 1), 0);
        assert_eq!(prev_page(0, 1), 0);
        for pages in 1..6 {
            for p in 0..pages {
                assert_eq!(prev_page(next_page(p, pages), pages), p);
            }
        }
    }

    #[test]
    fn offset_uses_live_geometry() {
        // Uneven widths with a 10px gap: 0, 310, 520, 900.
        let offsets = [0.0, 310.0, 520.0, 900.0];
        let lookup = |i: usize| offsets.get(i).copied();

        assert_eq!(page_offset(0, 2, lookup), 0.0);
        assert_eq!(page_offset(1, 2, lookup), -520.0);
        assert_eq!(page_offset(3, 1, lookup), -900.0);
        // Past the last item.
        assert_eq!(page_offset(2, 2, lookup), 0.0);
    }

    #[test]
    fn offset_is_relative_to_first_item() {
        let offsets = [40.0, 240.0, 440.0];
        let lookup = |i: usize| offsets.get(i).copied();
        assert_eq!(page_offset(1, 1, lookup), -200.0);
        assert_eq!(page_offset(2, 1, lookup), -400.0);
    }
}
