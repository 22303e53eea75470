use serde::{Deserialize, Serialize};

/// Page sizes offered by the rows-per-page selector.
pub const PAGE_SIZE_OPTIONS: [usize; 3] = [10, 25, 100];

/// Rows per page on first load.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Pagination block of a search request. `page_number` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// 1-based page number.
    pub page_number: usize,
    /// Rows per page.
    pub page_size: usize,
    /// Ask the server to compute `totalItemCount`.
    #[serde(default = "default_need_total_count")]
    pub need_total_count: bool,
}

fn default_need_total_count() -> bool {
    true
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// First page with the given size.
    pub fn first(page_size: usize) -> Self {
        Self::for_page_index(0, page_size)
    }

    /// Build a request from the table's 0-based page index.
    pub fn for_page_index(page_index: usize, page_size: usize) -> Self {
        Self {
            page_number: page_index + 1,
            page_size: page_size.max(1),
            need_total_count: true,
        }
    }

    /// 0-based page index as used by the table controls.
    pub fn page_index(&self) -> usize {
        self.page_number.saturating_sub(1)
    }

    /// Offset of the first row on this page.
    pub fn offset(&self) -> usize {
        self.page_index().saturating_mul(self.page_size.max(1))
    }

    /// The rows of `items` that fall on this page.
    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.page_size.max(1)).min(items.len());
        &items[start..end]
    }
}

/// Pagination block of a search response. The server's count is
/// authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    /// Total rows matching the filter across all pages.
    #[serde(default)]
    pub total_item_count: usize,
}

/// Number of pages needed for `total` rows; never less than one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let per_page = page_size.max(1);
    total.max(1).div_ceil(per_page)
}

/// "11–20 of 37" style label shown next to the page controls.
pub fn range_label(page_index: usize, page_size: usize, total: usize) -> String {
    if total == 0 {
        return "0–0 of 0".to_string();
    }
    let from = page_index * page_size + 1;
    let to = ((page_index + 1) * page_size).min(total);
    format!("{}–{} of {}", from.min(total), to, total)
}

/// One button (or gap) in the page strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// 1-based page number.
    Page(usize),
    /// Collapsed run of pages; the tag keeps keys unique.
    Ellipsis(&'static str),
}

/// Page strip for the 1-based `current` page: first, last, and up to two
/// neighbours on each side, with ellipses for the gaps.
pub fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let mut slots = vec![PageSlot::Page(1)];

    let mut start = current.saturating_sub(2).max(2);
    let mut end = (current + 2).min(total - 1);

    if current <= 3 {
        start = 2;
        end = 5;
    } else if current + 2 >= total {
        start = total.saturating_sub(4).max(2);
        end = total - 1;
    }

    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_index_maps_to_one_based_page_number() {
        let request = PageRequest::for_page_index(2, 25);
        assert_eq!(request.page_number, 3);
        assert_eq!(request.page_size, 25);
        assert!(request.need_total_count);
        assert_eq!(request.page_index(), 2);
        assert_eq!(request.offset(), 50);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(PageRequest::default()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({ "pageNumber": 1, "pageSize": 10, "needTotalCount": true })
        );
    }

    #[test]
    fn slice_clamps_to_available_rows() {
        let rows: Vec<u32> = (1..=23).collect();
        assert_eq!(PageRequest::for_page_index(2, 10).slice(&rows), &[21, 22, 23]);
        assert!(PageRequest::for_page_index(5, 10).slice(&rows).is_empty());
    }

    #[test]
    fn total_pages_rounds_up_and_never_hits_zero() {
        assert_eq!(total_pages(0, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(250, 100), 3);
    }

    #[test]
    fn range_label_covers_partial_last_page() {
        assert_eq!(range_label(0, 10, 37), "1–10 of 37");
        assert_eq!(range_label(3, 10, 37), "31–37 of 37");
        assert_eq!(range_label(0, 10, 0), "0–0 of 0");
    }

    #[test]
    fn visible_slots_collapse_long_ranges() {
        assert_eq!(visible_slots(1, 3), vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]);
        assert_eq!(
            visible_slots(10, 20),
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis("left"),
                PageSlot::Page(8),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Page(12),
                PageSlot::Ellipsis("right"),
                PageSlot::Page(20),
            ]
        );
        assert_eq!(visible_slots(20, 20).last(), Some(&PageSlot::Page(20)));
        assert_eq!(visible_slots(2, 20)[1..5], [
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5)
        ]);
    }
}
