use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub(crate) enum PageMarker {
    Page { number: usize, current: bool },
    Ellipsis,
}

// PaginationView is the control under the grid: first and last page, a window of one page
// around the current one, and an ellipsis where the window leaves a gap
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct PaginationView {
    pub current_page: usize,
    pub total_pages: usize,
    pub previous_enabled: bool,
    pub next_enabled: bool,
    pub markers: Vec<PageMarker>,
}

impl PaginationView {
    // None when everything fits on one page
    pub fn build(current_page: usize, total_pages: usize) -> Option<PaginationView> {
        if total_pages <= 1 {
            return None;
        }
        let mut markers = Vec::new();
        for page in 1..=total_pages {
            let distance = page.abs_diff(current_page);
            if page == 1 || page == total_pages || distance <= 1 {
                markers.push(PageMarker::Page { number: page, current: page == current_page });
            } else if distance == 2 {
                markers.push(PageMarker::Ellipsis);
            }
        }
        Some(PaginationView {
            current_page,
            total_pages,
            previous_enabled: current_page > 1,
            next_enabled: current_page < total_pages,
            markers,
        })
    }
}
