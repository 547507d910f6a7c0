use serde::Serialize;

/// Page of items plus the page numbers rendered by the pager widget.
#[derive(Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<usize>,
    pub page: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            pages: (1..=total_pages).collect(),
            page,
        }
    }
}
