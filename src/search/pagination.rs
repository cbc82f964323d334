/// Page buttons under the result list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub current: u32,
    pub total: u32,
}

impl PageWindow {
    pub fn new(current: u32, total: u32) -> Self {
        let total = total.max(1);
        Self {
            current: current.clamp(1, total),
            total,
        }
    }

    pub fn pages(&self) -> impl Iterator<Item = u32> {
        1..=self.total
    }

    pub fn contains(&self, page: u32) -> bool {
        (1..=self.total).contains(&page)
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous(&self) -> Option<u32> {
        self.has_previous().then(|| self.current - 1)
    }

    pub fn next(&self) -> Option<u32> {
        self.has_next().then(|| self.current + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_pages_next_disabled_on_last() {
        let window = PageWindow::new(5, 5);
        assert_eq!(window.pages().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
        assert!(!window.has_next());
        assert!(window.has_previous());
        assert_eq!(window.previous(), Some(4));
        assert_eq!(window.next(), None);
    }

    #[test]
    fn test_first_page() {
        let window = PageWindow::new(1, 5);
        assert!(!window.has_previous());
        assert_eq!(window.next(), Some(2));
    }

    #[test]
    fn test_degenerate_totals() {
        let window = PageWindow::new(3, 0);
        assert_eq!(window.total, 1);
        assert_eq!(window.current, 1);
        assert!(!window.contains(0));
        assert!(!window.contains(2));
    }
}
