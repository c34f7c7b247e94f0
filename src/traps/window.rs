use std::collections::VecDeque;

/// Fixed-capacity FIFO of recently admitted URLs
#[derive(Debug, Clone)]
pub struct RecentUrlWindow {
    urls: VecDeque<String>,
    capacity: usize,
}

impl RecentUrlWindow {
    /// Creates an empty window; a zero capacity is raised to one
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            urls: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a URL, evicting the oldest entry when full
    pub fn push(&mut self, url: impl Into<String>) {
        if self.urls.len() == self.capacity {
            self.urls.pop_front();
        }
        self.urls.push_back(url.into());
    }

    /// Iterates from oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.urls.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
