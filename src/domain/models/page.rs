/// Offset/limit window applied to list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub offset: u32,
    pub limit: u32,
}

impl Page {
    pub const TOP_LEVEL: Page = Page {
        offset: 0,
        limit: 100,
    };
    pub const NESTED: Page = Page {
        offset: 0,
        limit: 50,
    };
    pub const ALL: Page = Page {
        offset: 0,
        limit: u32::MAX,
    };

    pub fn slice<T>(&self, rows: impl Iterator<Item = T>) -> Vec<T> {
        rows.skip(self.offset as usize)
            .take(self.limit as usize)
            .collect()
    }
}
