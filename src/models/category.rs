/// Category the backend assigns when a create request carries none.
pub const DEFAULT_CATEGORY: &str = "Общее";

/// The fixed set of worlds offered by the create-topic form and the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fantasy,
    SciFi,
    PostApocalypse,
    Medieval,
    Modern,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fantasy,
        Category::SciFi,
        Category::PostApocalypse,
        Category::Medieval,
        Category::Modern,
    ];

    /// Label as stored in `Topic::category`.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fantasy => "Фэнтези",
            Category::SciFi => "Научная фантастика",
            Category::PostApocalypse => "Постапокалипсис",
            Category::Medieval => "Средневековье",
            Category::Modern => "Современность",
        }
    }

    pub fn glyph(&self) -> char {
        match self {
            Category::Fantasy => '✦',
            Category::SciFi => '◈',
            Category::PostApocalypse => '☢',
            Category::Medieval => '♜',
            Category::Modern => '●',
        }
    }

    /// Exact, case-sensitive label match.
    pub fn from_label(label: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|c| c == self).unwrap_or(0)
    }

    /// Next category, wrapping around.
    pub fn next(&self) -> Category {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous category, wrapping around.
    pub fn prev(&self) -> Category {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Step a filter through `None → Fantasy → … → Modern → None`.
    pub fn cycle_filter(current: Option<Category>) -> Option<Category> {
        match current {
            None => Some(Self::ALL[0]),
            Some(c) if c.index() + 1 == Self::ALL.len() => None,
            Some(c) => Some(c.next()),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
