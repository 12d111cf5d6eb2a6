// Service categories and the compiled-in keyword table.
//
// Order is significant twice over: categories are tried top to bottom, and
// within a category keywords are tried left to right. Overlaps between
// categories are resolved by that order alone.

use std::fmt;

/// One of the six provider categories the platform can route to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Cleaner,
    Electrician,
    Painter,
    Salon,
    Carpenter,
    Mechanic,
}

impl Category {
    /// Every category, in the order the built-in table declares them.
    pub const ALL: [Category; 6] = [
        Category::Cleaner,
        Category::Electrician,
        Category::Painter,
        Category::Salon,
        Category::Carpenter,
        Category::Mechanic,
    ];

    /// The label printed to stdout and sent to the booking client.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Cleaner => "Cleaner",
            Category::Electrician => "Electrician",
            Category::Painter => "Painter",
            Category::Salon => "Salon",
            Category::Carpenter => "Carpenter",
            Category::Mechanic => "Mechanic",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single table row: a category and the keywords that route to it.
pub type CategoryEntry<'a> = (Category, &'a [&'a str]);

/// Ordered category → keyword mapping consulted by the matcher.
///
/// Keywords must be lowercase, since queries are lowercased before matching.
#[derive(Debug, Clone, Copy)]
pub struct CategoryTable<'a> {
    entries: &'a [CategoryEntry<'a>],
}

impl<'a> CategoryTable<'a> {
    pub const fn new(entries: &'a [CategoryEntry<'a>]) -> Self {
        Self { entries }
    }

    /// Rows in matching order.
    pub fn entries(&self) -> &'a [CategoryEntry<'a>] {
        self.entries
    }
}

const CLEANER_KEYWORDS: &[&str] = &[
    "clean",
    "dust",
    "mop",
    "wash",
    "sweep",
    "garbage",
    "trash",
    "messy",
    "housekeeping",
    "cleaner",
];

const ELECTRICIAN_KEYWORDS: &[&str] = &[
    "fan",
    "light",
    "bulb",
    "switch",
    "socket",
    "wire",
    "fuse",
    "mcb",
    "shock",
    "current",
    "power",
    "voltage",
    "electrician",
];

const PAINTER_KEYWORDS: &[&str] = &[
    "paint",
    "wall",
    "color",
    "whitewash",
    "stain",
    "brush",
    "roller",
    "exterior",
    "interior",
    "painter",
];

const SALON_KEYWORDS: &[&str] = &[
    "hair",
    "cut",
    "shave",
    "beard",
    "facial",
    "massage",
    "makeup",
    "beauty",
    "style",
    "grooming",
    "hair stylist",
    "salon",
];

const CARPENTER_KEYWORDS: &[&str] = &[
    "wood",
    "door",
    "window",
    "furniture",
    "table",
    "chair",
    "bed",
    "lock",
    "handle",
    "cupboard",
    "shelf",
    "carpenter",
];

const MECHANIC_KEYWORDS: &[&str] = &[
    "car",
    "bike",
    "scooter",
    "vehicle",
    "engine",
    "brake",
    "clutch",
    "gear",
    "oil",
    "tire",
    "puncture",
    "start",
    "mechanic",
];

/// The production routing table.
pub const SERVICE_TABLE: CategoryTable<'static> = CategoryTable::new(&[
    (Category::Cleaner, CLEANER_KEYWORDS),
    (Category::Electrician, ELECTRICIAN_KEYWORDS),
    (Category::Painter, PAINTER_KEYWORDS),
    (Category::Salon, SALON_KEYWORDS),
    (Category::Carpenter, CARPENTER_KEYWORDS),
    (Category::Mechanic, MECHANIC_KEYWORDS),
]);
