use serde::{Deserialize, Serialize};

/// One entry of the local guide dataset
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: Option<String>, // "seafood", "hotel", "beach", ...
    #[serde(default)]
    pub area: Option<String>, // Neighborhood, e.g. "Soro"
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub price_level: Option<String>, // "$", "$$", "cheap", ...
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// The four fixed listing groupings.
///
/// Declaration order is the search order, which is also the tie-break
/// order when two listings share the top score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Places,
    Food,
    Stays,
    Shops,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Places,
        Category::Food,
        Category::Stays,
        Category::Shops,
    ];

    /// File stem of the JSON source backing this category
    pub fn file_name(self) -> &'static str {
        match self {
            Category::Places => "places.json",
            Category::Food => "food.json",
            Category::Stays => "stays.json",
            Category::Shops => "shops.json",
        }
    }
}

/// All four collections, in load order.
#[derive(Debug, Clone, Default)]
pub struct Listings {
    pub places: Vec<Listing>,
    pub food: Vec<Listing>,
    pub stays: Vec<Listing>,
    pub shops: Vec<Listing>,
}

impl Listings {
    pub fn get(&self, category: Category) -> &[Listing] {
        match category {
            Category::Places => &self.places,
            Category::Food => &self.food,
            Category::Stays => &self.stays,
            Category::Shops => &self.shops,
        }
    }

    pub fn get_mut(&mut self, category: Category) -> &mut Vec<Listing> {
        match category {
            Category::Places => &mut self.places,
            Category::Food => &mut self.food,
            Category::Stays => &mut self.stays,
            Category::Shops => &mut self.shops,
        }
    }

    pub fn len(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
