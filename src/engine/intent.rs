use std::collections::BTreeSet;

use crate::models::Category;

/// Categories selected for a question. Iterates in search order.
pub type CategorySet = BTreeSet<Category>;

// --- Keyword tables (static data, matched as substrings) ---

const STAY_KEYWORDS: &[&str] = &[
    "hotel",
    "accommodation",
    "hostel",
    "motel",
    "guesthouse",
    "place to stay",
    "where to stay",
    "هتل",
    "اقامت",
];

const FOOD_KEYWORDS: &[&str] = &[
    "restaurant",
    "food",
    "eating",
    "fish",
    "shrimp",
    "cafe",
    "coffee",
    "رستوران",
    "غذا",
    "ماهی",
    "میگو",
    "کافه",
];

const PLACE_KEYWORDS: &[&str] = &[
    "attraction",
    "beach",
    "market",
    "park",
    "complex",
    "sightseeing",
    "ساحل",
    "بازار",
    "پارک",
    "جاذبه",
    "دیدنی",
];

const SHOP_KEYWORDS: &[&str] = &[
    "shopping",
    "store",
    "commercial complex",
    "mall",
    "خرید",
    "فروشگاه",
    "مجتمع تجاری",
];

const GREETINGS: &[&str] = &["hello", "hi", "hey", "salam", "سلام", "درود"];

/// One entry of the prioritized classification table.
#[derive(Debug)]
pub struct Rule {
    pub category: Category,
    pub keywords: &'static [&'static str],
    /// A match selects this category alone and stops evaluation.
    pub exclusive: bool,
}

/// Evaluated top to bottom. Hotel questions must never be diluted by
/// food or place matches, so stays come first and are exclusive.
pub const RULES: &[Rule] = &[
    Rule {
        category: Category::Stays,
        keywords: STAY_KEYWORDS,
        exclusive: true,
    },
    Rule {
        category: Category::Food,
        keywords: FOOD_KEYWORDS,
        exclusive: false,
    },
    Rule {
        category: Category::Places,
        keywords: PLACE_KEYWORDS,
        exclusive: false,
    },
    Rule {
        category: Category::Shops,
        keywords: SHOP_KEYWORDS,
        exclusive: false,
    },
];

impl Rule {
    fn matches(&self, question: &str) -> bool {
        self.keywords.iter().any(|kw| question.contains(kw))
    }
}

/// Pick the collections to search for a question.
///
/// Empty questions select nothing. A question with no category keyword
/// searches everything.
pub fn classify(question: &str) -> CategorySet {
    classify_with(question, RULES)
}

pub fn classify_with(question: &str, rules: &[Rule]) -> CategorySet {
    let question = question.trim().to_lowercase();
    let mut selected = CategorySet::new();

    if question.is_empty() {
        return selected;
    }

    for rule in rules {
        if !rule.matches(&question) {
            continue;
        }
        if rule.exclusive {
            return CategorySet::from([rule.category]);
        }
        selected.insert(rule.category);
    }

    if selected.is_empty() {
        selected.extend(Category::ALL);
    }

    selected
}

/// Whole-message greeting check ("hello", not "hello, any hotels?")
pub fn is_greeting(question: &str) -> bool {
    let question = question.trim().to_lowercase();
    GREETINGS.contains(&question.as_str())
}
