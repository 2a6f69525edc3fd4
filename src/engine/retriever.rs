use crate::models::{Listing, Listings};

use super::intent::CategorySet;

/// Points per question token found in a listing's text fields
pub const TOKEN_WEIGHT: u32 = 2;

/// Points per known area named by both question and listing location
pub const AREA_WEIGHT: u32 = 5;

/// Neighborhood and street names recognized for the area bonus
pub const KNOWN_AREAS: &[&str] = &[
    "soro",
    "golshahr",
    "pardis",
    "nakhl nakhoda",
    "chahestani",
    "imam khomeini",
    "bolvar",
    "سورو",
    "گلشهر",
    "پردیس",
    "نخل ناخدا",
    "چهستانی",
];

/// A listing with a positive relevance score for one question
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub listing: &'a Listing,
    pub score: u32,
}

/// Whitespace tokens of the lowercased question, single characters dropped
pub fn tokenize(question: &str) -> Vec<String> {
    question
        .trim()
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() > 1)
        .map(String::from)
        .collect()
}

/// Lowercased searchable text of one listing, computed once per listing.
struct ListingText {
    name: String,
    kind: String,
    description: String,
    tags: String,
    location: String,
}

impl ListingText {
    fn new(listing: &Listing) -> Self {
        let lower = |field: &Option<String>| field.as_deref().unwrap_or_default().to_lowercase();

        Self {
            name: listing.name.to_lowercase(),
            kind: lower(&listing.kind),
            description: lower(&listing.description),
            tags: listing.tags.join(" ").to_lowercase(),
            location: format!("{} {}", lower(&listing.area), lower(&listing.address)),
        }
    }

    fn mentions(&self, token: &str) -> bool {
        self.name.contains(token)
            || self.kind.contains(token)
            || self.description.contains(token)
            || self.tags.contains(token)
    }
}

/// Relevance of one listing: flat points per matching token plus the area bonus.
///
/// `question` must already be trimmed and lowercased.
pub fn score(question: &str, tokens: &[String], listing: &Listing) -> u32 {
    let text = ListingText::new(listing);

    let token_points = tokens
        .iter()
        .filter(|token| text.mentions(token))
        .count() as u32
        * TOKEN_WEIGHT;

    let area_points = KNOWN_AREAS
        .iter()
        .filter(|area| question.contains(*area) && text.location.contains(*area))
        .count() as u32
        * AREA_WEIGHT;

    token_points + area_points
}

/// Every listing in the selected categories with a positive score,
/// best first. Equal scores keep iteration order.
pub fn rank<'a>(
    question: &str,
    categories: &CategorySet,
    listings: &'a Listings,
) -> Vec<ScoredCandidate<'a>> {
    let question = question.trim().to_lowercase();
    let tokens = tokenize(&question);

    let mut candidates: Vec<ScoredCandidate<'a>> = categories
        .iter()
        .flat_map(|category| listings.get(*category))
        .map(|listing| ScoredCandidate {
            listing,
            score: score(&question, &tokens, listing),
        })
        .filter(|candidate| candidate.score > 0)
        .collect();

    // sort_by is stable: ties stay in category, then file, order
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates
}

/// The single listing eligible for the answer, if any scored above zero.
pub fn best_match<'a>(
    question: &str,
    categories: &CategorySet,
    listings: &'a Listings,
) -> Option<ScoredCandidate<'a>> {
    rank(question, categories, listings).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::intent::classify;
    use crate::models::Category;

    fn listing(name: &str, kind: &str, tags: &[&str], area: &str) -> Listing {
        Listing {
            name: name.into(),
            kind: Some(kind.into()),
            area: Some(area.into()),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            ..Listing::default()
        }
    }

    fn all() -> CategorySet {
        Category::ALL.into_iter().collect()
    }

    #[test]
    fn test_tokenize_drops_single_chars() {
        assert_eq!(tokenize("  A good  fish place "), vec!["good", "fish", "place"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("a b c").is_empty());
    }

    #[test]
    fn test_tokenize_counts_chars_not_bytes() {
        // "ی" is two bytes in UTF-8 but one character
        assert!(tokenize("ی").is_empty());
        assert_eq!(tokenize("ماهی"), vec!["ماهی"]);
    }

    #[test]
    fn test_pars_restaurant_scenario() {
        let listings = Listings {
            food: vec![listing("Pars Restaurant", "seafood", &["fish"], "Soro")],
            ..Listings::default()
        };
        let question = "good fish restaurant";

        let categories = classify(question);
        let best = best_match(question, &categories, &listings).unwrap();

        assert_eq!(best.listing.name, "Pars Restaurant");
        assert!(best.score >= 4);
    }

    #[test]
    fn test_flat_points_per_token() {
        // "fish" appears in name, type and tags but only counts once
        let item = listing("Fish House", "fish", &["fish"], "");
        let tokens = tokenize("fish");
        assert_eq!(score("fish", &tokens, &item), TOKEN_WEIGHT);
    }

    #[test]
    fn test_area_bonus_requires_both_sides() {
        let item = listing("Pars Restaurant", "seafood", &[], "Soro");

        let in_soro = "seafood in soro";
        assert_eq!(
            score(in_soro, &tokenize(in_soro), &item),
            TOKEN_WEIGHT + AREA_WEIGHT
        );

        let elsewhere = "seafood in golshahr";
        assert_eq!(score(elsewhere, &tokenize(elsewhere), &item), TOKEN_WEIGHT);
    }

    #[test]
    fn test_rank_normalizes_question_once() {
        let listings = Listings {
            food: vec![listing("Pars Restaurant", "seafood", &[], "Soro")],
            ..Listings::default()
        };
        let ranked = rank("  SEAFOOD in SORO ", &all(), &listings);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].score, TOKEN_WEIGHT + AREA_WEIGHT);
    }

    #[test]
    fn test_area_bonus_from_address() {
        let item = Listing {
            name: "Hormoz Hotel".into(),
            address: Some("Imam Khomeini Blvd, near the pier".into()),
            ..Listing::default()
        };
        let question = "something on imam khomeini";
        // "imam" and "khomeini" tokens are not in name/type/description/tags
        assert_eq!(score(question, &tokenize(question), &item), AREA_WEIGHT);
    }

    #[test]
    fn test_zero_scores_dropped() {
        let listings = Listings {
            places: vec![listing("Soro Beach", "beach", &["sunset"], "Soro")],
            ..Listings::default()
        };
        assert!(best_match("quiet library", &all(), &listings).is_none());
    }

    #[test]
    fn test_empty_question_has_no_candidates() {
        let listings = Listings {
            food: vec![listing("Pars Restaurant", "seafood", &["fish"], "Soro")],
            ..Listings::default()
        };
        assert!(best_match("", &all(), &listings).is_none());
        assert!(best_match("   ", &classify("   "), &listings).is_none());
    }

    #[test]
    fn test_only_selected_categories_searched() {
        let listings = Listings {
            food: vec![listing("Beach Grill", "grill", &["beach"], "")],
            stays: vec![listing("Beach Hotel", "hotel", &[], "")],
            ..Listings::default()
        };
        let categories: CategorySet = [Category::Stays].into_iter().collect();

        let ranked = rank("hotel by the beach", &categories, &listings);

        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].listing.name, "Beach Hotel");
    }

    #[test]
    fn test_highest_score_wins() {
        let listings = Listings {
            food: vec![
                listing("Dolphin Cafe", "cafe", &["coffee"], ""),
                listing("Pars Restaurant", "seafood", &["fish", "shrimp"], ""),
            ],
            ..Listings::default()
        };
        let best = best_match("fish and shrimp", &all(), &listings).unwrap();
        assert_eq!(best.listing.name, "Pars Restaurant");
        assert_eq!(best.score, 2 * TOKEN_WEIGHT);
    }

    #[test]
    fn test_ties_keep_iteration_order() {
        let listings = Listings {
            places: vec![listing("Sunset Beach", "beach", &[], "")],
            food: vec![
                listing("First Beach Cafe", "cafe", &[], ""),
                listing("Second Beach Cafe", "cafe", &[], ""),
            ],
            ..Listings::default()
        };

        // Places are iterated before food
        let best = best_match("beach", &all(), &listings).unwrap();
        assert_eq!(best.listing.name, "Sunset Beach");

        let food_only: CategorySet = [Category::Food].into_iter().collect();
        let best = best_match("beach", &food_only, &listings).unwrap();
        assert_eq!(best.listing.name, "First Beach Cafe");
    }

    #[test]
    fn test_score_monotonic_in_shared_tokens() {
        let item = Listing {
            name: "Pars Restaurant".into(),
            kind: Some("seafood".into()),
            description: Some("grilled fish by the harbor".into()),
            tags: vec!["shrimp".into()],
            ..Listing::default()
        };

        let questions = [
            "pars",
            "pars seafood",
            "pars seafood grilled",
            "pars seafood grilled shrimp",
            "pars seafood grilled shrimp harbor",
        ];

        let scores: Vec<u32> = questions
            .iter()
            .map(|q| score(q, &tokenize(q), &item))
            .collect();

        assert!(scores.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(scores.last(), Some(&(5 * TOKEN_WEIGHT)));
    }
}
