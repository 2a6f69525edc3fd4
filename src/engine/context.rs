use crate::models::Listing;

/// Marks where the model's answer starts in the prompt
pub const ANSWER_MARKER: &str = "Answer:";

/// System instructions - pins the model to a single allowed listing
pub fn system_prompt(listing_name: &str, language: &str) -> String {
    format!(
        r#"You are BandarAbbas AI, a friendly local guide for the city of Bandar Abbas.

Rules:
- The only place you may use: {name}
- Do not mention, invent or suggest any other place
- Talk like a helpful local friend, warm and conversational
- Answer in 3 to 5 sentences
- Answer in {language}
- Mention the exact name "{name}" in your answer"#,
        name = listing_name,
        language = language,
    )
}

/// One-line summary of a listing, empty fields omitted
pub fn format_listing(listing: &Listing) -> String {
    let location = match (non_empty(&listing.area), non_empty(&listing.address)) {
        (Some(area), Some(address)) => Some(format!("{} - {}", area, address)),
        (Some(one), None) | (None, Some(one)) => Some(one.to_string()),
        (None, None) => None,
    };

    let tags = listing
        .tags
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    [
        Some(listing.name.trim().to_string()),
        non_empty(&listing.kind).map(String::from),
        location,
        non_empty(&listing.price_level).map(String::from),
        Some(tags),
        non_empty(&listing.description).map(String::from),
    ]
    .into_iter()
    .flatten()
    .filter(|field| !field.is_empty())
    .collect::<Vec<_>>()
    .join(" | ")
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Build the complete prompt sent to the model
pub fn build_prompt(question: &str, listing: &Listing, language: &str) -> String {
    format!(
        "{system}\n\n---\n\nPlace data:\n{data}\n\n---\n\nQuestion: {question}\n\n{marker}",
        system = system_prompt(&listing.name, language),
        data = format_listing(listing),
        question = question.trim(),
        marker = ANSWER_MARKER,
    )
}

/// Clean a raw completion: drop a leading answer marker and surrounding
/// whitespace. Returns `None` if nothing usable remains.
pub fn sanitize_completion(raw: &str) -> Option<String> {
    let text = raw.trim_start();
    let text = text.strip_prefix(ANSWER_MARKER).unwrap_or(text).trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Guarantee the listing's exact name reaches the user.
pub fn ensure_listing_named(reply: &str, listing_name: &str) -> String {
    if reply.contains(listing_name) {
        reply.to_string()
    } else {
        format!("I recommend {}. {}", listing_name, reply)
    }
}

/// Reply used whenever generation fails
pub fn fallback_reply(listing_name: &str) -> String {
    format!("a few suitable options: {}", listing_name)
}
