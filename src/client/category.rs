//! Link Categories
//!
//! A category is a display label derived on the client. It is not a stored
//! field: when a link is saved its category is written as the first tag, and
//! when links are loaded the category is read back from the tags or detected
//! from the url and title.

use crate::shared::Link;

/// Labels offered even before any link uses them
pub const PREDEFINED: [&str; 5] = ["Movie", "Videos", "Images", "YouTube", "Sports"];

const IMAGE_EXTENSIONS: [&str; 6] = [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".svg"];
const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".mov", ".webm"];

/// Guess a category from `url` and `title`
///
/// Rules are tried in order: YouTube, Images, Videos, Movie, Sports.
/// Matching is case-insensitive substring matching on either field, except
/// file extensions which must end the url.
pub fn detect(url: &str, title: &str) -> Option<&'static str> {
    let url = url.to_lowercase();
    let title = title.to_lowercase();
    let either = |needle: &str| url.contains(needle) || title.contains(needle);
    let ends_with_any = |exts: &[&str]| exts.iter().any(|ext| url.ends_with(ext));

    if url.contains("youtube.com") || url.contains("youtu.be") || either("youtube") {
        return Some("YouTube");
    }
    if ends_with_any(&IMAGE_EXTENSIONS[..])
        || ["unsplash", "pexels", "pixabay", "image", "photo"]
            .iter()
            .any(|&n| either(n))
    {
        return Some("Images");
    }
    if url.contains("video") || ends_with_any(&VIDEO_EXTENSIONS[..]) || either("video") {
        return Some("Videos");
    }
    if url.contains("imdb") || url.contains("netflix") || either("movie") || either("film") {
        return Some("Movie");
    }
    if ["espn", "cric", "sport", "football", "soccer"]
        .iter()
        .any(|&n| either(n))
    {
        return Some("Sports");
    }
    None
}

/// Predefined label matching `value` case-insensitively
pub fn predefined_label(value: &str) -> Option<&'static str> {
    let value = value.trim();
    PREDEFINED
        .iter()
        .copied()
        .find(|label| label.eq_ignore_ascii_case(value))
}

/// Category label to store when saving a link
///
/// An explicit `choice` wins: it takes the casing of a matching `known`
/// label, otherwise its first letter is capitalised. Without a choice the
/// label is detected from the url.
pub fn resolve_for_save(choice: Option<&str>, url: &str, known: &[String]) -> Option<String> {
    match choice.map(str::trim).filter(|c| !c.is_empty()) {
        Some(choice) => {
            let lowered = choice.to_lowercase();
            let label = known
                .iter()
                .find(|label| label.to_lowercase() == lowered)
                .cloned()
                .unwrap_or_else(|| capitalize(choice));
            Some(label)
        }
        None => detect(url, "").map(str::to_string),
    }
}

/// `tags` with `category` moved to the front, without a case-insensitive duplicate
pub fn tags_with_category(category: &str, tags: Vec<String>) -> Vec<String> {
    let key = category.to_lowercase();
    let mut out = vec![category.to_string()];
    out.extend(tags.into_iter().filter(|t| t.trim().to_lowercase() != key));
    out
}

/// Category of a loaded link
///
/// The first tag naming a predefined category, else the detected one.
pub fn category_of(link: &Link) -> Option<String> {
    link.tags
        .iter()
        .find_map(|tag| predefined_label(tag))
        .or_else(|| detect(&link.url, &link.title))
        .map(str::to_string)
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
