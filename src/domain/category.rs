/// Normalize a category name to title case.
///
/// The first letter of every alphabetic run is upper-cased and the remaining
/// letters lower-cased, so "food", "FOOD" and " fOoD " all become "Food" and
/// "eating out" becomes "Eating Out". Non-alphabetic characters are kept as-is
/// and start a new word.
pub fn normalize_category(raw: &str) -> String {
    let mut normalized = String::with_capacity(raw.len());
    let mut in_word = false;

    for c in raw.trim().chars() {
        if c.is_alphabetic() {
            if in_word {
                normalized.extend(c.to_lowercase());
            } else {
                normalized.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            normalized.push(c);
            in_word = false;
        }
    }

    normalized
}
