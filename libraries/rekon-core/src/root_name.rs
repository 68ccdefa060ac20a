//! Root Name derivation
//!
//! Alternate takes of one audio file carry a `-<digits>` suffix right before
//! the extension (`intro-2.mp3`, `intro-12.mp3`). Their Root Name is the file
//! name with that suffix removed, so all takes group under `intro.mp3`.

/// Derive the Root Name of a file name or `/`-separated path.
///
/// Only the final path component is considered. The comparison key is
/// case-sensitive; no other normalization is applied.
pub fn root_name(path: &str) -> String {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    let (stem, extension) = split_extension(file_name);
    format!("{}{}", strip_take_suffix(stem), extension)
}

/// Split `name` into stem and extension (extension keeps its leading dot).
///
/// A leading dot marks a hidden file, not an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(dot) if dot > 0 => name.split_at(dot),
        _ => (name, ""),
    }
}

/// Remove a trailing `-<digits>` run from a stem.
fn strip_take_suffix(stem: &str) -> &str {
    let Some(dash) = stem.rfind('-') else {
        return stem;
    };
    let digits = &stem[dash + 1..];
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        &stem[..dash]
    } else {
        stem
    }
}
