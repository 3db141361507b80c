//! Field mask projection

/// Join remote field paths into a mask, dropping blanks and duplicates
///
/// The first occurrence of a path keeps its position.
pub fn build_mask<'a, I>(paths: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut kept: Vec<&str> = Vec::new();
    for path in paths {
        let path = path.trim();
        if path.is_empty() || kept.contains(&path) {
            continue;
        }
        kept.push(path);
    }
    kept.join(",")
}
