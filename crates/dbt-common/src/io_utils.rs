/// Joins up to `n` items with `, `, summarizing the remainder as "and N others".
pub fn and_n_others(n: usize, items: &[impl ToString]) -> String {
    if items.len() > n {
        format!(
            "{} and {} others",
            items
                .iter()
                .take(n)
                .map(|id| id.to_string())
                .collect::<Vec<_>>()
                .join(", "),
            items.len() - n
        )
    } else {
        items
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
