use crate::models::{Sale, Summary};

const SEP_WIDTH: usize = 60;
const ITEM_WIDTH: usize = 50;

/// Render the ranked sales report as text.
///
/// Counties are sorted by total sales descending and truncated to
/// `top_counties`; within each county, sales are sorted by price
/// descending and truncated to `top_sales`. Each county block starts
/// with a blank line (including the first), then
/// `NN. COUNTY… $mean $total`, a 60-dash separator, and one line per
/// sale: `YYYY-MM] item… $price` with the item cut to its first 50
/// characters. Dollar values always carry two decimals.
///
/// The relative order of counties with equal totals is whatever the
/// stable sort preserves from the input order; it is not a guaranteed
/// part of the format.
pub fn render(entries: &[(Summary, Vec<Sale>)], top_counties: usize, top_sales: usize) -> String {
    let mut ranked: Vec<&(Summary, Vec<Sale>)> = entries.iter().collect();
    ranked.sort_by(|a, b| b.0.total.total_cmp(&a.0.total));
    ranked.truncate(top_counties);

    let sep = "-".repeat(SEP_WIDTH);
    let mut out = String::new();
    for (counter, (summary, sales)) in ranked.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{:02}. {:<52} ${:.2} ${:.2}\n",
            counter + 1,
            summary.county,
            summary.mean,
            summary.total
        ));
        out.push_str(&sep);
        out.push('\n');

        let mut top: Vec<&Sale> = sales.iter().collect();
        top.sort_by(|a, b| b.price.total_cmp(&a.price));
        top.truncate(top_sales);
        for s in top {
            out.push_str(&format!(
                "{}] {:<50} ${:.2}\n",
                s.date.format("%Y-%m"),
                truncate_chars(&s.item, ITEM_WIDTH),
                s.price
            ));
        }
    }
    out
}

/// First `n` characters of `s` (counted in chars, not bytes).
fn truncate_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::truncate_chars;

    #[test]
    fn truncate_is_char_based() {
        assert_eq!(truncate_chars("abcdef", 3), "abc");
        assert_eq!(truncate_chars("ab", 50), "ab");
        assert_eq!(truncate_chars("äöüß", 2), "äö");
    }
}
