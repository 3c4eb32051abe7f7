//! Pure derived views over the firm catalog: range/search filtering, sort
//! orders, and the small metrics the cards display.

use std::cmp::Ordering;

use crate::model::firm::PropFirm;

/// Inclusive range and free-text filters for the firm list sidebar.
///
/// The default passes everything; the sidebar narrows from there.
#[derive(Debug, Clone, PartialEq)]
pub struct FirmFilters {
    pub min_price: f64,
    pub max_price: f64,
    pub min_review_score: f64,
    pub max_review_score: f64,
    pub min_trust_rating: f64,
    pub max_trust_rating: f64,
    pub search_term: String,
}

impl Default for FirmFilters {
    fn default() -> Self {
        Self {
            min_price: 0.0,
            max_price: f64::INFINITY,
            min_review_score: 0.0,
            max_review_score: f64::INFINITY,
            min_trust_rating: 0.0,
            max_trust_rating: f64::INFINITY,
            search_term: String::new(),
        }
    }
}

impl FirmFilters {
    /// A firm passes when every range holds and, if a search term is set,
    /// the term is a case-insensitive substring of name, brand, or
    /// description.
    pub fn matches(&self, firm: &PropFirm) -> bool {
        if firm.price < self.min_price || firm.price > self.max_price {
            return false;
        }
        if firm.review_score < self.min_review_score || firm.review_score > self.max_review_score {
            return false;
        }
        if firm.trust_rating < self.min_trust_rating || firm.trust_rating > self.max_trust_rating {
            return false;
        }
        let term = self.search_term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        firm.name.to_lowercase().contains(&term)
            || firm.brand.to_lowercase().contains(&term)
            || firm.description.to_lowercase().contains(&term)
    }
}

pub fn filter_firms(firms: &[PropFirm], filters: &FirmFilters) -> Vec<PropFirm> {
    firms
        .iter()
        .filter(|firm| filters.matches(firm))
        .cloned()
        .collect()
}

/// Sort order selectable from the list header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending; cheapest first.
    Price,
    /// Descending review score.
    Review,
    /// Descending trust rating.
    Trust,
    /// Descending payout rate.
    Payout,
}

impl SortKey {
    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Price => "Price (Low to High)",
            SortKey::Review => "Review Score",
            SortKey::Trust => "Trust Rating",
            SortKey::Payout => "Payout Rate",
        }
    }
}

/// Stable sort by the selected key; ties keep their input order.
pub fn sort_firms(firms: &mut [PropFirm], key: SortKey) {
    firms.sort_by(|a, b| match key {
        SortKey::Price => cmp_f64(a.price, b.price),
        SortKey::Review => cmp_f64(b.review_score, a.review_score),
        SortKey::Trust => cmp_f64(b.trust_rating, a.trust_rating),
        SortKey::Payout => cmp_f64(b.payout_rate, a.payout_rate),
    });
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Rounded percentage knocked off the original price.
///
/// An original price of zero (or a price above it) yields 0 rather than a
/// non-finite or negative value.
pub fn discount_percentage(price: f64, original_price: f64) -> u32 {
    if original_price <= 0.0 {
        return 0;
    }
    let pct = ((original_price - price) / original_price * 100.0).round();
    pct.max(0.0) as u32
}

/// The "top firms" strip: highest combined review score + trust rating,
/// ties kept in input order, first `n` taken.
pub fn top_firms(firms: &[PropFirm], n: usize) -> Vec<PropFirm> {
    let mut ranked = firms.to_vec();
    ranked.sort_by(|a, b| {
        cmp_f64(
            b.review_score + b.trust_rating,
            a.review_score + a.trust_rating,
        )
    });
    ranked.truncate(n);
    ranked
}

/// Cheapest `n` firms, ascending by price.
pub fn cheapest_firms(firms: &[PropFirm], n: usize) -> Vec<PropFirm> {
    let mut ranked = firms.to_vec();
    sort_firms(&mut ranked, SortKey::Price);
    ranked.truncate(n);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn firm(name: &str, price: f64, review: f64, trust: f64) -> PropFirm {
        PropFirm {
            id: name.to_lowercase(),
            name: name.to_string(),
            brand: String::new(),
            category_id: None,
            price,
            original_price: price,
            coupon_code: None,
            review_score: review,
            trust_rating: trust,
            description: String::new(),
            features: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            logo_url: None,
            profit_split: 80.0,
            payout_rate: 90.0,
            funding_amount: "$10K-$600K".to_string(),
            starting_fee: 0.0,
            user_review_count: 0,
            affiliate_url: None,
            created_at: "2024-01-01T00:00:00Z".to_string(),
            user_id: None,
        }
    }

    #[test]
    fn discount_rounds_to_whole_percent() {
        assert_eq!(discount_percentage(179.0, 299.0), 40);
        assert_eq!(discount_percentage(125.0, 250.0), 50);
    }

    #[test]
    fn discount_guards_zero_and_inverted_prices() {
        assert_eq!(discount_percentage(179.0, 0.0), 0);
        assert_eq!(discount_percentage(300.0, 299.0), 0);
    }

    #[test]
    fn price_sort_is_ascending() {
        let mut firms = vec![
            firm("A", 199.0, 4.0, 8.0),
            firm("B", 125.0, 4.5, 9.0),
            firm("C", 289.0, 4.8, 7.0),
        ];
        sort_firms(&mut firms, SortKey::Price);
        let prices: Vec<f64> = firms.iter().map(|f| f.price).collect();
        assert_eq!(prices, vec![125.0, 199.0, 289.0]);
    }

    #[test]
    fn review_sort_is_descending() {
        let mut firms = vec![firm("A", 0.0, 4.0, 0.0), firm("B", 0.0, 4.9, 0.0)];
        sort_firms(&mut firms, SortKey::Review);
        assert_eq!(firms[0].name, "B");
    }

    #[test]
    fn search_term_matches_name_case_insensitively() {
        let firms = vec![firm("FTMO", 155.0, 4.8, 9.0), firm("E8 Markets", 138.0, 4.3, 8.0)];
        let filters = FirmFilters {
            search_term: "ftmo".to_string(),
            ..FirmFilters::default()
        };
        let hits = filter_firms(&firms, &filters);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "FTMO");
    }

    #[test]
    fn search_term_also_matches_brand_and_description() {
        let mut branded = firm("Alpha", 100.0, 4.0, 8.0);
        branded.brand = "FundedNext".to_string();
        let mut described = firm("Beta", 100.0, 4.0, 8.0);
        described.description = "A well known futures desk".to_string();
        let firms = vec![branded, described];

        let by_brand = FirmFilters {
            search_term: "fundednext".to_string(),
            ..FirmFilters::default()
        };
        assert_eq!(filter_firms(&firms, &by_brand).len(), 1);

        let by_description = FirmFilters {
            search_term: "futures".to_string(),
            ..FirmFilters::default()
        };
        assert_eq!(filter_firms(&firms, &by_description)[0].name, "Beta");
    }

    #[test]
    fn ranges_are_inclusive() {
        let firms = vec![firm("A", 100.0, 4.0, 8.0)];
        let filters = FirmFilters {
            min_price: 100.0,
            max_price: 100.0,
            min_review_score: 4.0,
            max_review_score: 4.0,
            min_trust_rating: 8.0,
            max_trust_rating: 8.0,
            ..FirmFilters::default()
        };
        assert_eq!(filter_firms(&firms, &filters).len(), 1);
    }

    #[test]
    fn out_of_range_price_is_rejected() {
        let firms = vec![firm("A", 500.0, 4.0, 8.0)];
        let filters = FirmFilters {
            max_price: 300.0,
            ..FirmFilters::default()
        };
        assert!(filter_firms(&firms, &filters).is_empty());
    }

    #[test]
    fn top_firms_ranks_by_combined_score_with_stable_ties() {
        let firms = vec![
            firm("A", 0.0, 4.0, 8.0),  // 12.0
            firm("B", 0.0, 4.5, 9.5),  // 14.0
            firm("C", 0.0, 4.0, 10.0), // 14.0, ties with B, stays after it
            firm("D", 0.0, 3.0, 5.0),  // 8.0
        ];
        let top = top_firms(&firms, 3);
        let names: Vec<&str> = top.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C", "A"]);
    }

    #[test]
    fn cheapest_firms_takes_the_low_priced_slice() {
        let firms = vec![
            firm("A", 199.0, 0.0, 0.0),
            firm("B", 125.0, 0.0, 0.0),
            firm("C", 289.0, 0.0, 0.0),
        ];
        let cheap = cheapest_firms(&firms, 2);
        let names: Vec<&str> = cheap.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }
}
