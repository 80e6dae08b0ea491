use crate::domain::model::{Fulfillment, Stock};
use std::num::NonZeroU64;

/// Number of full batches of `size` in `count`.
pub fn get_batches(count: u64, size: NonZeroU64) -> u64 {
    count / size.get()
}

fn batches_for(stock: &Stock, name: &str, size: NonZeroU64) -> u64 {
    get_batches(stock.get(name).copied().unwrap_or(0), size)
}

/// Explicit loop: look up, divide, keep non-zero.
pub fn fulfill_with_loop(stock: &Stock, order: &[String], size: NonZeroU64) -> Fulfillment {
    let mut result = Fulfillment::new();

    for name in order {
        let batches = batches_for(stock, name, size);
        if batches > 0 {
            result.insert(name.clone(), batches);
        }
    }

    result
}

/// Iterator form that computes the batch count once in the filter and again
/// in the map. Both expressions must be kept in sync by hand.
pub fn fulfill_recomputing(stock: &Stock, order: &[String], size: NonZeroU64) -> Fulfillment {
    order
        .iter()
        .filter(|name| batches_for(stock, name, size) > 0)
        .map(|name| (name.clone(), batches_for(stock, name, size)))
        .collect()
}

/// Binds the batch count once and filters on the named value.
pub fn fulfill(stock: &Stock, order: &[String], size: NonZeroU64) -> Fulfillment {
    order
        .iter()
        .filter_map(|name| {
            let batches = batches_for(stock, name, size);
            (batches > 0).then(|| (name.clone(), batches))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock() -> Stock {
        [("nails", 125), ("screws", 35), ("wingnuts", 8), ("washers", 24)]
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect()
    }

    fn order(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    fn size(n: u64) -> NonZeroU64 {
        NonZeroU64::new(n).unwrap()
    }

    #[test]
    fn test_get_batches_truncates() {
        assert_eq!(get_batches(35, size(8)), 4);
        assert_eq!(get_batches(8, size(8)), 1);
        assert_eq!(get_batches(7, size(8)), 0);
        assert_eq!(get_batches(0, size(8)), 0);
    }

    #[test]
    fn test_fulfill_golden_order() {
        let found = fulfill(&stock(), &order(&["screws", "wingnuts", "clips"]), size(8));

        let expected: Fulfillment = [("screws".to_string(), 4), ("wingnuts".to_string(), 1)]
            .into_iter()
            .collect();
        assert_eq!(found, expected);
        assert!(!found.contains_key("clips"));
        assert!(!found.contains_key("nails"));
    }

    #[test]
    fn test_all_formulations_agree() {
        let stock = stock();
        let cases = [
            order(&["screws", "wingnuts", "clips"]),
            order(&["nails", "washers"]),
            order(&[]),
            order(&["clips", "bolts"]),
        ];

        for batch_size in [1, 3, 8, 200] {
            for requested in &cases {
                let expected = fulfill_with_loop(&stock, requested, size(batch_size));
                assert_eq!(fulfill_recomputing(&stock, requested, size(batch_size)), expected);
                assert_eq!(fulfill(&stock, requested, size(batch_size)), expected);
            }
        }
    }

    #[test]
    fn test_result_follows_order_not_name() {
        let requested = order(&["wingnuts", "clips", "screws"]);
        let stock = stock();

        for found in [
            fulfill_with_loop(&stock, &requested, size(8)),
            fulfill_recomputing(&stock, &requested, size(8)),
            fulfill(&stock, &requested, size(8)),
        ] {
            assert_eq!(format!("{:?}", found), r#"{"wingnuts": 1, "screws": 4}"#);
        }
    }

    #[test]
    fn test_batch_size_larger_than_stock_ships_nothing() {
        let found = fulfill(&stock(), &order(&["nails", "screws"]), size(500));
        assert!(found.is_empty());
    }

    #[test]
    fn test_repeated_item_appears_once() {
        let found = fulfill(&stock(), &order(&["screws", "screws"]), size(8));
        assert_eq!(found.len(), 1);
        assert_eq!(found.get("screws"), Some(&4));
    }
}
