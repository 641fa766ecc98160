use proptest::prelude::*;
use training_data::movement::{Movement, label_movements};

proptest! {
    #[test]
    fn last_label_is_unknown_and_others_compare_neighbours(
        prices in prop::collection::vec(0.0f64..1_000.0, 1..64)
    ) {
        let wrapped: Vec<Option<f64>> = prices.iter().copied().map(Some).collect();
        let labels = label_movements(&wrapped);

        prop_assert_eq!(labels.len(), prices.len());
        prop_assert_eq!(*labels.last().unwrap(), Movement::Unknown);
        for (i, label) in labels.iter().enumerate().take(prices.len() - 1) {
            let want = if prices[i + 1] > prices[i] {
                Movement::Up
            } else if prices[i + 1] < prices[i] {
                Movement::Down
            } else {
                Movement::Flat
            };
            prop_assert_eq!(*label, want);
        }
    }
}

#[test]
fn documented_example() {
    let labels: Vec<&str> = label_movements(&[Some(100.0), Some(110.0), Some(90.0)])
        .into_iter()
        .map(Movement::as_label)
        .collect();
    assert_eq!(labels, ["1", "0", "N/A"]);
}
