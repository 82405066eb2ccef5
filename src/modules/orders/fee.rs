//! Delivery, cash-on-delivery and total fee calculation.
//!
//! Fees are derived once, when an order is created, from the recipient city,
//! the item weight and the amount to collect. They are stored with the order
//! and never recomputed.

/// City code that gets the discounted delivery tiers.
pub const PREFERENTIAL_CITY: i32 = 1;

const PREFERENTIAL_UP_TO_HALF_KG: f64 = 60.0;
const PREFERENTIAL_UP_TO_ONE_KG: f64 = 70.0;
const STANDARD_BASE_FEE: f64 = 100.0;
const PER_EXTRA_KG: f64 = 15.0;
const COD_RATE: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fees {
    pub delivery_fee: f64,
    pub cod_fee: f64,
    pub total_fee: f64,
}

/// Delivery fee for a parcel of `item_weight` kilograms going to `recipient_city`.
///
/// Outside the preferential city there are no sub-tiers: the fee is
/// `100 + 15 * ceil(weight - 1)` for every weight, so the extra-kilogram
/// term can be zero or negative for parcels under a kilogram.
pub fn delivery_fee(recipient_city: i32, item_weight: f64) -> f64 {
    if recipient_city == PREFERENTIAL_CITY {
        if item_weight <= 0.5 {
            PREFERENTIAL_UP_TO_HALF_KG
        } else if item_weight <= 1.0 {
            PREFERENTIAL_UP_TO_ONE_KG
        } else {
            PREFERENTIAL_UP_TO_ONE_KG + PER_EXTRA_KG * (item_weight - 1.0).ceil()
        }
    } else {
        STANDARD_BASE_FEE + PER_EXTRA_KG * (item_weight - 1.0).ceil()
    }
}

/// Cash-on-delivery handling fee: 1% of the amount to collect.
pub fn cod_fee(amount_to_collect: f64) -> f64 {
    amount_to_collect * COD_RATE
}

/// Callers are expected to have rejected zero weights and amounts already.
pub fn calculate_fees(recipient_city: i32, item_weight: f64, amount_to_collect: f64) -> Fees {
    let delivery_fee = delivery_fee(recipient_city, item_weight);
    let cod_fee = cod_fee(amount_to_collect);

    Fees {
        delivery_fee,
        cod_fee,
        total_fee: amount_to_collect + cod_fee + delivery_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.1, 60.0)]
    #[case(0.5, 60.0)]
    #[case(0.51, 70.0)]
    #[case(1.0, 70.0)]
    #[case(1.01, 85.0)]
    #[case(1.5, 85.0)]
    #[case(2.0, 85.0)]
    #[case(2.2, 100.0)]
    #[case(5.0, 130.0)]
    fn test_preferential_city_tiers(#[case] weight: f64, #[case] expected: f64) {
        assert_eq!(delivery_fee(PREFERENTIAL_CITY, weight), expected);
    }

    #[rstest]
    #[case(2, 0.5, 100.0)]
    #[case(2, 1.0, 100.0)]
    #[case(3, 1.5, 115.0)]
    #[case(7, 2.3, 130.0)]
    #[case(0, 4.0, 145.0)]
    fn test_standard_city_formula(#[case] city: i32, #[case] weight: f64, #[case] expected: f64) {
        assert_eq!(delivery_fee(city, weight), expected);
    }

    #[test]
    fn test_standard_city_extra_term_can_go_negative() {
        // ceil(0.0 - 1) = -1, the formula is applied as-is without a floor
        assert_eq!(delivery_fee(2, 0.0), 85.0);
        assert_eq!(delivery_fee(2, -1.5), 70.0);
    }

    #[rstest]
    #[case(0.0, 0.0)]
    #[case(100.0, 1.0)]
    #[case(500.0, 5.0)]
    #[case(1234.0, 12.34)]
    fn test_cod_fee_is_one_percent(#[case] amount: f64, #[case] expected: f64) {
        assert!((cod_fee(amount) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_total_fee_sums_components() {
        let fees = calculate_fees(PREFERENTIAL_CITY, 1.5, 500.0);
        assert_eq!(fees.delivery_fee, 85.0);
        assert_eq!(fees.cod_fee, 5.0);
        assert_eq!(fees.total_fee, 590.0);

        let fees = calculate_fees(9, 3.0, 250.0);
        assert_eq!(fees.delivery_fee, 130.0);
        assert_eq!(fees.total_fee, 250.0 + fees.cod_fee + 130.0);
    }
}
