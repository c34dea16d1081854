use bigdecimal::BigDecimal;
use std::collections::HashMap;
use std::str::FromStr;

#[derive(Debug)]
pub enum Error {
    UnresolvablePrice { dish_id: String },
}

/// Prices a cart against the catalog as it stands right now. The result is
/// a snapshot: later price changes must never touch an existing order.
/// Any cart line whose dish is missing from the price map, or whose stored
/// price does not parse as a decimal, fails the whole computation.
pub fn price_cart(
    prices: &HashMap<String, String>,
    cart: &[(String, i32)],
) -> Result<BigDecimal, Error> {
    cart.iter()
        .try_fold(BigDecimal::from(0), |total, (dish_id, quantity)| {
            let price = prices
                .get(dish_id)
                .and_then(|raw| BigDecimal::from_str(raw).ok())
                .ok_or(Error::UnresolvablePrice {
                    dish_id: dish_id.clone(),
                })?;

            Ok(total + price * BigDecimal::from(*quantity))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> HashMap<String, String> {
        HashMap::from([
            (String::from("dish-a"), String::from("10.00")),
            (String::from("dish-b"), String::from("5.50")),
        ])
    }

    #[test]
    fn totals_are_price_times_quantity_summed() {
        let cart = vec![(String::from("dish-a"), 2), (String::from("dish-b"), 1)];

        let total = price_cart(&catalog(), &cart).unwrap();

        assert_eq!(total, BigDecimal::from_str("25.50").unwrap());
    }

    #[test]
    fn an_empty_cart_costs_nothing() {
        assert_eq!(price_cart(&catalog(), &[]).unwrap(), BigDecimal::from(0));
    }

    #[test]
    fn a_missing_dish_fails_the_whole_cart() {
        let cart = vec![(String::from("dish-a"), 1), (String::from("dish-x"), 1)];

        assert!(matches!(
            price_cart(&catalog(), &cart),
            Err(Error::UnresolvablePrice { dish_id }) if dish_id == "dish-x"
        ));
    }

    #[test]
    fn an_unparseable_stored_price_fails_the_whole_cart() {
        let prices = HashMap::from([(String::from("dish-a"), String::from("not-a-price"))]);
        let cart = vec![(String::from("dish-a"), 1)];

        assert!(matches!(
            price_cart(&prices, &cart),
            Err(Error::UnresolvablePrice { .. })
        ));
    }
}
