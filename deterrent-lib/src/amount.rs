use serde::{Deserialize, Serialize};

/// A monetary amount in a single currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Amount {
    /// The ISO-4217 currency code
    pub currency: String,

    /// The amount, in minor units of the currency (pence, cents, ...)
    pub minor_units: i64,
}

impl Amount {
    /// Sum a batch of amounts into a single total.
    ///
    /// Currencies are assumed uniform across the batch and are not validated;
    /// the total takes its currency from `fallback_currency`, which also
    /// defines the zero total for an empty batch.
    #[must_use]
    pub fn total<'a>(
        amounts: impl IntoIterator<Item = &'a Self>,
        fallback_currency: &str,
    ) -> Self {
        let minor_units = amounts.into_iter().map(|amount| amount.minor_units).sum();

        Self {
            currency: fallback_currency.to_string(),
            minor_units,
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::Amount;

    #[test_case(&[] => 0; "empty batch is the zero total")]
    #[test_case(&[500] => 500; "single amount")]
    #[test_case(&[500, 250] => 750; "amounts are summed")]
    fn total(minor_units: &[i64]) -> i64 {
        let amounts: Vec<_> = minor_units
            .iter()
            .map(|&minor_units| Amount {
                currency: "GBP".to_string(),
                minor_units,
            })
            .collect();

        let total = Amount::total(&amounts, "GBP");
        assert_eq!(total.currency, "GBP");
        total.minor_units
    }

    #[test]
    fn empty_total_takes_the_fallback_currency() {
        let total = Amount::total([], "EUR");
        assert_eq!(total, Amount {
            currency: "EUR".to_string(),
            minor_units: 0,
        });
    }
}
