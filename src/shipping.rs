//! Shipping rates

use thiserror::Error;

use crate::money::Amount;

/// No carrier identifier survived normalisation.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("No valid carrier IDs found.")]
pub struct NoCarrierIds;

/// The rate id is not part of the returned rate set.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown shipping rate: {0}")]
pub struct UnknownRate(pub String);

/// A shipping cost quote for one carrier/service combination.
#[derive(Debug, Clone, PartialEq)]
pub struct ShippingRate {
    /// Provider-assigned rate id
    pub rate_id: String,

    /// Carrier service, e.g. `"ups_ground"`
    pub service_type: String,

    /// Quoted shipping cost
    pub amount: Amount,

    /// Estimated delivery date as reported by the provider
    pub estimated_delivery_date: String,
}

/// A shipment endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShipmentAddress {
    /// Contact name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Street address
    pub address_line1: String,

    /// City
    pub city_locality: String,

    /// State or province code
    pub state_province: String,

    /// Postal code
    pub postal_code: String,

    /// ISO 3166-1 alpha-2 country code
    pub country_code: String,
}

/// Parameters of a rate quote.
///
/// The default is the storefront's fixed warehouse origin, a fixed destination and a
/// one pound parcel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RateQuery {
    /// Ship-from address
    pub from: ShipmentAddress,

    /// Ship-to address
    pub to: ShipmentAddress,

    /// Parcel weight in pounds
    pub weight_lbs: u32,
}

impl Default for RateQuery {
    fn default() -> Self {
        Self {
            from: ShipmentAddress {
                name: "Yusra Saleem".to_string(),
                phone: "+92 3102983718".to_string(),
                address_line1: "123 Main St".to_string(),
                city_locality: "Austin".to_string(),
                state_province: "TX".to_string(),
                postal_code: "78756".to_string(),
                country_code: "US".to_string(),
            },
            to: ShipmentAddress {
                name: "Jane Doe".to_string(),
                phone: "0987654321".to_string(),
                address_line1: "456 Elm St".to_string(),
                city_locality: "New York".to_string(),
                state_province: "NY".to_string(),
                postal_code: "10001".to_string(),
                country_code: "US".to_string(),
            },
            weight_lbs: 1,
        }
    }
}

/// Carrier identifiers, normalised and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarrierIds(Vec<String>);

impl CarrierIds {
    /// Normalise configured carrier ids: trim, strip quote characters, drop blanks.
    ///
    /// # Errors
    ///
    /// Returns [`NoCarrierIds`] when nothing remains.
    pub fn from_configured<I, S>(values: I) -> Result<Self, NoCarrierIds>
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let ids: Vec<String> = values
            .into_iter()
            .flatten()
            .map(|value| value.as_ref().trim().replace(['\'', '"'], ""))
            .filter(|value| !value.is_empty())
            .collect();

        if ids.is_empty() {
            return Err(NoCarrierIds);
        }

        Ok(Self(ids))
    }

    /// The identifiers, in configuration order.
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }
}

/// A returned rate set and the shopper's choice within it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RateSelection {
    rates: Vec<ShippingRate>,
    selected: Option<usize>,
}

impl RateSelection {
    /// Start a selection over freshly fetched rates; nothing is selected.
    pub fn new(rates: Vec<ShippingRate>) -> Self {
        Self {
            rates,
            selected: None,
        }
    }

    /// Select the rate with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`UnknownRate`] if no returned rate has that id.
    pub fn select(&mut self, rate_id: &str) -> Result<&ShippingRate, UnknownRate> {
        let index = self
            .rates
            .iter()
            .position(|rate| rate.rate_id == rate_id)
            .ok_or_else(|| UnknownRate(rate_id.to_string()))?;

        self.selected = Some(index);

        self.rates
            .get(index)
            .ok_or_else(|| UnknownRate(rate_id.to_string()))
    }

    /// The selected rate, if any.
    pub fn selected(&self) -> Option<&ShippingRate> {
        self.selected.and_then(|index| self.rates.get(index))
    }

    /// Every returned rate.
    pub fn rates(&self) -> &[ShippingRate] {
        &self.rates
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::fixtures::shipping_rate;

    use super::*;

    #[test]
    fn carrier_ids_are_trimmed_and_unquoted() -> TestResult {
        let ids = CarrierIds::from_configured([
            Some(" \"se-123\" "),
            None,
            Some("'se-456'"),
            Some("   "),
        ])?;

        assert_eq!(ids.as_slice(), ["se-123", "se-456"]);

        Ok(())
    }

    #[test]
    fn no_carrier_ids_errors() {
        let result = CarrierIds::from_configured([None, Some("\"\""), Some(" ")]);

        assert_eq!(result, Err(NoCarrierIds));
    }

    #[test]
    fn selecting_a_returned_rate() -> TestResult {
        let mut selection = RateSelection::new(vec![
            shipping_rate("se-1", 9_99),
            shipping_rate("se-2", 19_99),
        ]);

        assert!(selection.selected().is_none());

        selection.select("se-2")?;

        assert_eq!(selection.selected().map(|r| r.rate_id.as_str()), Some("se-2"));

        Ok(())
    }

    #[test]
    fn selecting_unknown_rate_keeps_previous_choice() -> TestResult {
        let mut selection = RateSelection::new(vec![shipping_rate("se-1", 9_99)]);
        selection.select("se-1")?;

        let result = selection.select("se-9");

        assert_eq!(
            result.map(|r| r.rate_id.clone()),
            Err(UnknownRate("se-9".to_string()))
        );
        assert_eq!(selection.selected().map(|r| r.rate_id.as_str()), Some("se-1"));

        Ok(())
    }
}
