use std::fmt::{Debug, Display, Formatter};

/// Amount of money in the backend's currency (dollars).
#[repr(transparent)]
#[derive(Copy, Clone, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct Dollars(pub f64);

impl Display for Dollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Debug for Dollars {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.3}", self.0)
    }
}

ordered_float!(Dollars);

/// Energy price per megawatt-hour.
#[repr(transparent)]
#[derive(Copy, Clone, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct MegawattHourPrice(pub f64);

impl Display for MegawattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}/MWh", self.0)
    }
}

impl Debug for MegawattHourPrice {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}$/MWh", self.0)
    }
}

ordered_float!(MegawattHourPrice);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_two_decimals() {
        assert_eq!(Dollars(1234.5).to_string(), "$1234.50");
        assert_eq!(Dollars(-12.3).to_string(), "$-12.30");
    }

    #[test]
    fn test_price_display() {
        assert_eq!(MegawattHourPrice(49.999).to_string(), "$50.00/MWh");
    }
}
