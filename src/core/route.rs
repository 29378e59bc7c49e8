//! Route records

/// One airline route as read from the data file.
///
/// Every field is owned text, copied out of the input line. Altitudes stay
/// text because nothing ranks by them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Route {
    pub airline_name: String,
    pub airline_code: String,
    pub airline_country: String,
    pub from_airport_name: String,
    pub from_airport_city: String,
    pub from_airport_country: String,
    pub from_airport_code: String,
    pub from_airport_altitude: String,
    pub to_airport_name: String,
    pub to_airport_city: String,
    pub to_airport_country: String,
    pub to_airport_code: String,
    pub to_airport_altitude: String,
}

/// A recognized `key: value` field of a route block
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteField {
    /// `- airline_name`, which also opens a new block
    AirlineName,
    AirlineCode,
    AirlineCountry,
    FromAirportName,
    FromAirportCity,
    FromAirportCountry,
    FromAirportCode,
    FromAirportAltitude,
    ToAirportName,
    ToAirportCity,
    ToAirportCountry,
    ToAirportCode,
    ToAirportAltitude,
}

impl RouteField {
    /// Map a trimmed line key to its field
    pub fn from_key(key: &str) -> Option<Self> {
        let field = match key {
            "- airline_name" => RouteField::AirlineName,
            "airline_icao_unique_code" => RouteField::AirlineCode,
            "airline_country" => RouteField::AirlineCountry,
            "from_airport_name" => RouteField::FromAirportName,
            "from_airport_city" => RouteField::FromAirportCity,
            "from_airport_country" => RouteField::FromAirportCountry,
            "from_airport_icao_unique_code" => RouteField::FromAirportCode,
            "from_airport_altitude" => RouteField::FromAirportAltitude,
            "to_airport_name" => RouteField::ToAirportName,
            "to_airport_city" => RouteField::ToAirportCity,
            "to_airport_country" => RouteField::ToAirportCountry,
            "to_airport_icao_unique_code" => RouteField::ToAirportCode,
            "to_airport_altitude" => RouteField::ToAirportAltitude,
            _ => return None,
        };
        Some(field)
    }
}

impl Route {
    /// Overwrite one field with a copy of `value`
    pub fn set(&mut self, field: RouteField, value: &str) {
        let slot = match field {
            RouteField::AirlineName => &mut self.airline_name,
            RouteField::AirlineCode => &mut self.airline_code,
            RouteField::AirlineCountry => &mut self.airline_country,
            RouteField::FromAirportName => &mut self.from_airport_name,
            RouteField::FromAirportCity => &mut self.from_airport_city,
            RouteField::FromAirportCountry => &mut self.from_airport_country,
            RouteField::FromAirportCode => &mut self.from_airport_code,
            RouteField::FromAirportAltitude => &mut self.from_airport_altitude,
            RouteField::ToAirportName => &mut self.to_airport_name,
            RouteField::ToAirportCity => &mut self.to_airport_city,
            RouteField::ToAirportCountry => &mut self.to_airport_country,
            RouteField::ToAirportCode => &mut self.to_airport_code,
            RouteField::ToAirportAltitude => &mut self.to_airport_altitude,
        };
        *slot = value.to_string();
    }
}
