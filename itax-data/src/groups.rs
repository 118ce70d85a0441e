//! Fixed country groups used for the cross-country comparison.

/// A named set of countries, as `(ISO3 code, display name)` pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountryGroup {
    pub key: &'static str,
    pub label: &'static str,
    pub countries: &'static [(&'static str, &'static str)],
}

pub const G7: CountryGroup = CountryGroup {
    key: "g7",
    label: "G7",
    countries: &[
        ("USA", "United States"),
        ("CAN", "Canada"),
        ("GBR", "United Kingdom"),
        ("FRA", "France"),
        ("DEU", "Germany"),
        ("ITA", "Italy"),
        ("JPN", "Japan"),
    ],
};

pub const SAARC: CountryGroup = CountryGroup {
    key: "saarc",
    label: "SAARC",
    countries: &[
        ("AFG", "Afghanistan"),
        ("BGD", "Bangladesh"),
        ("BTN", "Bhutan"),
        ("IND", "India"),
        ("MDV", "Maldives"),
        ("NPL", "Nepal"),
        ("PAK", "Pakistan"),
        ("LKA", "Sri Lanka"),
    ],
};

pub const ASIA: CountryGroup = CountryGroup {
    key: "asia",
    label: "Asia (major economies)",
    countries: &[
        ("CHN", "China"),
        ("IND", "India"),
        ("JPN", "Japan"),
        ("KOR", "South Korea"),
        ("IDN", "Indonesia"),
        ("SAU", "Saudi Arabia"),
        ("TUR", "Turkey"),
        ("IRN", "Iran"),
        ("ARE", "United Arab Emirates"),
        ("THA", "Thailand"),
        ("MYS", "Malaysia"),
        ("VNM", "Vietnam"),
        ("PHL", "Philippines"),
        ("PAK", "Pakistan"),
        ("BGD", "Bangladesh"),
        ("SGP", "Singapore"),
    ],
};

pub const COUNTRY_GROUPS: [CountryGroup; 3] = [G7, SAARC, ASIA];

/// ISO3 code of the user's home country, used for the PPP conversion.
pub const HOME_COUNTRY: &str = "IND";

/// Every country code across all groups, first-seen order, no duplicates.
pub fn all_country_codes() -> Vec<&'static str> {
    let mut codes: Vec<&'static str> = Vec::new();
    for (code, _) in COUNTRY_GROUPS.iter().flat_map(|g| g.countries.iter()) {
        if !codes.contains(code) {
            codes.push(code);
        }
    }
    codes
}
