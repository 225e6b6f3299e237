//! US state names, postal abbreviations and the jurisdictions left out of a default run.

const STATES: [(&str, &str); 52] = [
    ("Alabama", "AL"), ("Alaska", "AK"), ("Arizona", "AZ"), ("Arkansas", "AR"),
    ("California", "CA"), ("Colorado", "CO"), ("Connecticut", "CT"), ("Delaware", "DE"),
    ("District of Columbia", "DC"), ("Florida", "FL"), ("Georgia", "GA"), ("Hawaii", "HI"),
    ("Idaho", "ID"), ("Illinois", "IL"), ("Indiana", "IN"), ("Iowa", "IA"),
    ("Kansas", "KS"), ("Kentucky", "KY"), ("Louisiana", "LA"), ("Maine", "ME"),
    ("Maryland", "MD"), ("Massachusetts", "MA"), ("Michigan", "MI"), ("Minnesota", "MN"),
    ("Mississippi", "MS"), ("Missouri", "MO"), ("Montana", "MT"), ("Nebraska", "NE"),
    ("Nevada", "NV"), ("New Hampshire", "NH"), ("New Jersey", "NJ"), ("New Mexico", "NM"),
    ("New York", "NY"), ("North Carolina", "NC"), ("North Dakota", "ND"), ("Ohio", "OH"),
    ("Oklahoma", "OK"), ("Oregon", "OR"), ("Pennsylvania", "PA"), ("Puerto Rico", "PR"),
    ("Rhode Island", "RI"), ("South Carolina", "SC"), ("South Dakota", "SD"), ("Tennessee", "TN"),
    ("Texas", "TX"), ("Utah", "UT"), ("Vermont", "VT"), ("Virginia", "VA"),
    ("Washington", "WA"), ("West Virginia", "WV"), ("Wisconsin", "WI"), ("Wyoming", "WY"),
];

/// Territories whose zip codes are dropped from weight tables by default.
pub const DEFAULT_IGNORED: [&str; 6] = ["PR", "VI", "GU", "MP", "AS", "DC"];

pub const DISTRICT_OF_COLUMBIA: &str = "District of Columbia";
pub const PUERTO_RICO: &str = "Puerto Rico";

/// Postal abbreviation for a full state name (case-insensitive).
pub fn abbreviation(name: &str) -> Option<&'static str> {
    let name = name.trim();
    STATES.iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|&(_, abbr)| abbr)
}

/// Full state name for a postal abbreviation (case-insensitive).
pub fn name(abbreviation: &str) -> Option<&'static str> {
    let abbreviation = abbreviation.trim();
    STATES.iter()
        .find(|(_, a)| a.eq_ignore_ascii_case(abbreviation))
        .map(|&(name, _)| name)
}
