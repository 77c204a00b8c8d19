pub static FIRST_NAMES: &[&str] = &[
    "Avery", "Cameron", "Dakota", "Dylan", "Harper", "Jordan", "Logan", "Morgan",
    "Parker", "Quinn", "Riley", "Rowan", "Skyler", "Taylor", "Alex", "Casey",
    "Jamie", "Jesse", "Lee", "Shawn", "Sam", "Noah", "Mia", "Liam", "Emma",
];

pub static LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis",
    "Rodriguez", "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson",
    "Thomas", "Moore", "Jackson", "Martin", "Clark", "Lewis", "Walker", "Young", "Allen",
];

/// RFC 2606 second-level names reserved for documentation; they never deliver mail.
pub static RESERVED_EMAIL_DOMAINS: &[&str] = &["example.com", "example.net", "example.org"];

pub static STREET_SUFFIXES: &[&str] = &[
    "St", "Ave", "Blvd", "Rd", "Ln", "Dr", "Way", "Ct", "Pl", "Terrace", "Circle", "Loop",
    "Trail", "Path", "Grove",
];

/// Words that read as fictitious on sight.
pub static FICTITIOUS_WORDS: &[&str] = &[
    "Test", "Fiction", "Mock", "Sample", "Demo", "Dummy", "Placeholder", "Acme", "Foobar",
    "Example", "Sandbox", "Alpha", "Beta", "Gamma",
];

pub static STREET_WORDS: &[&str] = &[
    "Oak", "Pine", "Maple", "Cedar", "Elm", "Birch", "Willow", "Sunset", "Sunrise",
    "Highland", "Valley", "Hill", "Ridge", "Creek", "River", "Lake", "Park", "Garden",
    "Spring", "Summer", "Winter", "Autumn", "North", "South", "East", "West", "Central",
    "Main", "First", "Second", "Third", "Lincoln", "Washington", "Madison", "Franklin",
];

pub static CITY_PREFIXES: &[&str] = &[
    "Spring", "River", "Lake", "Hill", "Valley", "Park", "Green", "Fair", "Pleasant",
    "Mount", "Glen", "Brook", "Wood", "Field", "Stone", "Clear", "Golden", "Silver",
];

pub static CITY_SUFFIXES: &[&str] = &[
    "ville", "town", "city", "burg", "ford", "field", "wood", "dale", "view", "haven",
    "port", "ridge", "grove", "falls", "springs", "heights", "garden", "meadow",
];

pub static US_STATES: &[&str] = &[
    "CA", "NY", "TX", "FL", "WA", "IL", "PA", "OH", "MI", "NC", "GA", "VA", "AZ", "MA", "CO",
];

pub static CA_PROVINCES: &[&str] = &[
    "ON", "QC", "BC", "AB", "MB", "SK", "NS", "NB", "NL", "PE", "NT", "YT", "NU",
];

pub static AU_STATES: &[&str] = &["NSW", "VIC", "QLD", "WA", "SA", "TAS", "ACT", "NT"];

/// Letters Canada Post never uses anywhere in a postal code.
pub static CA_FORBIDDEN_LETTERS: &[u8] = b"DFIOQU";

pub static CA_ALLOWED_LETTERS: &[u8] = b"ABCEGHJKLMNPRSTVWXYZ";

pub const US_SENTINEL_REGION: &str = "ZZ";
pub const US_SENTINEL_POSTCODE: &str = "00000";
pub const CA_SENTINEL_REGION: &str = "ZZ";
pub const AU_SENTINEL_REGION: &str = "XX";
pub const AU_SENTINEL_POSTCODE: &str = "0000";

/// Assigned NANP area codes.
pub static NANP_AREA_CODES: &[u16] = &[
    212, 213, 214, 215, 216, 301, 302, 303, 305, 310, 312, 313, 314, 315, 316,
    401, 402, 404, 405, 407, 408, 410, 412, 413, 414, 415, 416, 417, 419, 501,
    502, 503, 504, 505, 507, 508, 509, 510, 512, 513, 515, 516, 517, 518, 601,
    602, 603, 605, 606, 607, 608, 609, 610, 612, 614, 615, 616, 617, 618, 619,
    701, 702, 703, 704, 706, 707, 708, 712, 713, 714, 715, 716, 717, 718, 719,
    801, 802, 803, 804, 805, 806, 808, 810, 812, 813, 814, 815, 816, 817, 818,
    901, 902, 903, 904, 906, 907, 908, 909, 910, 912, 913, 914, 915, 916, 917,
];
