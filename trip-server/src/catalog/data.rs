//! Built-in reference tables.

/// Country → cities (name, latitude, longitude). The first city is the hub.
pub(super) const COUNTRY_CITIES: &[(&str, &[(&str, f64, f64)])] = &[
    (
        "India",
        &[
            ("Delhi", 28.6139, 77.2090),
            ("Mumbai", 19.0760, 72.8777),
            ("Bengaluru", 12.9716, 77.5946),
            ("Kolkata", 22.5726, 88.3639),
        ],
    ),
    (
        "United Arab Emirates",
        &[("Dubai", 25.2048, 55.2708), ("Abu Dhabi", 24.4539, 54.3773)],
    ),
    (
        "United States",
        &[
            ("New York", 40.7128, -74.0060),
            ("Washington DC", 38.9072, -77.0369),
            ("Chicago", 41.8781, -87.6298),
            ("Los Angeles", 34.0522, -118.2437),
        ],
    ),
    (
        "United Kingdom",
        &[
            ("London", 51.5074, -0.1278),
            ("Manchester", 53.4808, -2.2426),
            ("Edinburgh", 55.9533, -3.1883),
        ],
    ),
    (
        "France",
        &[
            ("Paris", 48.8566, 2.3522),
            ("Lyon", 45.7640, 4.8357),
            ("Nice", 43.7102, 7.2620),
            ("Marseille", 43.2965, 5.3698),
        ],
    ),
    (
        "Italy",
        &[
            ("Rome", 41.9028, 12.4964),
            ("Milan", 45.4642, 9.1900),
            ("Florence", 43.7696, 11.2558),
            ("Venice", 45.4408, 12.3155),
            ("Naples", 40.8518, 14.2681),
        ],
    ),
    (
        "Germany",
        &[
            ("Berlin", 52.5200, 13.4050),
            ("Munich", 48.1351, 11.5820),
            ("Frankfurt", 50.1109, 8.6821),
        ],
    ),
    (
        "Austria",
        &[("Vienna", 48.2082, 16.3738), ("Salzburg", 47.8095, 13.0550)],
    ),
    (
        "Spain",
        &[
            ("Madrid", 40.4168, -3.7038),
            ("Barcelona", 41.3851, 2.1734),
            ("Seville", 37.3891, -5.9845),
        ],
    ),
    (
        "Greece",
        &[("Athens", 37.9838, 23.7275), ("Thessaloniki", 40.6401, 22.9444)],
    ),
    (
        "Canada",
        &[
            ("Toronto", 43.6532, -79.3832),
            ("Montreal", 45.5019, -73.5674),
            ("Vancouver", 49.2827, -123.1207),
            ("Calgary", 51.0447, -114.0719),
        ],
    ),
    (
        "Mexico",
        &[
            ("Mexico City", 19.4326, -99.1332),
            ("Guadalajara", 20.6597, -103.3496),
            ("Cancun", 21.1619, -86.8515),
        ],
    ),
    (
        "Ireland",
        &[
            ("Dublin", 53.3498, -6.2603),
            ("Galway", 53.2707, -9.0568),
            ("Cork", 51.8985, -8.4756),
        ],
    ),
    (
        "Portugal",
        &[
            ("Lisbon", 38.7223, -9.1393),
            ("Porto", 41.1579, -8.6291),
            ("Faro", 37.0194, -7.9304),
        ],
    ),
    (
        "Netherlands",
        &[
            ("Amsterdam", 52.3676, 4.9041),
            ("Rotterdam", 51.9244, 4.4777),
            ("Utrecht", 52.0907, 5.1214),
        ],
    ),
    (
        "Belgium",
        &[
            ("Brussels", 50.8503, 4.3517),
            ("Bruges", 51.2093, 3.2247),
            ("Antwerp", 51.2194, 4.4025),
        ],
    ),
    (
        "Switzerland",
        &[
            ("Zurich", 47.3769, 8.5417),
            ("Geneva", 46.2044, 6.1432),
            ("Lucerne", 47.0502, 8.3093),
        ],
    ),
    (
        "Turkey",
        &[
            ("Istanbul", 41.0082, 28.9784),
            ("Cappadocia", 38.6431, 34.8289),
            ("Izmir", 38.4237, 27.1428),
        ],
    ),
    ("Singapore", &[("Singapore", 1.3521, 103.8198)]),
    (
        "Thailand",
        &[
            ("Bangkok", 13.7563, 100.5018),
            ("Chiang Mai", 18.7883, 98.9853),
            ("Phuket", 7.8804, 98.3923),
        ],
    ),
    (
        "Japan",
        &[
            ("Tokyo", 35.6762, 139.6503),
            ("Kyoto", 35.0116, 135.7681),
            ("Osaka", 34.6937, 135.5023),
        ],
    ),
    (
        "South Korea",
        &[("Seoul", 37.5665, 126.9780), ("Busan", 35.1796, 129.0756)],
    ),
    (
        "Australia",
        &[
            ("Sydney", -33.8688, 151.2093),
            ("Melbourne", -37.8136, 144.9631),
            ("Brisbane", -27.4698, 153.0251),
        ],
    ),
    (
        "New Zealand",
        &[
            ("Auckland", -36.8485, 174.7633),
            ("Queenstown", -45.0312, 168.6626),
            ("Wellington", -41.2865, 174.7762),
        ],
    ),
];

/// User-facing aliases → canonical country names.
pub(super) const ALIASES: &[(&str, &str)] = &[
    ("UAE", "United Arab Emirates"),
    ("United Arab Emirates", "United Arab Emirates"),
    ("USA", "United States"),
    ("US", "United States"),
    ("United States of America", "United States"),
    ("UK", "United Kingdom"),
    ("Great Britain", "United Kingdom"),
];
