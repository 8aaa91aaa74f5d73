use serde::Deserialize;

pub const DISTANCE_COLUMN: &str = "Distance to the nearest MRT station";
pub const N_STORES_COLUMN: &str = "Number of convenience stores";
pub const LATITUDE_COLUMN: &str = "Latitude";
pub const LONGITUDE_COLUMN: &str = "Longitude";
pub const PRICE_COLUMN: &str = "House price of unit area";

pub const REQUIRED_COLUMNS: [&str; 5] = [
    DISTANCE_COLUMN,
    N_STORES_COLUMN,
    LATITUDE_COLUMN,
    LONGITUDE_COLUMN,
    PRICE_COLUMN,
];

/// Model inputs in the order the coefficients are stored.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Features {
    /// Distance to the nearest transit station, metres.
    pub distance_to_station: f64,

    pub n_convenience_stores: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl Features {
    pub const N: usize = 4;

    #[must_use]
    pub const fn to_array(&self) -> [f64; Self::N] {
        [
            self.distance_to_station,
            self.n_convenience_stores,
            self.latitude,
            self.longitude,
        ]
    }
}

/// Complete row of the training table.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct TrainingRecord {
    pub features: Features,

    /// House price of unit area.
    pub price: f64,
}

/// Row as it comes from the CSV file, any cell may be empty or garbage.
#[derive(Deserialize, Debug)]
pub struct RawRecord {
    #[serde(
        rename = "Distance to the nearest MRT station",
        deserialize_with = "csv::invalid_option"
    )]
    distance_to_station: Option<f64>,

    #[serde(
        rename = "Number of convenience stores",
        deserialize_with = "csv::invalid_option"
    )]
    n_convenience_stores: Option<f64>,

    #[serde(
        rename = "Latitude",
        deserialize_with = "csv::invalid_option"
    )]
    latitude: Option<f64>,

    #[serde(
        rename = "Longitude",
        deserialize_with = "csv::invalid_option"
    )]
    longitude: Option<f64>,

    #[serde(
        rename = "House price of unit area",
        deserialize_with = "csv::invalid_option"
    )]
    price: Option<f64>,
}

impl RawRecord {
    /// Returns the typed record if every field is present and finite.
    #[must_use]
    pub fn complete(&self) -> Option<TrainingRecord> {
        let record = TrainingRecord {
            features: Features {
                distance_to_station: self.distance_to_station?,
                n_convenience_stores: self.n_convenience_stores?,
                latitude: self.latitude?,
                longitude: self.longitude?,
            },
            price: self.price?,
        };
        let is_finite = record.features.to_array().iter().all(|value| value.is_finite())
            && record.price.is_finite();
        is_finite.then_some(record)
    }
}
