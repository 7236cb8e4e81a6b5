use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{LabErr, Result};

/// A single `(x, y)` sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Identifies one of the predefined datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetId {
    #[default]
    Sales,
    Housing,
    Salary,
}

impl DatasetId {
    pub const ALL: [DatasetId; 3] = [DatasetId::Sales, DatasetId::Housing, DatasetId::Salary];

    /// Returns the lowercase key used in configs and on the wire.
    pub fn key(self) -> &'static str {
        match self {
            DatasetId::Sales => "sales",
            DatasetId::Housing => "housing",
            DatasetId::Salary => "salary",
        }
    }

    /// Returns the catalog record for this id.
    pub fn dataset(self) -> &'static Dataset {
        Dataset::get(self)
    }
}

impl fmt::Display for DatasetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for DatasetId {
    type Err = LabErr;

    fn from_str(s: &str) -> Result<Self> {
        let key = s.trim();
        DatasetId::ALL
            .into_iter()
            .find(|id| id.key().eq_ignore_ascii_case(key))
            .ok_or_else(|| LabErr::UnknownDataset { got: key.to_string() })
    }
}

/// Immutable, predefined sample data with its display metadata.
#[derive(Debug, Serialize)]
pub struct Dataset {
    pub id: DatasetId,
    pub name: &'static str,
    pub description: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub points: &'static [Point],
}

impl Dataset {
    /// Looks up the catalog record for `id`.
    pub fn get(id: DatasetId) -> &'static Dataset {
        match id {
            DatasetId::Sales => &SALES,
            DatasetId::Housing => &HOUSING,
            DatasetId::Salary => &SALARY,
        }
    }

    /// Iterates every predefined dataset in catalog order.
    pub fn all() -> impl Iterator<Item = &'static Dataset> {
        DatasetId::ALL.into_iter().map(Dataset::get)
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.x)
    }
}

static SALES: Dataset = Dataset {
    id: DatasetId::Sales,
    name: "Sales Revenue",
    description: "Relationship between marketing budget (in thousands of dollars) and sales revenue. \
                  Great for showcasing a positive business correlation.",
    x_label: "Marketing Budget (thousands $)",
    y_label: "Sales Revenue (thousands $)",
    points: &[
        Point::new(10., 120.),
        Point::new(20., 140.),
        Point::new(30., 165.),
        Point::new(40., 180.),
        Point::new(50., 210.),
        Point::new(60., 220.),
        Point::new(70., 240.),
        Point::new(80., 250.),
    ],
};

static HOUSING: Dataset = Dataset {
    id: DatasetId::Housing,
    name: "Housing Prices",
    description: "Relationship between house size (square feet) and price (thousands of dollars). \
                  Perfect for explaining value appreciation.",
    x_label: "House Size (sq ft)",
    y_label: "Price (thousands $)",
    points: &[
        Point::new(1000., 200.),
        Point::new(1500., 280.),
        Point::new(2000., 350.),
        Point::new(2500., 420.),
        Point::new(3000., 480.),
        Point::new(3500., 550.),
    ],
};

static SALARY: Dataset = Dataset {
    id: DatasetId::Salary,
    name: "Salary vs Experience",
    description: "Relationship between years of experience and annual salary. \
                  Highlights how skill accumulation compounds earnings.",
    x_label: "Years of Experience",
    y_label: "Salary ($)",
    points: &[
        Point::new(2., 40000.),
        Point::new(3., 45000.),
        Point::new(4., 48000.),
        Point::new(5., 50000.),
        Point::new(6., 55000.),
        Point::new(7., 60000.),
        Point::new(8., 65000.),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Housing".parse::<DatasetId>().unwrap(), DatasetId::Housing);
        assert_eq!(" salary ".parse::<DatasetId>().unwrap(), DatasetId::Salary);
    }

    #[test]
    fn parse_rejects_unknown_ids() {
        let err = "weather".parse::<DatasetId>().unwrap_err();
        assert!(matches!(err, LabErr::UnknownDataset { got } if got == "weather"));
    }

    #[test]
    fn every_id_resolves_to_its_own_record() {
        for id in DatasetId::ALL {
            assert_eq!(Dataset::get(id).id, id);
            assert!(!Dataset::get(id).points.is_empty());
        }
    }

    #[test]
    fn sample_counts_match_catalog() {
        assert_eq!(DatasetId::Sales.dataset().points.len(), 8);
        assert_eq!(DatasetId::Housing.dataset().points.len(), 6);
        assert_eq!(DatasetId::Salary.dataset().points.len(), 7);
    }

    #[test]
    fn ids_serialize_as_lowercase_keys() {
        let json = serde_json::to_string(&DatasetId::Housing).unwrap();
        assert_eq!(json, "\"housing\"");
        let back: DatasetId = serde_json::from_str("\"salary\"").unwrap();
        assert_eq!(back, DatasetId::Salary);
    }
}
