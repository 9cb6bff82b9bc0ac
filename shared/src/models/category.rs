//! Menu Category Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{AppError, ErrorCode};

/// Fixed set of menu categories (kategori menu)
///
/// Serialized as the slug id the front end uses for its category tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MenuCategory {
    #[default]
    #[serde(rename = "makanan-utama")]
    MakananUtama,
    #[serde(rename = "minuman")]
    Minuman,
    #[serde(rename = "makanan-pembuka")]
    MakananPembuka,
    #[serde(rename = "makanan-penutup")]
    MakananPenutup,
    #[serde(rename = "cemilan")]
    Cemilan,
}

impl MenuCategory {
    /// All categories in tab display order
    pub const ALL: [MenuCategory; 5] = [
        MenuCategory::MakananUtama,
        MenuCategory::Minuman,
        MenuCategory::MakananPembuka,
        MenuCategory::MakananPenutup,
        MenuCategory::Cemilan,
    ];

    /// Slug id
    pub const fn id(&self) -> &'static str {
        match self {
            Self::MakananUtama => "makanan-utama",
            Self::Minuman => "minuman",
            Self::MakananPembuka => "makanan-pembuka",
            Self::MakananPenutup => "makanan-penutup",
            Self::Cemilan => "cemilan",
        }
    }

    /// Tab label
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::MakananUtama => "Makanan Utama",
            Self::Minuman => "Minuman",
            Self::MakananPembuka => "Pembuka",
            Self::MakananPenutup => "Penutup",
            Self::Cemilan => "Cemilan",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for MenuCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let slug = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.id() == slug)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::CategoryNotFound,
                    format!("Kategori menu tidak dikenal: '{}'", slug),
                )
                .with_detail("field", "category")
            })
    }
}
