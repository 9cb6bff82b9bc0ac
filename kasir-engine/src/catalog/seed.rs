//! Stock menu and table layout loaded at start-up
//!
//! Everything edited at runtime lives in memory only, a restart returns here.

use shared::models::{DiningTable, MenuCategory, MenuItem};

const SEED_MENU: &[(&str, &str, i64, MenuCategory)] = &[
    // Makanan Utama
    ("1", "Nasi Goreng Spesial", 25000, MenuCategory::MakananUtama),
    ("2", "Ayam Bakar", 30000, MenuCategory::MakananUtama),
    ("3", "Rendang Daging", 35000, MenuCategory::MakananUtama),
    ("4", "Soto Ayam", 20000, MenuCategory::MakananUtama),
    // Minuman
    ("5", "Es Teh Manis", 8000, MenuCategory::Minuman),
    ("6", "Jus Jeruk", 12000, MenuCategory::Minuman),
    ("7", "Kopi Hitam", 10000, MenuCategory::Minuman),
    ("8", "Es Campur", 15000, MenuCategory::Minuman),
    // Pembuka
    ("9", "Kerupuk", 5000, MenuCategory::MakananPembuka),
    ("10", "Gado-gado", 18000, MenuCategory::MakananPembuka),
    // Penutup
    ("11", "Es Krim", 12000, MenuCategory::MakananPenutup),
    ("12", "Pudding", 10000, MenuCategory::MakananPenutup),
    // Cemilan
    ("13", "Pisang Goreng", 8000, MenuCategory::Cemilan),
    ("14", "Tahu Isi", 6000, MenuCategory::Cemilan),
];

const SEED_TABLES: &[(&str, &str, bool)] = &[
    ("1", "T-01", false),
    ("2", "T-02", true),
    ("3", "T-03", false),
    ("4", "T-04", false),
    ("5", "T-05", true),
    ("6", "T-06", false),
    ("7", "T-07", false),
    ("8", "T-08", false),
];

pub fn seed_menu() -> Vec<MenuItem> {
    SEED_MENU
        .iter()
        .map(|(id, name, price, category)| MenuItem::new(*id, *name, *price, *category))
        .collect()
}

pub fn seed_tables() -> Vec<DiningTable> {
    SEED_TABLES
        .iter()
        .map(|(id, number, occupied)| DiningTable {
            id: (*id).to_string(),
            number: (*number).to_string(),
            occupied: *occupied,
        })
        .collect()
}
