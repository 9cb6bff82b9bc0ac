//! Catalog - menu items and dining tables
//!
//! Reference data plus the management operations behind the settings screen.
//! Inputs are validated in full before anything is touched, a rejected call
//! leaves the catalog exactly as it was.
//!
//! Not-found policy (same for menu items and tables): editing or toggling an
//! unknown id is an error, deleting one is a no-op that reports `false`.

mod seed;

use shared::error::{AppError, AppResult};
use shared::models::{DiningTable, MenuCategory, MenuItem, MenuItemForm, TableForm};
use shared::util::resource_id;

use crate::utils::validation::{
    MAX_NAME_LEN, parse_category, parse_price, validate_required_text,
};

/// Validated menu form
struct MenuItemFields {
    name: String,
    price: i64,
    category: MenuCategory,
}

fn parse_menu_form(form: &MenuItemForm) -> AppResult<MenuItemFields> {
    Ok(MenuItemFields {
        name: validate_required_text(&form.name, "name", MAX_NAME_LEN)?,
        price: parse_price(&form.price)?,
        category: parse_category(&form.category)?,
    })
}

fn parse_table_form(form: &TableForm) -> AppResult<String> {
    validate_required_text(&form.number, "number", MAX_NAME_LEN)
}

/// In-memory catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    menu_items: Vec<MenuItem>,
    tables: Vec<DiningTable>,
}

impl Catalog {
    /// Catalog with the stock menu and table layout
    pub fn seeded() -> Self {
        Self {
            menu_items: seed::seed_menu(),
            tables: seed::seed_tables(),
        }
    }

    pub fn from_parts(menu_items: Vec<MenuItem>, tables: Vec<DiningTable>) -> Self {
        Self { menu_items, tables }
    }

    // ========================================================================
    // Menu
    // ========================================================================

    pub fn menu_items(&self) -> &[MenuItem] {
        &self.menu_items
    }

    pub fn menu_item(&self, id: &str) -> Option<&MenuItem> {
        self.menu_items.iter().find(|m| m.id == id)
    }

    /// Items of one category in insertion order
    ///
    /// Lazy; call again to restart.
    pub fn list_by_category(
        &self,
        category: MenuCategory,
    ) -> impl Iterator<Item = &MenuItem> + '_ {
        self.menu_items.iter().filter(move |m| m.category == category)
    }

    /// Same as [`Catalog::list_by_category`] but takes the slug the tabs send
    pub fn list_by_category_id(
        &self,
        category_id: &str,
    ) -> AppResult<impl Iterator<Item = &MenuItem> + '_> {
        let category = parse_category(category_id)?;
        Ok(self.list_by_category(category))
    }

    pub fn add_menu_item(&mut self, form: &MenuItemForm) -> AppResult<MenuItem> {
        let fields = parse_menu_form(form)?;
        let id = self.fresh_id();
        let item = MenuItem::new(id, fields.name, fields.price, fields.category);
        tracing::info!(id = %item.id, name = %item.name, price = item.price, category = %item.category, "Menu item added");
        self.menu_items.push(item.clone());
        Ok(item)
    }

    /// Replace name, price and category of an existing item; the id is kept
    pub fn edit_menu_item(&mut self, id: &str, form: &MenuItemForm) -> AppResult<MenuItem> {
        let fields = parse_menu_form(form)?;
        let item = self
            .menu_items
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::menu_item_not_found(id))?;
        item.name = fields.name;
        item.price = fields.price;
        item.category = fields.category;
        tracing::info!(id = %item.id, name = %item.name, price = item.price, "Menu item updated");
        Ok(item.clone())
    }

    /// Returns whether an item was removed
    pub fn delete_menu_item(&mut self, id: &str) -> bool {
        let before = self.menu_items.len();
        self.menu_items.retain(|m| m.id != id);
        let removed = self.menu_items.len() != before;
        if removed {
            tracing::info!(id = %id, "Menu item deleted");
        }
        removed
    }

    // ========================================================================
    // Tables
    // ========================================================================

    pub fn tables(&self) -> &[DiningTable] {
        &self.tables
    }

    pub fn table(&self, id: &str) -> Option<&DiningTable> {
        self.tables.iter().find(|t| t.id == id)
    }

    /// New tables start unoccupied
    pub fn add_table(&mut self, form: &TableForm) -> AppResult<DiningTable> {
        let number = parse_table_form(form)?;
        let table = DiningTable::new(self.fresh_id(), number);
        tracing::info!(id = %table.id, number = %table.number, "Table added");
        self.tables.push(table.clone());
        Ok(table)
    }

    pub fn edit_table(&mut self, id: &str, form: &TableForm) -> AppResult<DiningTable> {
        let number = parse_table_form(form)?;
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::table_not_found(id))?;
        table.number = number;
        tracing::info!(id = %table.id, number = %table.number, "Table updated");
        Ok(table.clone())
    }

    /// Returns whether a table was removed
    pub fn delete_table(&mut self, id: &str) -> bool {
        let before = self.tables.len();
        self.tables.retain(|t| t.id != id);
        let removed = self.tables.len() != before;
        if removed {
            tracing::info!(id = %id, "Table deleted");
        }
        removed
    }

    /// Manual occupancy toggle
    pub fn set_table_occupied(&mut self, id: &str, occupied: bool) -> AppResult<()> {
        let table = self
            .tables
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| AppError::table_not_found(id))?;
        table.occupied = occupied;
        tracing::debug!(id = %id, occupied, "Table occupancy changed");
        Ok(())
    }

    /// Id unused by any menu item or table
    fn fresh_id(&self) -> String {
        loop {
            let id = resource_id();
            let taken = self.menu_items.iter().any(|m| m.id == id)
                || self.tables.iter().any(|t| t.id == id);
            if !taken {
                return id;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::{ErrorCode, ErrorKind};

    fn form(name: &str, price: &str, category: &str) -> MenuItemForm {
        MenuItemForm::new(name, price, category)
    }

    #[test]
    fn test_seeded_catalog() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.menu_items().len(), 14);
        assert_eq!(catalog.tables().len(), 8);

        let es_teh = catalog.menu_item("5").unwrap();
        assert_eq!(es_teh.name, "Es Teh Manis");
        assert_eq!(es_teh.price, 8000);

        let occupied: Vec<_> = catalog
            .tables()
            .iter()
            .filter(|t| t.occupied)
            .map(|t| t.number.as_str())
            .collect();
        assert_eq!(occupied, vec!["T-02", "T-05"]);
    }

    #[test]
    fn test_list_by_category_preserves_order_and_restarts() {
        let catalog = Catalog::seeded();
        let names: Vec<_> = catalog
            .list_by_category(MenuCategory::Minuman)
            .map(|m| m.name.as_str())
            .collect();
        assert_eq!(names, vec!["Es Teh Manis", "Jus Jeruk", "Kopi Hitam", "Es Campur"]);

        assert_eq!(catalog.list_by_category(MenuCategory::Minuman).count(), 4);
        assert_eq!(catalog.list_by_category(MenuCategory::Cemilan).count(), 2);
    }

    #[test]
    fn test_list_by_category_id_rejects_unknown_slug() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.list_by_category_id("minuman").unwrap().count(), 4);
        let err = catalog.list_by_category_id("sup").err().unwrap();
        assert_eq!(err.code, ErrorCode::CategoryNotFound);
    }

    #[test]
    fn test_add_menu_item_appends_with_fresh_id() {
        let mut catalog = Catalog::seeded();
        let item = catalog
            .add_menu_item(&form("Mie Ayam", "18000", "makanan-utama"))
            .unwrap();

        assert!(!item.id.is_empty());
        assert!(catalog.menu_items().iter().filter(|m| m.id == item.id).count() == 1);
        assert_eq!(catalog.menu_items().last().unwrap(), &item);
        assert_eq!(item.price, 18000);
        assert_eq!(item.category, MenuCategory::MakananUtama);
    }

    #[test]
    fn test_add_menu_item_validation_leaves_catalog_untouched() {
        let mut catalog = Catalog::seeded();
        let before = catalog.menu_items().to_vec();

        let cases = [
            form("", "1000", "minuman"),
            form("Teh", "0", "minuman"),
            form("Teh", "-100", "minuman"),
            form("Teh", "abc", "minuman"),
            form("Teh", "1000", "minuman-dingin"),
        ];
        for case in &cases {
            let err = catalog.add_menu_item(case).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::Validation, "{case:?}");
        }
        assert_eq!(catalog.menu_items(), before.as_slice());
    }

    #[test]
    fn test_edit_menu_item_keeps_id() {
        let mut catalog = Catalog::seeded();
        let edited = catalog
            .edit_menu_item("5", &form("Es Teh Tawar", "6000", "minuman"))
            .unwrap();
        assert_eq!(edited.id, "5");
        assert_eq!(catalog.menu_item("5").unwrap().name, "Es Teh Tawar");
        assert_eq!(catalog.menu_item("5").unwrap().price, 6000);
        assert_eq!(catalog.menu_items().len(), 14);
    }

    #[test]
    fn test_edit_menu_item_unknown_id() {
        let mut catalog = Catalog::seeded();
        let err = catalog
            .edit_menu_item("404", &form("X", "1000", "minuman"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemNotFound);
    }

    #[test]
    fn test_edit_menu_item_rejected_input_keeps_old_values() {
        let mut catalog = Catalog::seeded();
        let err = catalog
            .edit_menu_item("5", &form("Es Teh", "0", "minuman"))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::MenuItemInvalidPrice);
        assert_eq!(catalog.menu_item("5").unwrap().price, 8000);
    }

    #[test]
    fn test_delete_menu_item_is_idempotent() {
        let mut catalog = Catalog::seeded();
        assert!(catalog.delete_menu_item("14"));
        assert!(!catalog.delete_menu_item("14"));
        assert!(!catalog.delete_menu_item("nope"));
        assert_eq!(catalog.menu_items().len(), 13);
    }

    #[test]
    fn test_table_crud() {
        let mut catalog = Catalog::seeded();

        let table = catalog.add_table(&TableForm::new(" T-09 ")).unwrap();
        assert_eq!(table.number, "T-09");
        assert!(!table.occupied);

        let edited = catalog.edit_table(&table.id, &TableForm::new("VIP-1")).unwrap();
        assert_eq!(edited.id, table.id);
        assert_eq!(catalog.table(&table.id).unwrap().number, "VIP-1");

        assert!(catalog.delete_table(&table.id));
        assert!(!catalog.delete_table(&table.id));
        assert_eq!(catalog.tables().len(), 8);
    }

    #[test]
    fn test_table_validation_and_not_found() {
        let mut catalog = Catalog::seeded();
        let err = catalog.add_table(&TableForm::new("   ")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);

        let err = catalog.edit_table("99", &TableForm::new("T-99")).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);

        let err = catalog.edit_table("1", &TableForm::new("")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(catalog.table("1").unwrap().number, "T-01");
    }

    #[test]
    fn test_set_table_occupied() {
        let mut catalog = Catalog::seeded();
        catalog.set_table_occupied("1", true).unwrap();
        assert!(catalog.table("1").unwrap().occupied);
        catalog.set_table_occupied("1", false).unwrap();
        assert!(!catalog.table("1").unwrap().occupied);

        let err = catalog.set_table_occupied("99", true).unwrap_err();
        assert_eq!(err.code, ErrorCode::TableNotFound);
    }
}
