//! Command dispatch
//!
//! Front ends send a [`SessionCommand`] and get a [`CommandResponse`] back.
//! Failures never escape as panics or `Err`; they come back as a
//! destructive [`Notification`] and the session carries on.
//!
//! ```json
//! { "type": "AddItem", "data": { "menu_item_id": "5" } }
//! ```

use serde::{Deserialize, Serialize};
use shared::error::AppError;
use shared::models::{MenuItemForm, TableForm};

use super::state::Session;
use crate::utils::format_rupiah;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum SessionCommand {
    // ===== Menu =====
    AddMenuItem(MenuItemForm),
    EditMenuItem { id: String, form: MenuItemForm },
    DeleteMenuItem { id: String },

    // ===== Tables =====
    AddTable(TableForm),
    EditTable { id: String, form: TableForm },
    DeleteTable { id: String },
    SetTableOccupied { id: String, occupied: bool },

    // ===== Cart =====
    SelectTable { table_id: String },
    AddItem { menu_item_id: String },
    SetQuantity { line_id: String, quantity: i64 },
    Increment { line_id: String },
    Decrement { line_id: String },
    RemoveItem { line_id: String },
    ClearCart,
    Checkout,

    // ===== Shift =====
    AddExpense { description: String, amount: i64 },
    /// Build the shift workbook and save it into the configured report directory
    ExportReport,
}

impl SessionCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddMenuItem(_) => "add_menu_item",
            Self::EditMenuItem { .. } => "edit_menu_item",
            Self::DeleteMenuItem { .. } => "delete_menu_item",
            Self::AddTable(_) => "add_table",
            Self::EditTable { .. } => "edit_table",
            Self::DeleteTable { .. } => "delete_table",
            Self::SetTableOccupied { .. } => "set_table_occupied",
            Self::SelectTable { .. } => "select_table",
            Self::AddItem { .. } => "add_item",
            Self::SetQuantity { .. } => "set_quantity",
            Self::Increment { .. } => "increment",
            Self::Decrement { .. } => "decrement",
            Self::RemoveItem { .. } => "remove_item",
            Self::ClearCart => "clear_cart",
            Self::Checkout => "checkout",
            Self::AddExpense { .. } => "add_expense",
            Self::ExportReport => "export_report",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Destructive,
}

/// Transient message for the register's toast area
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn info(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Info,
            title: "Berhasil".to_string(),
            description: description.into(),
        }
    }

    pub fn destructive(description: impl Into<String>) -> Self {
        Self {
            level: NotificationLevel::Destructive,
            title: "Error".to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    /// Nothing to show for silent cart edits
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<AppError>,
}

impl CommandResponse {
    pub fn success(notification: Option<Notification>) -> Self {
        Self {
            success: true,
            notification,
            error: None,
        }
    }

    pub fn error(error: AppError) -> Self {
        Self {
            success: false,
            notification: Some(Notification::destructive(error.message.clone())),
            error: Some(error),
        }
    }
}

impl Session {
    /// Run one command against the session
    pub fn execute(&mut self, command: SessionCommand) -> CommandResponse {
        let name = command.name();
        match self.dispatch(command) {
            Ok(notification) => CommandResponse::success(notification),
            Err(err) => {
                tracing::warn!(
                    command = name,
                    code = %err.code,
                    category = err.code.category().name(),
                    error = %err,
                    "Command rejected"
                );
                CommandResponse::error(err)
            }
        }
    }

    fn dispatch(&mut self, command: SessionCommand) -> Result<Option<Notification>, AppError> {
        let notification = match command {
            SessionCommand::AddMenuItem(form) => {
                self.add_menu_item(&form)?;
                Some(Notification::info("Menu berhasil ditambahkan"))
            }
            SessionCommand::EditMenuItem { id, form } => {
                self.edit_menu_item(&id, &form)?;
                Some(Notification::info("Menu berhasil diubah"))
            }
            SessionCommand::DeleteMenuItem { id } => {
                self.delete_menu_item(&id);
                Some(Notification::info("Menu berhasil dihapus"))
            }
            SessionCommand::AddTable(form) => {
                self.add_table(&form)?;
                Some(Notification::info("Meja berhasil ditambahkan"))
            }
            SessionCommand::EditTable { id, form } => {
                self.edit_table(&id, &form)?;
                Some(Notification::info("Meja berhasil diubah"))
            }
            SessionCommand::DeleteTable { id } => {
                self.delete_table(&id);
                Some(Notification::info("Meja berhasil dihapus"))
            }
            SessionCommand::SetTableOccupied { id, occupied } => {
                self.set_table_occupied(&id, occupied)?;
                None
            }
            SessionCommand::SelectTable { table_id } => {
                self.select_table(&table_id)?;
                None
            }
            SessionCommand::AddItem { menu_item_id } => {
                self.add_item(&menu_item_id)?;
                None
            }
            SessionCommand::SetQuantity { line_id, quantity } => {
                self.set_quantity(&line_id, quantity)?;
                None
            }
            SessionCommand::Increment { line_id } => {
                self.increment(&line_id);
                None
            }
            SessionCommand::Decrement { line_id } => {
                self.decrement(&line_id);
                None
            }
            SessionCommand::RemoveItem { line_id } => {
                self.remove_item(&line_id);
                None
            }
            SessionCommand::ClearCart => {
                self.clear_cart();
                None
            }
            SessionCommand::Checkout => {
                let total = self.checkout()?.total();
                Some(Notification::info(format!(
                    "Pesanan selesai, total {}",
                    format_rupiah(total)
                )))
            }
            SessionCommand::AddExpense {
                description,
                amount,
            } => {
                self.add_expense(&description, amount)?;
                Some(Notification::info("Pengeluaran berhasil dicatat"))
            }
            SessionCommand::ExportReport => {
                let artifact = self.export_report()?;
                let path = artifact.save_to(&self.config().report_dir)?;
                Some(Notification::info(format!(
                    "Laporan disimpan ke {}",
                    path.display()
                )))
            }
        };
        Ok(notification)
    }
}
