use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Cart errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Silakan pilih meja terlebih dahulu!")]
    TableNotSelected,

    #[error("Jumlah harus antara 1 dan 9999, diterima {0}")]
    InvalidQuantity(i64),

    #[error("Pesanan masih kosong")]
    EmptyOrder,
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::TableNotSelected => AppError::table_not_selected(),
            OrderError::InvalidQuantity(_) => {
                AppError::with_message(ErrorCode::ValueOutOfRange, message)
                    .with_detail("field", "quantity")
            }
            OrderError::EmptyOrder => AppError::with_message(ErrorCode::OrderEmpty, message),
        }
    }
}
