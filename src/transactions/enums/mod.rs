pub mod transaction_kind;
