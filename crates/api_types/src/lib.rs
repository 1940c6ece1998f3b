use serde::{Deserialize, Serialize};

pub mod expense {
    use super::*;

    /// Request body for recording an expense.
    ///
    /// `note` and `date` may be omitted; a blank date is replaced with the
    /// current date by the server.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct ExpenseNew {
        pub amount: f64,
        pub category: String,
        #[serde(default)]
        pub note: String,
        /// `YYYY-MM-DD`.
        #[serde(default)]
        pub date: String,
    }

    /// A stored expense.
    #[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
    pub struct ExpenseView {
        pub id: u64,
        pub amount: f64,
        pub category: String,
        pub note: String,
        pub date: String,
    }
}

pub mod stats {
    use super::*;

    use std::collections::BTreeMap;

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Summary {
        pub count: usize,
        pub total: f64,
        pub per_category: BTreeMap<String, f64>,
    }
}

/// Body returned with every error status.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
