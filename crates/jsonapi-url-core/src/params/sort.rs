//! `sort=<field>[,-<field>...]` query parameter.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::url_model::QueryMap;

const SORT_KEY: &str = "sort";

/// Sorting order, serialized as `+` / `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Order {
    #[serde(rename = "+")]
    Ascending,
    #[serde(rename = "-")]
    Descending,
}

impl Order {
    pub fn as_char(self) -> char {
        match self {
            Order::Ascending => '+',
            Order::Descending => '-',
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sort {
    pub field_name: String,
    pub order: Order,
}

impl Sort {
    /// Reads one token of the `sort` list. Only a leading `-` is special.
    pub fn from_token(token: &str) -> Self {
        match token.strip_prefix('-') {
            Some(field_name) => Sort {
                field_name: field_name.to_string(),
                order: Order::Descending,
            },
            None => Sort {
                field_name: token.to_string(),
                order: Order::Ascending,
            },
        }
    }
}

/// Renders the token form, `-createdAt` or `title`.
impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.order {
            Order::Ascending => write!(f, "{}", self.field_name),
            Order::Descending => write!(f, "-{}", self.field_name),
        }
    }
}

/// Splits the `sort` value on `,`, primary field first.
///
/// Returns `None` when `sort` is absent or empty.
pub fn parse_sort(query: &QueryMap) -> Option<Vec<Sort>> {
    let value = query.get(SORT_KEY).filter(|v| !v.is_empty())?;
    let fields: Vec<Sort> = value.split(',').map(Sort::from_token).collect();
    (!fields.is_empty()).then_some(fields)
}
