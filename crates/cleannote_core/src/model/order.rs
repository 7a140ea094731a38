//! List ordering options for note queries.

use crate::model::note::Note;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Ascending,
    Descending,
}

/// Sort key plus direction for note lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "by", content = "order", rename_all = "snake_case")]
pub enum NoteOrder {
    /// Case-insensitive title order.
    Title(OrderType),
    /// Creation timestamp order.
    Date(OrderType),
    /// ARGB color value order.
    Color(OrderType),
}

impl Default for NoteOrder {
    fn default() -> Self {
        Self::Date(OrderType::Descending)
    }
}

impl NoteOrder {
    pub fn order_type(&self) -> OrderType {
        match self {
            Self::Title(order_type) | Self::Date(order_type) | Self::Color(order_type) => {
                *order_type
            }
        }
    }

    /// Returns the same sort key with a different direction.
    pub fn with_order_type(self, order_type: OrderType) -> Self {
        match self {
            Self::Title(_) => Self::Title(order_type),
            Self::Date(_) => Self::Date(order_type),
            Self::Color(_) => Self::Color(order_type),
        }
    }

    /// Sorts notes in place. Ties keep their incoming (id) order.
    pub fn sort(&self, notes: &mut [Note]) {
        let order_type = self.order_type();
        notes.sort_by(|left, right| {
            let ordering = self.compare_key(left, right);
            match order_type {
                OrderType::Ascending => ordering,
                OrderType::Descending => ordering.reverse(),
            }
        });
    }

    fn compare_key(&self, left: &Note, right: &Note) -> Ordering {
        match self {
            Self::Title(_) => left
                .title
                .to_lowercase()
                .cmp(&right.title.to_lowercase()),
            Self::Date(_) => left.timestamp.cmp(&right.timestamp),
            Self::Color(_) => left.color.cmp(&right.color),
        }
    }
}
