//! Case-insensitive substring matching shared by the `*_containing` lookups.
//!
//! Postgres lowercases with Unicode rules, so the match runs in SQL with both
//! sides passed through `LOWER()`. SQLite's `LOWER()` only folds ASCII, so on
//! that backend the rows are loaded in id order and filtered here instead.

use sea_orm::sea_query::{BinOper, Expr, Func, SimpleExpr};
use sea_orm::{ColumnTrait, DbBackend};

const LIKE_ESCAPE: char = '\\';

pub(crate) struct ContainsIgnoreCase<'a> {
    backend: DbBackend,
    needle: &'a str,
    folded: String,
}

impl<'a> ContainsIgnoreCase<'a> {
    pub(crate) fn new(backend: DbBackend, needle: &'a str) -> Self {
        Self {
            backend,
            needle,
            folded: needle.to_lowercase(),
        }
    }

    /// `LOWER(column) LIKE LOWER('%needle%')`, or `None` when the backend
    /// cannot fold non-ASCII text and [`Self::matches`] has to decide.
    pub(crate) fn filter<C: ColumnTrait>(&self, column: C) -> Option<SimpleExpr> {
        if self.folds_in_memory() {
            return None;
        }

        let pattern = format!("%{}%", escape_like(self.needle));
        Some(
            Expr::expr(Func::lower(Expr::col((column.entity_name(), column))))
                .binary(BinOper::Like, Func::lower(Expr::val(pattern))),
        )
    }

    pub(crate) fn matches(&self, value: &str) -> bool {
        !self.folds_in_memory() || value.to_lowercase().contains(&self.folded)
    }

    fn folds_in_memory(&self) -> bool {
        matches!(self.backend, DbBackend::Sqlite)
    }
}

fn escape_like(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}
