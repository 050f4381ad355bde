//! Business logic behind the HTTP handlers. Each service owns the database
//! calls for one resource and maps store errors into `ServiceError`.

pub mod items;
pub mod supplier_items;
pub mod suppliers;
pub mod users;

use sea_orm::{
    sea_query::{Expr, LikeExpr, SimpleExpr},
    ColumnTrait, Condition,
};

const LIKE_ESCAPE: char = '\\';

/// `LIKE '%term%'` on any of `columns`; `None` when there is no term.
pub(crate) fn contains_any<C>(term: Option<&str>, columns: &[C]) -> Option<Condition>
where
    C: ColumnTrait,
{
    term.map(|wd| {
        columns
            .iter()
            .fold(Condition::any(), |condition, column| {
                condition.add(contains_literal(*column, wd))
            })
    })
}

/// `column LIKE '%term%' ESCAPE '\'` with `%`, `_` and `\` in `term`
/// matched as plain characters.
pub(crate) fn contains_literal<C>(column: C, term: &str) -> SimpleExpr
where
    C: ColumnTrait,
{
    let pattern = format!("%{}%", escape_like(term));
    Expr::col((column.entity_name(), column)).like(LikeExpr::new(pattern).escape(LIKE_ESCAPE))
}

fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::item;
    use rstest::rstest;
    use sea_orm::{DbBackend, EntityTrait, QueryFilter, QueryTrait};

    #[rstest]
    #[case("ABC", "ABC")]
    #[case("B_2", "B\\_2")]
    #[case("50%", "50\\%")]
    #[case("a\\b", "a\\\\b")]
    fn wildcards_are_escaped(#[case] term: &str, #[case] expected: &str) {
        assert_eq!(escape_like(term), expected);
    }

    #[test]
    fn filter_declares_the_escape_character() {
        let sql = item::Entity::find()
            .filter(contains_any(Some("B_2"), &[item::Column::ItemCode]).unwrap())
            .build(DbBackend::Sqlite)
            .to_string();
        assert!(sql.contains("ESCAPE"), "{}", sql);
        assert!(sql.contains("LIKE"), "{}", sql);
    }

    #[test]
    fn no_term_means_no_filter() {
        assert!(contains_any(None, &[item::Column::ItemCode]).is_none());
    }
}
