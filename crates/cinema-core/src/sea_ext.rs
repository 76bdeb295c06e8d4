use sea_orm::{
    ColumnTrait,
    sea_query::{Expr, Func, LikeExpr, SimpleExpr},
};

/// Case-insensitive `LIKE` on a column: `UPPER(table.column) LIKE pattern ESCAPE escape`.
///
/// The pattern is bound as a parameter and must already be upper-cased.
pub trait UpperLike {
    fn upper_like(self, pattern: String, escape: char) -> SimpleExpr;
}

impl<C> UpperLike for C
where
    C: ColumnTrait,
{
    fn upper_like(self, pattern: String, escape: char) -> SimpleExpr {
        Expr::expr(Func::upper(Expr::col(self.as_column_ref())))
            .like(LikeExpr::new(pattern).escape(escape))
    }
}
