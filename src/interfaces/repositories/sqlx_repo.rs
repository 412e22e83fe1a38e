/// Single sqlx-backed implementation of every repository trait. One struct,
/// one pool, one column-naming convention across all entities.
#[derive(Clone)]
pub struct SqlxRepo {
    pub(crate) pool: sqlx::PgPool,
}

impl SqlxRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxRepo { pool }
    }
}
