/// One stored list entry, owned by a single sender.
///
/// Items are immutable once created; the only mutation the system knows
/// is deletion. Per-owner ordering is by `id` ascending, which follows
/// insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub owner: String,
    pub text: String,
    pub created_at: String,
}

impl Item {
    pub fn new(
        id: i64,
        owner: impl Into<String>,
        text: impl Into<String>,
        created_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            owner: owner.into(),
            text: text.into(),
            created_at: created_at.into(),
        }
    }
}
