use nutype::nutype;

pub const MAX_KEY_LENGTH: usize = 256;

/// Name of one durable slot in a [`SlotStore`](crate::core::SlotStore).
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_KEY_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct SlotKey(String);
