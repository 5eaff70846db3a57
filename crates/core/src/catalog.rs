//! Catalog domain constants: video ratings, cast member types, field limits.

/* --------------------------------------------------------------------------
   Video ratings
   -------------------------------------------------------------------------- */

/// Free for all audiences.
pub const RATING_FREE: &str = "L";

/// All valid `videos.rating` values, in ascending age order.
pub const RATING_LIST: &[&str] = &[RATING_FREE, "10", "12", "14", "16", "18"];

/* --------------------------------------------------------------------------
   Cast member types
   -------------------------------------------------------------------------- */

/// Accepted `type` values: `0` = director, `1` = actor. String forms, since
/// request bodies may send either a number or a numeric string.
pub const CAST_MEMBER_TYPES: &[&str] = &["0", "1"];

/* --------------------------------------------------------------------------
   Field limits
   -------------------------------------------------------------------------- */

/// Maximum length for names and titles.
pub const MAX_NAME_LEN: usize = 255;
