//! Per-entity request rule sets.
//!
//! Store and update share scalar rules. On update, relation id fields are
//! `sometimes`: leaving one out keeps that relation's links as they are.

use crate::catalog::{CAST_MEMBER_TYPES, MAX_NAME_LEN, RATING_LIST};
use crate::validation::{FieldRules, Rule, RuleSet};

/// Request field carrying category ids.
pub const CATEGORIES_FIELD: &str = "categories_id";

/// Request field carrying genre ids.
pub const GENRES_FIELD: &str = "genres_id";

const NAME: FieldRules = FieldRules {
    field: "name",
    rules: &[Rule::Required, Rule::Max(MAX_NAME_LEN)],
};

const IS_ACTIVE: FieldRules = FieldRules {
    field: "is_active",
    rules: &[Rule::Boolean],
};

const CATEGORIES_REQUIRED: FieldRules = FieldRules {
    field: CATEGORIES_FIELD,
    rules: &[Rule::Required, Rule::Array, Rule::Exists { table: "categories" }],
};

const CATEGORIES_SOMETIMES: FieldRules = FieldRules {
    field: CATEGORIES_FIELD,
    rules: &[Rule::Sometimes, Rule::Array, Rule::Exists { table: "categories" }],
};

const GENRES_REQUIRED: FieldRules = FieldRules {
    field: GENRES_FIELD,
    rules: &[Rule::Required, Rule::Array, Rule::Exists { table: "genres" }],
};

const GENRES_SOMETIMES: FieldRules = FieldRules {
    field: GENRES_FIELD,
    rules: &[Rule::Sometimes, Rule::Array, Rule::Exists { table: "genres" }],
};

/* --------------------------------------------------------------------------
   Categories
   -------------------------------------------------------------------------- */

pub const CATEGORY: RuleSet = RuleSet {
    entity: "Category",
    fields: &[
        NAME,
        FieldRules {
            field: "description",
            rules: &[Rule::Nullable],
        },
        IS_ACTIVE,
    ],
};

/* --------------------------------------------------------------------------
   Genres
   -------------------------------------------------------------------------- */

pub const GENRE_STORE: RuleSet = RuleSet {
    entity: "Genre",
    fields: &[NAME, IS_ACTIVE, CATEGORIES_REQUIRED],
};

pub const GENRE_UPDATE: RuleSet = RuleSet {
    entity: "Genre",
    fields: &[NAME, IS_ACTIVE, CATEGORIES_SOMETIMES],
};

/* --------------------------------------------------------------------------
   Cast members
   -------------------------------------------------------------------------- */

pub const CAST_MEMBER: RuleSet = RuleSet {
    entity: "CastMember",
    fields: &[
        NAME,
        FieldRules {
            field: "type",
            rules: &[Rule::Required, Rule::In(CAST_MEMBER_TYPES), Rule::Integer],
        },
    ],
};

/* --------------------------------------------------------------------------
   Videos
   -------------------------------------------------------------------------- */

const VIDEO_SCALARS: [FieldRules; 6] = [
    FieldRules {
        field: "title",
        rules: &[Rule::Required, Rule::Max(MAX_NAME_LEN)],
    },
    FieldRules {
        field: "description",
        rules: &[Rule::Required],
    },
    FieldRules {
        field: "year_launched",
        rules: &[Rule::Required, Rule::DateFormatYear],
    },
    FieldRules {
        field: "opened",
        rules: &[Rule::Boolean],
    },
    FieldRules {
        field: "rating",
        rules: &[Rule::Required, Rule::In(RATING_LIST)],
    },
    FieldRules {
        field: "duration",
        rules: &[Rule::Required, Rule::Integer],
    },
];

pub const VIDEO_STORE: RuleSet = RuleSet {
    entity: "Video",
    fields: &[
        VIDEO_SCALARS[0],
        VIDEO_SCALARS[1],
        VIDEO_SCALARS[2],
        VIDEO_SCALARS[3],
        VIDEO_SCALARS[4],
        VIDEO_SCALARS[5],
        CATEGORIES_REQUIRED,
        GENRES_REQUIRED,
    ],
};

pub const VIDEO_UPDATE: RuleSet = RuleSet {
    entity: "Video",
    fields: &[
        VIDEO_SCALARS[0],
        VIDEO_SCALARS[1],
        VIDEO_SCALARS[2],
        VIDEO_SCALARS[3],
        VIDEO_SCALARS[4],
        VIDEO_SCALARS[5],
        CATEGORIES_SOMETIMES,
        GENRES_SOMETIMES,
    ],
};
