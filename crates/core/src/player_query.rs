//! Query normalization for player listing and export.
//!
//! Raw query-string values arrive as strings. [`PlayersQuery::normalize`]
//! turns them into a typed [`NormalizedQuery`] without ever failing:
//! malformed numbers disable the corresponding filter, malformed paging
//! falls back to the defaults, and unknown sort fields are dropped.

use crate::player::{stat_or_zero, Player};

// ---------------------------------------------------------------------------
// Paging defaults
// ---------------------------------------------------------------------------

/// Page used when `page` is absent or malformed.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when `limit` is absent or malformed.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Largest page size a list request may ask for.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Row cap applied to CSV exports in place of pagination.
pub const EXPORT_ROW_CAP: i64 = 100_000;

// ---------------------------------------------------------------------------
// Raw input
// ---------------------------------------------------------------------------

/// Query parameters exactly as received, before any validation.
///
/// Every field is a string so that a malformed value never rejects the
/// request; [`normalize`](Self::normalize) decides what each value means.
#[derive(Debug, Clone, Default)]
pub struct PlayersQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub name: Option<String>,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub min_rating: Option<String>,
    pub max_rating: Option<String>,
    pub min_speed: Option<String>,
    pub max_speed: Option<String>,
    pub sort: Option<String>,
}

// ---------------------------------------------------------------------------
// Sorting
// ---------------------------------------------------------------------------

/// Columns a listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortField {
    Name,
    Club,
    Nationality,
    Position,
    Rating,
    Speed,
}

impl SortField {
    pub const ALL: [SortField; 6] = [
        SortField::Name,
        SortField::Club,
        SortField::Nationality,
        SortField::Position,
        SortField::Rating,
        SortField::Speed,
    ];

    /// Name used in the `sort` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Club => "club",
            SortField::Nationality => "nationality",
            SortField::Position => "position",
            SortField::Rating => "rating",
            SortField::Speed => "speed",
        }
    }

    pub fn from_str_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.as_str() == value)
    }

    /// Compare two players on this field, ascending.
    ///
    /// Text compares by [`text_sort_key`]; missing stats compare as 0.
    pub fn compare(self, a: &Player, b: &Player) -> std::cmp::Ordering {
        match self {
            SortField::Name => compare_text(&a.name, &b.name),
            SortField::Club => compare_text(&a.club, &b.club),
            SortField::Nationality => compare_text(&a.nationality, &b.nationality),
            SortField::Position => compare_text(&a.position, &b.position),
            SortField::Rating => stat_or_zero(a.rating).cmp(&stat_or_zero(b.rating)),
            SortField::Speed => stat_or_zero(a.speed).cmp(&stat_or_zero(b.speed)),
        }
    }
}

fn compare_text(a: &str, b: &str) -> std::cmp::Ordering {
    text_sort_key(a).cmp(&text_sort_key(b))
}

/// Key text columns are ordered by: Latin diacritics folded to their base
/// letters, then lowercased, compared by code point.
///
/// Matches `LOWER(unaccent(col)) COLLATE "C"` on the SQL side, so both
/// backends put `Álvaro` between `Alonso` and `Bruno`.
pub fn text_sort_key(value: &str) -> String {
    let mut folded = String::with_capacity(value.len());
    for c in value.chars() {
        match fold_diacritic(c) {
            Some(base) => folded.push_str(base),
            None => folded.push(c),
        }
    }
    folded.to_lowercase()
}

/// Base letters for Latin-1 Supplement and Latin Extended-A, following
/// PostgreSQL's `unaccent.rules`.
fn fold_diacritic(c: char) -> Option<&'static str> {
    let base = match c {
        'À'..='Å' | 'à'..='å' | '\u{100}'..='\u{105}' => "a",
        'Æ' | 'æ' => "ae",
        'Ç' | 'ç' | '\u{106}'..='\u{10D}' => "c",
        'Ð' | 'ð' | '\u{10E}'..='\u{111}' => "d",
        'È'..='Ë' | 'è'..='ë' | '\u{112}'..='\u{11B}' => "e",
        '\u{11C}'..='\u{123}' => "g",
        '\u{124}'..='\u{127}' => "h",
        'Ì'..='Ï' | 'ì'..='ï' | '\u{128}'..='\u{131}' => "i",
        '\u{132}' | '\u{133}' => "ij",
        '\u{134}' | '\u{135}' => "j",
        '\u{136}' | '\u{137}' => "k",
        '\u{139}'..='\u{142}' => "l",
        'Ñ' | 'ñ' | '\u{143}'..='\u{148}' | '\u{14A}' | '\u{14B}' => "n",
        'Ò'..='Ö' | 'Ø' | 'ò'..='ö' | 'ø' | '\u{14C}'..='\u{151}' => "o",
        '\u{152}' | '\u{153}' => "oe",
        '\u{154}'..='\u{159}' => "r",
        'ß' => "ss",
        '\u{15A}'..='\u{161}' => "s",
        '\u{162}'..='\u{167}' => "t",
        'Þ' | 'þ' => "th",
        'Ù'..='Ü' | 'ù'..='ü' | '\u{168}'..='\u{173}' => "u",
        '\u{174}' | '\u{175}' => "w",
        'Ý' | 'ý' | 'ÿ' | '\u{176}'..='\u{178}' => "y",
        '\u{179}'..='\u{17E}' => "z",
        _ => return None,
    };
    Some(base)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

/// One `(field, direction)` entry of an ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SortKey {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortKey {
    pub fn asc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(field: SortField) -> Self {
        Self {
            field,
            direction: SortDirection::Desc,
        }
    }

    /// Render as a `sort` token: `name` or `-name`.
    pub fn to_param(self) -> String {
        match self.direction {
            SortDirection::Asc => self.field.as_str().to_string(),
            SortDirection::Desc => format!("-{}", self.field.as_str()),
        }
    }

    /// Compare two players on this key, honouring the direction.
    pub fn compare(self, a: &Player, b: &Player) -> std::cmp::Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

/// Parse a `sort` parameter such as `name,-rating` into sort keys.
///
/// Tokens are comma separated and trimmed; a leading `-` means descending.
/// Unknown fields are skipped. Returns an empty list when nothing usable
/// remains, which callers treat as "no explicit order".
pub fn parse_sort(raw: Option<&str>) -> Vec<SortKey> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(|token| match token.strip_prefix('-') {
            Some(field) => SortField::from_str_value(field).map(SortKey::desc),
            None => SortField::from_str_value(token).map(SortKey::asc),
        })
        .collect()
}

/// Ordering applied when a request specifies none.
pub fn default_order() -> Vec<SortKey> {
    vec![SortKey::asc(SortField::Name)]
}

// ---------------------------------------------------------------------------
// Normalized output
// ---------------------------------------------------------------------------

/// Filters a listing applies. `None` means the filter is not applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub club: Option<String>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub min_rating: Option<i32>,
    pub max_rating: Option<i32>,
    pub min_speed: Option<i32>,
    pub max_speed: Option<i32>,
}

/// Result of normalizing a [`PlayersQuery`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedQuery {
    pub filter: PlayerFilter,
    pub page: i64,
    pub limit: i64,
    /// Empty when the caller asked for no particular order.
    pub order: Vec<SortKey>,
}

impl NormalizedQuery {
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Repository query for the requested page.
    pub fn page_query(&self) -> PlayerListQuery {
        PlayerListQuery {
            filter: self.filter.clone(),
            limit: self.limit,
            offset: self.offset(),
            order: self.order.clone(),
        }
    }

    /// Repository query for an export: same filter and order, no paging.
    pub fn export_query(&self) -> PlayerListQuery {
        PlayerListQuery {
            filter: self.filter.clone(),
            limit: EXPORT_ROW_CAP,
            offset: 0,
            order: self.order.clone(),
        }
    }
}

/// What a repository backend receives for a list call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerListQuery {
    pub filter: PlayerFilter,
    pub limit: i64,
    pub offset: i64,
    pub order: Vec<SortKey>,
}

impl PlayerListQuery {
    /// The requested order, or name ascending when none was given.
    pub fn effective_order(&self) -> Vec<SortKey> {
        if self.order.is_empty() {
            default_order()
        } else {
            self.order.clone()
        }
    }
}

impl PlayersQuery {
    /// Build from decoded query-string pairs.
    ///
    /// Keys use the camelCase wire names. When a key repeats, the first
    /// value wins; unknown keys are ignored.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                "name" => &mut query.name,
                "club" => &mut query.club,
                "nationality" => &mut query.nationality,
                "position" => &mut query.position,
                "minRating" => &mut query.min_rating,
                "maxRating" => &mut query.max_rating,
                "minSpeed" => &mut query.min_speed,
                "maxSpeed" => &mut query.max_speed,
                "sort" => &mut query.sort,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into());
            }
        }
        query
    }

    pub fn normalize(&self) -> NormalizedQuery {
        NormalizedQuery {
            filter: PlayerFilter {
                name: non_empty(self.name.as_deref()),
                club: non_empty(self.club.as_deref()),
                nationality: non_empty(self.nationality.as_deref()),
                position: non_empty(self.position.as_deref()),
                min_rating: parse_optional_int(self.min_rating.as_deref()),
                max_rating: parse_optional_int(self.max_rating.as_deref()),
                min_speed: parse_optional_int(self.min_speed.as_deref()),
                max_speed: parse_optional_int(self.max_speed.as_deref()),
            },
            page: parse_positive(self.page.as_deref()).unwrap_or(DEFAULT_PAGE),
            limit: parse_positive(self.limit.as_deref())
                .unwrap_or(DEFAULT_PAGE_LIMIT)
                .min(MAX_PAGE_LIMIT),
            order: parse_sort(self.sort.as_deref()),
        }
    }
}

/// Trim a text filter; blank input disables it.
fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Parse an integer filter bound; anything unparsable disables it.
pub fn parse_optional_int(raw: Option<&str>) -> Option<i32> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .and_then(|s| s.parse().ok())
}

/// Parse a paging value, accepting only integers >= 1.
fn parse_positive(raw: Option<&str>) -> Option<i64> {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i64>().ok())
        .filter(|n| *n >= 1)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
