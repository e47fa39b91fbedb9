//! The status field and its definition mini-language.
//!
//! A status column holds one of a closed set of named values, grouped into
//! coarser categories for querying. The set is authored as a definition
//! block — a pseudo-table the author typically formats as an rst table:
//!
//! ```text
//! @start-saleStatusdef
//! =========== =================================== ==========
//! status      verbose explanation                 category
//! =========== =================================== ==========
//! new         Order has been created              # [init]
//! sale        Order has been invoiced             # [done]
//! cancelled   Order has been cancelled            # [done]
//! =========== =================================== ==========
//! @end-saleStatusdef
//! ```
//!
//! `@start-...`/`@end-...` markers are for documentation-tool include
//! ranges and are ignored, as are blank lines. Rule lines (starting with
//! `=`) toggle a header band: everything between two rule lines is
//! skipped, so the column-name row never becomes a status. True tabular
//! alignment is not required, but it seems foolish not to use it.

use std::collections::HashSet;
use std::fmt;

use dk_modelfields_core::FieldError;
use indexmap::{IndexMap, IndexSet};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::fields::ModelField;
use crate::validators::{MaxLengthValidator, Validator};
use crate::value::Value;

/// A content line: a lowercase name, a verbose label running up to `#`,
/// and a bracketed category list. Anything after the closing bracket is
/// ignored.
static DEF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)^\s*
        (?P<name>[a-z][-a-z0-9]*)
        \s*
        (?P<verbose>[^\#]*)
        \#\s*\[
        (?P<categories>[^\]]*)
        \]",
    )
    .expect("status definition regex is valid")
});

/// Category tags are separated by commas and/or whitespace.
static CATEGORY_SPLIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[,\s]+").expect("category split regex is valid")
});

/// One named, labeled status with zero or more category tags.
///
/// Immutable after construction. Two status values with the same name are
/// interchangeable: equality and hashing consider the name only.
#[derive(Debug, Clone, Eq, serde::Serialize, serde::Deserialize)]
pub struct StatusValue {
    name: String,
    verbose: String,
    categories: Vec<String>,
}

impl StatusValue {
    /// Creates a status value. Name and verbose label are trimmed.
    pub fn new(
        name: &str,
        verbose: &str,
        categories: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.trim().to_string(),
            verbose: verbose.trim().to_string(),
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a status value from a raw category capture, splitting it on
    /// commas/whitespace and dropping empty tags.
    pub fn with_tags(name: &str, verbose: &str, raw_categories: &str) -> Self {
        let categories = CATEGORY_SPLIT_RE
            .split(raw_categories)
            .filter(|tag| !tag.is_empty())
            .map(ToString::to_string)
            .collect();
        Self {
            name: name.trim().to_string(),
            verbose: verbose.trim().to_string(),
            categories,
        }
    }

    /// The identifier, unique within its definition.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The display label.
    pub fn verbose(&self) -> &str {
        &self.verbose
    }

    /// The category tags, in declaration order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }
}

impl PartialEq for StatusValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl std::hash::Hash for StatusValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for StatusValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A parsed status definition: an ordered name → [`StatusValue`] mapping
/// plus a category reverse index.
///
/// Built once from a definition block and read-only afterwards; safe to
/// share across threads.
///
/// # Examples
///
/// ```
/// use dk_modelfields_db::fields::StatusDef;
///
/// let def = StatusDef::new("
///     open    Accepting submissions   # [active]
///     closed  No longer accepting     # [finished]
/// ");
/// assert!(def.contains("open"));
/// assert!(def.is_category("active"));
/// assert_eq!(def.name_length(), 6);
/// ```
#[derive(Debug, Clone, Default)]
pub struct StatusDef {
    status: IndexMap<String, StatusValue>,
    categories: IndexSet<String>,
    category_index: IndexMap<String, IndexSet<String>>,
}

impl StatusDef {
    /// Parses a definition block leniently.
    ///
    /// Never fails: content lines that do not match the definition pattern
    /// are skipped with a `tracing` warning. Use [`parse_strict`] to turn
    /// those into errors instead.
    ///
    /// [`parse_strict`]: Self::parse_strict
    pub fn new(text: &str) -> Self {
        // the lenient pass never returns Err
        Self::from_status(Self::parse_lines(text, false).unwrap_or_default())
    }

    /// Parses a definition block, failing on the first content line that
    /// does not match the definition pattern.
    pub fn parse_strict(text: &str) -> Result<Self, FieldError> {
        Ok(Self::from_status(Self::parse_lines(text, true)?))
    }

    fn parse_lines(text: &str, strict: bool) -> Result<IndexMap<String, StatusValue>, FieldError> {
        let mut defs = IndexMap::new();
        let mut in_header = false;

        for raw in text.lines() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('@') {
                continue;
            }
            if line.starts_with('=') {
                // two-state toggle: first rule line opens a header band,
                // the second closes it
                in_header = !in_header;
                continue;
            }
            if in_header {
                continue;
            }
            if let Some(caps) = DEF_RE.captures(line) {
                let sval = StatusValue::with_tags(
                    &caps["name"],
                    &caps["verbose"],
                    &caps["categories"],
                );
                // first occurrence fixes the position, a later duplicate
                // replaces the value
                defs.insert(sval.name().to_string(), sval);
            } else if strict {
                return Err(FieldError::MalformedStatusLine {
                    line: line.to_string(),
                });
            } else {
                tracing::warn!(line, "skipping malformed status definition line");
            }
        }
        Ok(defs)
    }

    fn from_status(status: IndexMap<String, StatusValue>) -> Self {
        let mut categories = IndexSet::new();
        let mut category_index: IndexMap<String, IndexSet<String>> = IndexMap::new();
        for sval in status.values() {
            for cat in sval.categories() {
                categories.insert(cat.clone());
                category_index
                    .entry(cat.clone())
                    .or_default()
                    .insert(sval.name().to_string());
            }
        }
        Self {
            status,
            categories,
            category_index,
        }
    }

    /// The number of statuses defined.
    pub fn len(&self) -> usize {
        self.status.len()
    }

    /// Whether the definition is empty.
    pub fn is_empty(&self) -> bool {
        self.status.is_empty()
    }

    /// Looks up a status by name.
    pub fn get(&self, name: &str) -> Option<&StatusValue> {
        self.status.get(name)
    }

    /// Is `name` a well-defined status value?
    pub fn contains(&self, name: &str) -> bool {
        self.status.contains_key(name)
    }

    /// Is `tag` a known category?
    pub fn is_category(&self, tag: &str) -> bool {
        self.categories.contains(tag)
    }

    /// The statuses, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusValue> {
        self.status.values()
    }

    /// The distinct category tags, in first-seen order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(String::as_str)
    }

    /// All statuses belonging to `tag`, in declaration order.
    pub fn category_to_status(&self, tag: &str) -> Vec<&StatusValue> {
        self.category_index
            .get(tag)
            .into_iter()
            .flatten()
            .filter_map(|name| self.status.get(name))
            .collect()
    }

    /// The first category tag of the named status.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.categories_of(name)?.first().map(String::as_str)
    }

    /// All category tags of the named status, in declaration order.
    pub fn categories_of(&self, name: &str) -> Option<&[String]> {
        self.status.get(name).map(StatusValue::categories)
    }

    /// `(name, verbose)` pairs in declaration order, for select boxes etc.
    pub fn options(&self) -> Vec<(String, String)> {
        self.status
            .values()
            .map(|sv| (sv.name().to_string(), sv.verbose().to_string()))
            .collect()
    }

    /// The length of the longest status name (0 when empty). Used to size
    /// the storage column.
    pub fn name_length(&self) -> usize {
        self.status.keys().map(String::len).max().unwrap_or(0)
    }

    /// Expands query tokens to the concrete status names they denote.
    ///
    /// A token naming a category expands to every status in that category;
    /// any other token passes through verbatim — unknown literal names are
    /// not validated here, the storage boundary rejects them if it cares.
    pub fn expand<I>(&self, values: I) -> HashSet<String>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut res = HashSet::new();
        for v in values {
            let v = v.as_ref();
            if let Some(members) = self.category_index.get(v) {
                res.extend(members.iter().cloned());
            } else {
                res.insert(v.to_string());
            }
        }
        res
    }

    /// [`expand`](Self::expand) for a single scalar token.
    pub fn expand_one(&self, value: &str) -> HashSet<String> {
        self.expand([value])
    }
}

/// A character status column backed by a [`StatusDef`].
///
/// The column width defaults to the longest status name; the definition's
/// `(name, verbose)` pairs become the field's choices.
#[derive(Debug, Clone)]
pub struct StatusField {
    statusdef: StatusDef,
    max_length: usize,
}

impl StatusField {
    /// Creates a status field from a definition block (lenient parse).
    pub fn new(text: &str) -> Self {
        let statusdef = StatusDef::new(text);
        let max_length = statusdef.name_length();
        Self {
            statusdef,
            max_length,
        }
    }

    /// Overrides the storage column width.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// The parsed definition.
    pub const fn statusdef(&self) -> &StatusDef {
        &self.statusdef
    }
}

impl ModelField for StatusField {
    fn description(&self) -> &'static str {
        "Status field"
    }

    fn db_type(&self) -> String {
        format!("VARCHAR({})", self.max_length)
    }

    fn max_length(&self) -> Option<usize> {
        Some(self.max_length)
    }

    fn validators(&self) -> Vec<Box<dyn Validator>> {
        vec![Box::new(MaxLengthValidator::new(self.max_length))]
    }

    fn choices(&self) -> Option<Vec<(String, String)>> {
        Some(self.statusdef.options())
    }

    /// Converts input into a [`StatusValue`], idempotently.
    ///
    /// Empty input converts to `Null`; a string must name a known status;
    /// values of any other type pass through unchanged (the permissive
    /// fallback for framework-internal sentinels).
    fn to_python(&self, value: Value) -> Result<Value, FieldError> {
        match value {
            Value::Null => Ok(Value::Null),
            Value::Status(sv) => Ok(Value::Status(sv)),
            Value::String(s) if s.is_empty() => Ok(Value::Null),
            Value::String(s) => self
                .statusdef
                .get(&s)
                .map(|sv| Value::Status(sv.clone()))
                .ok_or(FieldError::UnknownStatus(s)),
            other => Ok(other),
        }
    }

    /// The status name is the literal value written to storage.
    fn get_prep_value(&self, value: Value) -> Result<Value, FieldError> {
        match self.to_python(value)? {
            Value::Null => Ok(Value::Null),
            Value::Status(sv) => Ok(Value::String(sv.name().to_string())),
            other => Ok(other),
        }
    }

    /// `"in"` lookups accept status names, category names, or a list of
    /// either; categories expand to their member statuses. The result is
    /// the sorted, deduplicated list of names to match.
    fn get_prep_lookup(&self, lookup_type: &str, value: Value) -> Result<Value, FieldError> {
        if lookup_type != "in" {
            return Ok(value);
        }
        let expanded = match value {
            Value::String(s) => self.statusdef.expand_one(&s),
            Value::List(items) => self.statusdef.expand(items.iter().map(|item| match item {
                Value::Status(sv) => sv.name().to_string(),
                other => other.to_string(),
            })),
            other => self.statusdef.expand_one(&other.to_string()),
        };
        let mut names: Vec<String> = expanded.into_iter().collect();
        names.sort();
        Ok(Value::List(names.into_iter().map(Value::String).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SALE_STATUSDEF: &str = "
        @start-saleStatusdef
        =========== =================================== =======================
        status      verbose explanation (for web)       category
        =========== =================================== =======================
        new         Order has been created              # [init]
        sale        Order has been invoiced             # [done]
        cancelled   Order has been cancelled            # [done]
        error       Something went wrong                # [err]
        credit      Order has been credited             # [done]
        =========== =================================== =======================
        @end-saleStatusdef
    ";

    fn names(def: &StatusDef) -> Vec<&str> {
        def.iter().map(StatusValue::name).collect()
    }

    #[test]
    fn test_parse_in_declaration_order() {
        let def = StatusDef::new(SALE_STATUSDEF);
        assert_eq!(
            names(&def),
            vec!["new", "sale", "cancelled", "error", "credit"]
        );
    }

    #[test]
    fn test_header_band_is_skipped() {
        // the header row ("status   verbose ...") sits between two rule
        // lines and must never become a status
        let def = StatusDef::new(SALE_STATUSDEF);
        assert!(!def.contains("status"));
        assert_eq!(def.len(), 5);
    }

    #[test]
    fn test_third_rule_line_opens_a_new_header_band() {
        let def = StatusDef::new(
            "
            ====
            head
            ====
            ok    All good   # [init]
            ====
            skipped-not-a-status
            ",
        );
        assert_eq!(names(&def), vec!["ok"]);
    }

    #[test]
    fn test_verbose_and_categories() {
        let def = StatusDef::new(SALE_STATUSDEF);
        let sale = def.get("sale").unwrap();
        assert_eq!(sale.verbose(), "Order has been invoiced");
        assert_eq!(sale.categories(), ["done"]);
    }

    #[test]
    fn test_category_index() {
        let def = StatusDef::new(SALE_STATUSDEF);
        assert!(def.is_category("done"));
        assert!(!def.is_category("sale"));
        let done: Vec<&str> = def
            .category_to_status("done")
            .into_iter()
            .map(StatusValue::name)
            .collect();
        assert_eq!(done, vec!["sale", "cancelled", "credit"]);
        assert!(def.category_to_status("nope").is_empty());
    }

    #[test]
    fn test_expand_category() {
        let def = StatusDef::new(SALE_STATUSDEF);
        let expected: HashSet<String> = ["sale", "cancelled", "credit"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(def.expand_one("done"), expected);
    }

    #[test]
    fn test_expand_passes_literals_through() {
        let def = StatusDef::new(SALE_STATUSDEF);
        let res = def.expand(["done", "new", "unknown"]);
        assert!(res.contains("sale"));
        assert!(res.contains("new"));
        // unknown literal names are not validated here
        assert!(res.contains("unknown"));
        assert_eq!(res.len(), 5);
    }

    #[test]
    fn test_multi_category_status() {
        let def = StatusDef::new("foo   Some label   # [bar,baz]");
        assert_eq!(def.categories_of("foo").unwrap(), ["bar", "baz"]);
        assert_eq!(def.category_of("foo"), Some("bar"));
        assert!(def.is_category("bar"));
        assert!(def.is_category("baz"));
    }

    #[test]
    fn test_category_split_on_commas_and_whitespace() {
        let def = StatusDef::new("foo   Label   # [ a, b  c ,d ]");
        assert_eq!(def.categories_of("foo").unwrap(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn test_empty_category_list() {
        let def = StatusDef::new("foo   Label   # []");
        assert!(def.categories_of("foo").unwrap().is_empty());
        assert_eq!(def.categories().count(), 0);
    }

    #[test]
    fn test_name_length() {
        let def = StatusDef::new(SALE_STATUSDEF);
        assert_eq!(def.name_length(), "cancelled".len());
        assert_eq!(StatusDef::new("").name_length(), 0);
    }

    #[test]
    fn test_malformed_line_is_skipped_leniently() {
        let def = StatusDef::new(
            "
            ok        Fine          # [init]
            Bad Line without a category marker
            done      Finished      # [final]
            ",
        );
        assert_eq!(def.len(), 2);
    }

    #[test]
    fn test_malformed_line_fails_in_strict_mode() {
        let err = StatusDef::parse_strict(
            "
            ok        Fine          # [init]
            Bad Line without a category marker
            ",
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::MalformedStatusLine { .. }));
    }

    #[test]
    fn test_duplicate_name_keeps_position_replaces_value() {
        let def = StatusDef::new(
            "
            one    First     # [a]
            two    Second    # [b]
            one    Replaced  # [c]
            ",
        );
        assert_eq!(names(&def), vec!["one", "two"]);
        assert_eq!(def.get("one").unwrap().verbose(), "Replaced");
        assert_eq!(def.category_of("one"), Some("c"));
    }

    #[test]
    fn test_text_after_closing_bracket_is_ignored() {
        let def = StatusDef::new("ok   Fine   # [init] trailing junk");
        assert_eq!(def.categories_of("ok").unwrap(), ["init"]);
    }

    #[test]
    fn test_options() {
        let def = StatusDef::new(SALE_STATUSDEF);
        let options = def.options();
        assert_eq!(options[0].0, "new");
        assert_eq!(options[0].1, "Order has been created");
        assert_eq!(options.len(), 5);
    }

    #[test]
    fn test_status_value_equality_by_name() {
        let a = StatusValue::new("sale", "Invoiced", ["done"]);
        let b = StatusValue::new("sale", "Different label", ["other"]);
        assert_eq!(a, b);
    }

    // ── StatusField ─────────────────────────────────────────────────────

    fn sale_field() -> StatusField {
        StatusField::new(SALE_STATUSDEF)
    }

    #[test]
    fn test_field_db_type_and_max_length() {
        let f = sale_field();
        assert_eq!(f.max_length(), Some(9));
        assert_eq!(f.clone().with_max_length(12).db_type(), "VARCHAR(12)");
        assert_eq!(f.db_type(), "VARCHAR(9)");
    }

    #[test]
    fn test_field_choices() {
        let f = sale_field();
        let choices = f.choices().unwrap();
        assert_eq!(choices.len(), 5);
        assert_eq!(choices[1], ("sale".into(), "Order has been invoiced".into()));
    }

    #[test]
    fn test_to_python_string() {
        let f = sale_field();
        let v = f.to_python(Value::from("sale")).unwrap();
        assert_eq!(v.as_status().unwrap().verbose(), "Order has been invoiced");
    }

    #[test]
    fn test_to_python_is_idempotent() {
        let f = sale_field();
        let sv = f.to_python(Value::from("sale")).unwrap();
        assert_eq!(f.to_python(sv.clone()).unwrap(), sv);
    }

    #[test]
    fn test_to_python_empty_is_null() {
        let f = sale_field();
        assert_eq!(f.to_python(Value::Null).unwrap(), Value::Null);
        assert_eq!(f.to_python(Value::from("")).unwrap(), Value::Null);
    }

    #[test]
    fn test_to_python_unknown_status() {
        let f = sale_field();
        let err = f.to_python(Value::from("nonexistent")).unwrap_err();
        assert!(matches!(err, FieldError::UnknownStatus(ref s) if s == "nonexistent"));
    }

    #[test]
    fn test_to_python_other_values_pass_through() {
        let f = sale_field();
        assert_eq!(f.to_python(Value::Int(7)).unwrap(), Value::Int(7));
    }

    #[test]
    fn test_prep_value_roundtrip() {
        let f = sale_field();
        for name in ["new", "sale", "cancelled", "error", "credit"] {
            let prepared = f.get_prep_value(Value::from(name)).unwrap();
            assert_eq!(prepared, Value::from(name));
            let back = f.to_python(prepared).unwrap();
            assert_eq!(back, f.to_python(Value::from(name)).unwrap());
        }
    }

    #[test]
    fn test_prep_lookup_in_expands_category() {
        let f = sale_field();
        let res = f.get_prep_lookup("in", Value::from("done")).unwrap();
        assert_eq!(
            res,
            Value::List(vec![
                Value::from("cancelled"),
                Value::from("credit"),
                Value::from("sale"),
            ])
        );
    }

    #[test]
    fn test_prep_lookup_in_with_status_values() {
        let f = sale_field();
        let sv = StatusValue::new("cancelled", "Order has been cancelled", ["done"]);
        let res = f
            .get_prep_lookup("in", Value::List(vec![Value::Status(sv)]))
            .unwrap();
        assert_eq!(res, Value::List(vec![Value::from("cancelled")]));
    }

    #[test]
    fn test_prep_lookup_other_types_pass_through() {
        let f = sale_field();
        let res = f.get_prep_lookup("exact", Value::from("init")).unwrap();
        assert_eq!(res, Value::from("init"));
    }

    #[test]
    fn test_value_to_string() {
        let f = sale_field();
        let sv = f.to_python(Value::from("sale")).unwrap();
        assert_eq!(f.value_to_string(&sv).unwrap(), "sale");
        assert_eq!(f.value_to_string(&Value::Null).unwrap(), "");
    }
}
