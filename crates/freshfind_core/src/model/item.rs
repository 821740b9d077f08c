//! Grocery item domain model.
//!
//! # Responsibility
//! - Define the canonical record for one tracked grocery entry.
//! - Turn raw add-form input into validated items.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `name` is trimmed and non-empty.
//! - `quantity >= 1`.
//! - Freshness status is never stored on the item; see `engine::status`.
//!
//! # See also
//! - `engine::status` for the derived classification.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a tracked grocery item.
pub type ItemId = Uuid;

/// Date format accepted for raw expiry input.
pub const EXPIRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// GTIN-8 through GTIN-14 digit codes, as printed on retail packaging.
static GTIN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{8,14}$").expect("valid gtin regex"));

const MOCK_BARCODE_MIN: u64 = 1_000_000_000_000;
const MOCK_BARCODE_MAX: u64 = 10_000_000_000_000;

/// Validation failures for item construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    NilId,
    EmptyName,
    NonPositiveQuantity(i64),
    QuantityTooLarge(i64),
    MissingExpiryDate,
    InvalidExpiryDate(String),
    EmptyBarcode,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "item id must not be nil"),
            Self::EmptyName => write!(f, "item name must not be blank"),
            Self::NonPositiveQuantity(value) => {
                write!(f, "item quantity must be at least 1, got {value}")
            }
            Self::QuantityTooLarge(value) => write!(f, "item quantity is too large: {value}"),
            Self::MissingExpiryDate => write!(f, "item expiry date is required"),
            Self::InvalidExpiryDate(value) => {
                write!(f, "item expiry date must be YYYY-MM-DD, got `{value}`")
            }
            Self::EmptyBarcode => write!(f, "barcode must not be blank"),
        }
    }
}

impl Error for ItemValidationError {}

impl ItemValidationError {
    /// Stable metadata-only code, safe to log without user text.
    pub fn code(&self) -> &'static str {
        match self {
            Self::NilId => "nil_id",
            Self::EmptyName => "empty_name",
            Self::NonPositiveQuantity(_) => "non_positive_quantity",
            Self::QuantityTooLarge(_) => "quantity_too_large",
            Self::MissingExpiryDate => "missing_expiry_date",
            Self::InvalidExpiryDate(_) => "invalid_expiry_date",
            Self::EmptyBarcode => "empty_barcode",
        }
    }
}

/// Product barcode captured on the add form.
///
/// Free text: store codes and hand-typed labels are kept as entered
/// (trimmed). Use [`Barcode::is_gtin`] to tell retail codes apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Barcode(String);

impl Barcode {
    /// Trims raw input; blank input means "no barcode".
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self(trimmed.to_string()))
    }

    /// Produces a random 13-digit code standing in for a scanner read.
    pub fn mock_scan() -> Self {
        let value = rand::thread_rng().gen_range(MOCK_BARCODE_MIN..MOCK_BARCODE_MAX);
        Self(value.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the code is an 8 to 14 digit GTIN.
    pub fn is_gtin(&self) -> bool {
        GTIN_RE.is_match(&self.0)
    }
}

impl TryFrom<String> for Barcode {
    type Error = ItemValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or(ItemValidationError::EmptyBarcode)
    }
}

impl From<Barcode> for String {
    fn from(value: Barcode) -> Self {
        value.0
    }
}

impl Display for Barcode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Raw add-item input as supplied by the hosting form.
///
/// Nothing here is trusted; [`GroceryItem::new`] validates every field.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NewGroceryItem {
    pub name: String,
    pub quantity: i64,
    /// ISO `YYYY-MM-DD`. `None` when the date picker was cleared.
    pub expiry_date: Option<String>,
    /// Blank values are treated as "no barcode".
    pub barcode: Option<String>,
}

impl NewGroceryItem {
    pub fn new(name: impl Into<String>, quantity: i64, expiry_date: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity,
            expiry_date: Some(expiry_date.into()),
            barcode: None,
        }
    }

    pub fn with_barcode(mut self, barcode: impl Into<String>) -> Self {
        self.barcode = Some(barcode.into());
        self
    }
}

/// Canonical record for one tracked grocery entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GroceryItemRecord")]
pub struct GroceryItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub expiry_date: NaiveDate,
    pub barcode: Option<Barcode>,
}

impl GroceryItem {
    /// Validates add-form input and creates an item with a fresh stable ID.
    pub fn new(draft: &NewGroceryItem) -> Result<Self, ItemValidationError> {
        Self::with_id(Uuid::new_v4(), draft)
    }

    /// Validates add-form input against a caller-provided stable ID.
    ///
    /// Used by seeding/import paths where identity already exists.
    pub fn with_id(id: ItemId, draft: &NewGroceryItem) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        let name = normalize_name(&draft.name)?;
        let quantity = normalize_quantity(draft.quantity)?;
        let expiry_date = parse_expiry_date(draft.expiry_date.as_deref())?;
        let barcode = draft.barcode.as_deref().and_then(Barcode::parse);

        Ok(Self {
            id,
            name,
            quantity,
            expiry_date,
            barcode,
        })
    }

    /// Checks invariants on an already-typed item.
    ///
    /// Write paths call this before storing, since fields are public.
    pub fn validate(&self) -> Result<(), ItemValidationError> {
        if self.id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        if self.name.trim().is_empty() {
            return Err(ItemValidationError::EmptyName);
        }
        if self.quantity == 0 {
            return Err(ItemValidationError::NonPositiveQuantity(0));
        }
        Ok(())
    }

    /// Case-insensitive substring match on the display name.
    pub fn name_contains(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}

/// Serde shape for [`GroceryItem`]; converted through validation.
#[derive(Deserialize)]
struct GroceryItemRecord {
    id: ItemId,
    name: String,
    quantity: u32,
    expiry_date: NaiveDate,
    #[serde(default)]
    barcode: Option<String>,
}

impl TryFrom<GroceryItemRecord> for GroceryItem {
    type Error = ItemValidationError;

    fn try_from(value: GroceryItemRecord) -> Result<Self, Self::Error> {
        let item = Self {
            id: value.id,
            name: value.name.trim().to_string(),
            quantity: value.quantity,
            expiry_date: value.expiry_date,
            barcode: value.barcode.as_deref().and_then(Barcode::parse),
        };
        item.validate()?;
        Ok(item)
    }
}

fn normalize_name(value: &str) -> Result<String, ItemValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ItemValidationError::EmptyName);
    }
    Ok(trimmed.to_string())
}

fn normalize_quantity(value: i64) -> Result<u32, ItemValidationError> {
    if value < 1 {
        return Err(ItemValidationError::NonPositiveQuantity(value));
    }
    u32::try_from(value).map_err(|_| ItemValidationError::QuantityTooLarge(value))
}

/// Parses raw expiry input in `YYYY-MM-DD` form.
pub fn parse_expiry_date(value: Option<&str>) -> Result<NaiveDate, ItemValidationError> {
    let raw = value.map(str::trim).unwrap_or("");
    if raw.is_empty() {
        return Err(ItemValidationError::MissingExpiryDate);
    }
    NaiveDate::parse_from_str(raw, EXPIRY_DATE_FORMAT)
        .map_err(|_| ItemValidationError::InvalidExpiryDate(raw.to_string()))
}
