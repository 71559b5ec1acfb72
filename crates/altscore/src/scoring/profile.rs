use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped applicant submission exactly as it arrived from a form, JSON body, or CSV row.
///
/// Every field is optional. Coercion into an [`ApplicantProfile`] happens at scoring time so
/// that a malformed value can be turned into the fallback result instead of a rejected request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawProfile(Map<String, Value>);

impl RawProfile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Builder-style insert, mostly useful when assembling scenarios.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.0.remove(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Overlay `changes` on top of this profile, field by field.
    pub fn merged_with(&self, changes: &RawProfile) -> RawProfile {
        let mut merged = self.0.clone();
        for (field, value) in &changes.0 {
            merged.insert(field.clone(), value.clone());
        }
        RawProfile(merged)
    }
}

impl From<Map<String, Value>> for RawProfile {
    fn from(value: Map<String, Value>) -> Self {
        Self(value)
    }
}

/// Field names accepted in a raw profile.
pub mod fields {
    pub const RENT_HISTORY: &str = "rentHistory";
    pub const UTILITY_HISTORY: &str = "utilityHistory";
    pub const MONTHLY_INCOME: &str = "monthlyIncome";
    pub const AVG_BALANCE: &str = "avgBalance";
    pub const SAVINGS_RATE: &str = "savingsRate";
    pub const OVERDRAFTS: &str = "overdrafts";
    pub const EMPLOYMENT_STABILITY: &str = "employmentStability";
    pub const RENT_AMOUNT: &str = "rentAmount";

    pub const ALL: [&str; 8] = [
        RENT_HISTORY,
        UTILITY_HISTORY,
        MONTHLY_INCOME,
        AVG_BALANCE,
        SAVINGS_RATE,
        OVERDRAFTS,
        EMPLOYMENT_STABILITY,
        RENT_AMOUNT,
    ];
}

/// Self-reported on-time record for rent or utility bills.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentHistory {
    Excellent,
    Good,
    Fair,
    Poor,
    Missing,
}

impl PaymentHistory {
    /// Unrecognised scalars (other casings, numbers, booleans) count as missing. Arrays and
    /// objects cannot be looked up at all and are malformed.
    pub fn from_value(field: &'static str, value: Option<&Value>) -> Result<Self, ProfileError> {
        Ok(match categorical(field, value)? {
            Some("excellent") => Self::Excellent,
            Some("good") => Self::Good,
            Some("fair") => Self::Fair,
            Some("poor") => Self::Poor,
            _ => Self::Missing,
        })
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::Excellent => 100,
            Self::Good => 75,
            Self::Fair => 40,
            Self::Poor => 10,
            Self::Missing => 0,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
            Self::Poor => "poor",
            Self::Missing => "unreported",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmploymentStability {
    High,
    Medium,
    Low,
    Missing,
}

impl EmploymentStability {
    pub fn from_value(field: &'static str, value: Option<&Value>) -> Result<Self, ProfileError> {
        Ok(match categorical(field, value)? {
            Some("high") => Self::High,
            Some("medium") => Self::Medium,
            Some("low") => Self::Low,
            _ => Self::Missing,
        })
    }

    pub const fn points(self) -> u8 {
        match self {
            Self::High => 100,
            Self::Medium => 70,
            Self::Low => 30,
            Self::Missing => 0,
        }
    }
}

/// Typed applicant attributes after coercion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApplicantProfile {
    pub rent_history: PaymentHistory,
    pub utility_history: PaymentHistory,
    pub monthly_income: f64,
    pub avg_balance: f64,
    pub savings_rate: f64,
    pub rent_amount: f64,
    pub overdrafts: i64,
    pub employment_stability: EmploymentStability,
}

impl Default for ApplicantProfile {
    fn default() -> Self {
        Self {
            rent_history: PaymentHistory::Missing,
            utility_history: PaymentHistory::Missing,
            monthly_income: 0.0,
            avg_balance: 0.0,
            savings_rate: 0.0,
            rent_amount: 0.0,
            overdrafts: 0,
            employment_stability: EmploymentStability::Missing,
        }
    }
}

impl ApplicantProfile {
    /// Coerce a raw submission. Numeric fields must be numbers or numeric strings; an absent
    /// field takes its zero default, but a present `null` is malformed. Categorical fields only
    /// reject arrays and objects.
    pub fn from_raw(raw: &RawProfile) -> Result<Self, ProfileError> {
        Ok(Self {
            rent_history: PaymentHistory::from_value(
                fields::RENT_HISTORY,
                raw.get(fields::RENT_HISTORY),
            )?,
            utility_history: PaymentHistory::from_value(
                fields::UTILITY_HISTORY,
                raw.get(fields::UTILITY_HISTORY),
            )?,
            monthly_income: decimal_field(raw, fields::MONTHLY_INCOME)?,
            avg_balance: decimal_field(raw, fields::AVG_BALANCE)?,
            savings_rate: decimal_field(raw, fields::SAVINGS_RATE)?,
            rent_amount: decimal_field(raw, fields::RENT_AMOUNT)?,
            overdrafts: count_field(raw, fields::OVERDRAFTS)?,
            employment_stability: EmploymentStability::from_value(
                fields::EMPLOYMENT_STABILITY,
                raw.get(fields::EMPLOYMENT_STABILITY),
            )?,
        })
    }
}

/// A field that could not be coerced to the type the calculator expects.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProfileError {
    #[error("field `{field}` must be {expected}, got {value}")]
    Malformed {
        field: &'static str,
        expected: &'static str,
        value: String,
    },
}

impl ProfileError {
    pub fn field(&self) -> &'static str {
        match self {
            ProfileError::Malformed { field, .. } => *field,
        }
    }
}

fn malformed(field: &'static str, expected: &'static str, value: &Value) -> ProfileError {
    ProfileError::Malformed {
        field,
        expected,
        value: value.to_string(),
    }
}

fn categorical<'a>(
    field: &'static str,
    value: Option<&'a Value>,
) -> Result<Option<&'a str>, ProfileError> {
    match value {
        Some(found @ (Value::Array(_) | Value::Object(_))) => {
            Err(malformed(field, "a category name", found))
        }
        other => Ok(other.and_then(Value::as_str)),
    }
}

pub(crate) fn decimal_field(raw: &RawProfile, field: &'static str) -> Result<f64, ProfileError> {
    let Some(value) = raw.get(field) else {
        return Ok(0.0);
    };

    match value {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| malformed(field, "a decimal number", value)),
        Value::String(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| malformed(field, "a decimal number", value)),
        Value::Bool(flag) => Ok(if *flag { 1.0 } else { 0.0 }),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(malformed(field, "a decimal number", value))
        }
    }
}

/// Whole counts truncate fractional JSON numbers but reject fractional strings such as `"2.5"`.
pub(crate) fn count_field(raw: &RawProfile, field: &'static str) -> Result<i64, ProfileError> {
    let Some(value) = raw.get(field) else {
        return Ok(0);
    };

    match value {
        Value::Number(number) => {
            if let Some(count) = number.as_i64() {
                return Ok(count);
            }
            match number.as_f64() {
                Some(decimal) if decimal.is_finite() => Ok(decimal.trunc() as i64),
                _ => Err(malformed(field, "a whole number", value)),
            }
        }
        Value::String(text) => text
            .trim()
            .parse::<i64>()
            .map_err(|_| malformed(field, "a whole number", value)),
        Value::Bool(flag) => Ok(i64::from(*flag)),
        Value::Null | Value::Array(_) | Value::Object(_) => {
            Err(malformed(field, "a whole number", value))
        }
    }
}
