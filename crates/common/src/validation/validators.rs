// Field Validators - Reusable validation components
use std::fmt::Display;

/// Trait for field validators
pub trait FieldValidator<T> {
    /// Validate a field value
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Range validator for numeric types
///
/// Bounds are inclusive by default; `exclusive_min` turns the lower bound into
/// a strict inequality (hours must be `> 0`, not `>= 0`).
#[derive(Debug, Clone)]
pub struct RangeValidator<T> {
    min: Option<T>,
    max: Option<T>,
    exclusive_min: bool,
}

impl<T> Default for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    /// Create a new range validator with no constraints
    pub fn empty() -> Self {
        Self { min: None, max: None, exclusive_min: false }
    }

    /// Create a new range validator with min and max values
    pub fn new(min: T, max: T) -> Self {
        Self { min: Some(min), max: Some(max), exclusive_min: false }
    }

    /// Set minimum value
    pub fn min(mut self, min: T) -> Self {
        self.min = Some(min);
        self
    }

    /// Set maximum value
    pub fn max(mut self, max: T) -> Self {
        self.max = Some(max);
        self
    }

    /// Treat the minimum as exclusive
    pub fn exclusive_min(mut self) -> Self {
        self.exclusive_min = true;
        self
    }
}

impl<T> FieldValidator<T> for RangeValidator<T>
where
    T: PartialOrd + Display + Clone,
{
    fn validate(&self, value: &T) -> Result<(), String> {
        if let Some(ref min) = self.min {
            if self.exclusive_min && value <= min {
                return Err(format!("Value must be greater than {}", min));
            }
            if value < min {
                return Err(format!("Value must be at least {}", min));
            }
        }

        if let Some(ref max) = self.max {
            if value > max {
                return Err(format!("Value must not exceed {}", max));
            }
        }

        Ok(())
    }
}

/// String validator with various constraints
#[derive(Debug, Clone)]
pub struct StringValidator {
    min_length: Option<usize>,
    max_length: Option<usize>,
    not_empty: bool,
    trim: bool,
}

impl Default for StringValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl StringValidator {
    /// Create a new string validator
    pub fn new() -> Self {
        Self { min_length: None, max_length: None, not_empty: false, trim: true }
    }

    /// Require non-empty string
    pub fn not_empty(mut self) -> Self {
        self.not_empty = true;
        self
    }

    /// Set minimum length (in characters)
    pub fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    /// Set maximum length (in characters)
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Set whether to trim before validation
    pub fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }
}

impl StringValidator {
    fn check(&self, value: &str) -> Result<(), String> {
        let val = if self.trim { value.trim() } else { value };
        let len = val.chars().count();

        if self.not_empty && val.is_empty() {
            return Err("Value cannot be empty".to_string());
        }

        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!("Length must be at least {} characters", min));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!("Length must not exceed {} characters", max));
            }
        }

        Ok(())
    }
}

impl FieldValidator<String> for StringValidator {
    fn validate(&self, value: &String) -> Result<(), String> {
        self.check(value)
    }
}

impl FieldValidator<&str> for StringValidator {
    fn validate(&self, value: &&str) -> Result<(), String> {
        self.check(value)
    }
}
