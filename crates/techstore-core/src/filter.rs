//! Client-side filter/sort pipeline for category listings.
//!
//! [`apply`] keeps the products that pass every active filter (price range,
//! brand substrings, colours) and then, if a sort key is set, orders them.
//! Filters are independent predicates combined with AND; sorting always runs
//! last and is stable, so applying the same configuration to its own output
//! returns the same list.

use std::cmp::{Ordering, Reverse};
use std::collections::BTreeSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CoreError, Product};

/// Inclusive price bounds in whole currency units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    min: u64,
    max: u64,
}

impl PriceRange {
    /// Matches every price.
    pub const ANY: PriceRange = PriceRange {
        min: 0,
        max: u64::MAX,
    };

    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPriceRange`] when `min > max`.
    pub fn new(min: u64, max: u64) -> Result<Self, CoreError> {
        if min > max {
            return Err(CoreError::InvalidPriceRange { min, max });
        }
        Ok(Self { min, max })
    }

    #[must_use]
    pub fn min(&self) -> u64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> u64 {
        self.max
    }

    #[must_use]
    pub fn contains(&self, price: u64) -> bool {
        (self.min..=self.max).contains(&price)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ANY
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Name ascending.
    Name,
    PriceAsc,
    PriceDesc,
    /// Most recently created first.
    Newest,
}

impl SortKey {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Name => "name",
            SortKey::PriceAsc => "price_asc",
            SortKey::PriceDesc => "price_desc",
            SortKey::Newest => "newest",
        }
    }

    /// Like [`FromStr`], but maps unrecognised keys to `None` so the listing
    /// keeps its input order instead of failing.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Option<Self> {
        raw.parse().ok()
    }
}

impl std::fmt::Display for SortKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "name" => Ok(SortKey::Name),
            "price_asc" => Ok(SortKey::PriceAsc),
            "price_desc" => Ok(SortKey::PriceDesc),
            "newest" => Ok(SortKey::Newest),
            other => Err(CoreError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Combined price/brand/colour/sort criteria for a listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    pub price_range: PriceRange,
    /// Case-sensitive substrings matched against the product name.
    pub brands: BTreeSet<String>,
    /// Accepted colour values, compared exactly.
    pub colors: BTreeSet<String>,
    /// `None` keeps input order.
    pub sort: Option<SortKey>,
}

impl FilterConfig {
    #[must_use]
    pub fn with_price_range(mut self, range: PriceRange) -> Self {
        self.price_range = range;
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brands.insert(brand.into());
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.colors.insert(color.into());
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: Option<SortKey>) -> Self {
        self.sort = sort;
        self
    }

    /// Returns `true` if `product` passes every filter stage.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        self.price_range.contains(product.price)
            && self.matches_brand(product)
            && self.matches_color(product)
    }

    fn matches_brand(&self, product: &Product) -> bool {
        self.brands.is_empty()
            || self
                .brands
                .iter()
                .any(|brand| product.name.contains(brand.as_str()))
    }

    fn matches_color(&self, product: &Product) -> bool {
        self.colors.is_empty() || product.colors.iter().any(|c| self.colors.contains(c))
    }
}

/// Filter `products` by `config`, then sort by its key if one is set.
#[must_use]
pub fn apply(products: &[Product], config: &FilterConfig) -> Vec<Product> {
    let mut kept: Vec<Product> = products
        .iter()
        .filter(|p| config.matches(p))
        .cloned()
        .collect();
    if let Some(key) = config.sort {
        sort_products(&mut kept, key);
    }
    kept
}

/// Stable in-place sort by `key`. Ties keep their relative order.
pub fn sort_products(products: &mut [Product], key: SortKey) {
    match key {
        SortKey::Name => products.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::PriceAsc => products.sort_by_key(|p| p.price),
        SortKey::PriceDesc => products.sort_by_key(|p| Reverse(p.price)),
        SortKey::Newest => products.sort_by_key(|p| Reverse(p.created_at)),
    }
}

/// Human ordering for display names: case folds first so `iPhone` sorts next
/// to `IPad` rather than after every uppercase name, then raw code points
/// break ties.
fn compare_names(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| a.cmp(b))
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
