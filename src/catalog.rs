use crate::{Error, FuzzyMatcher, Query, Result, normalize};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::time::{Duration, Instant};

/// Number of leading keyword characters compared against an item number in
/// exact search.
const ITEM_NO_PREFIX: usize = 7;

/// One catalog record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "ItemNo", default, skip_serializing_if = "Option::is_none")]
    pub item_no: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub series: String,
    #[serde(default)]
    pub type1: String,
    /// Free text prepared for searching.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub forindex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_catalog1: Option<String>,
}

/// Searchable fields of a [`Product`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    IndexText,
    ItemNo,
    UnitCatalog,
}

impl Field {
    /// Order in which fields are tried by fuzzy search.
    pub const PRIORITY: [Field; 4] = [
        Field::Name,
        Field::IndexText,
        Field::ItemNo,
        Field::UnitCatalog,
    ];
}

impl Product {
    pub fn field(&self, field: Field) -> Option<&str> {
        match field {
            Field::Name => self.name.as_deref(),
            Field::IndexText => self.forindex.as_deref(),
            Field::ItemNo => self.item_no.as_deref(),
            Field::UnitCatalog => self.unit_catalog1.as_deref(),
        }
    }

    /// Present fields, in `order`.
    pub fn fields<'a>(&'a self, order: &'a [Field]) -> impl Iterator<Item = &'a str> + 'a {
        order.iter().filter_map(|&field| self.field(field))
    }

    /// Substring search without any fuzziness: the index text contains every
    /// token, the name contains the keyword, the unit catalog equals it, or
    /// the item number contains its first seven characters. Containment
    /// ignores ASCII case.
    pub fn matches_exactly(&self, keyword: &str, query: &Query) -> bool {
        if let Some(forindex) = &self.forindex {
            let haystack = forindex.to_ascii_lowercase();
            if query
                .tokens()
                .iter()
                .all(|token| haystack.contains(&token.to_ascii_lowercase()))
            {
                return true;
            }
        }
        let keyword_lower = keyword.to_ascii_lowercase();
        if let Some(name) = &self.name {
            if name.to_ascii_lowercase().contains(&keyword_lower) {
                return true;
            }
        }
        if self.unit_catalog1.as_deref() == Some(keyword) {
            return true;
        }
        let prefix: String = keyword_lower.chars().take(ITEM_NO_PREFIX).collect();
        self.item_no
            .as_ref()
            .is_some_and(|item_no| item_no.to_ascii_lowercase().contains(&prefix))
    }
}

/// How [`Catalog::search`] decides whether a product matches.
#[derive(Debug, Clone)]
pub enum SearchMode {
    /// See [`Product::matches_exactly`].
    Exact,
    /// Fuzzy alignment over the fields in [`Field::PRIORITY`] order.
    Fuzzy(FuzzyMatcher),
}

/// An in-memory product catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<Product>,
}

impl From<Vec<Product>> for Catalog {
    fn from(products: Vec<Product>) -> Self {
        Self { products }
    }
}

impl Catalog {
    /// Parses a JSON array of products.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        debug!("loaded {} products", catalog.products.len());
        Ok(catalog)
    }

    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let catalog: Self = serde_json::from_reader(reader)?;
        debug!("loaded {} products", catalog.products.len());
        Ok(catalog)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(file))
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products matching `keyword`, in catalog order. The keyword is
    /// normalized first; an empty keyword returns the whole catalog.
    pub fn search(&self, keyword: &str, mode: &SearchMode) -> Vec<&Product> {
        // Only a budget can make a search fail.
        self.run_search(keyword, mode, None).unwrap_or_default()
    }

    /// Like [`search`](Self::search) but gives up with
    /// [`Error::BudgetExceeded`] once `budget` has elapsed.
    pub fn search_within(
        &self,
        keyword: &str,
        mode: &SearchMode,
        budget: Duration,
    ) -> Result<Vec<&Product>> {
        self.run_search(keyword, mode, Some(budget))
    }

    fn run_search(
        &self,
        keyword: &str,
        mode: &SearchMode,
        budget: Option<Duration>,
    ) -> Result<Vec<&Product>> {
        let started = Instant::now();
        let keyword = normalize::keyword(keyword);
        if keyword.is_empty() {
            return Ok(self.products.iter().collect());
        }
        let query = Query::new(&keyword);
        let mut found = Vec::new();
        for (evaluated, product) in self.products.iter().enumerate() {
            if let Some(budget) = budget {
                if started.elapsed() >= budget {
                    warn!("search {keyword:?} aborted after {evaluated} products");
                    return Err(Error::BudgetExceeded { budget, evaluated });
                }
            }
            if Self::matches(product, &keyword, &query, mode) {
                found.push(product);
            }
        }
        debug!(
            "search {keyword:?}: {} of {} products",
            found.len(),
            self.products.len()
        );
        Ok(found)
    }

    fn matches(product: &Product, keyword: &str, query: &Query, mode: &SearchMode) -> bool {
        match mode {
            SearchMode::Exact => product.matches_exactly(keyword, query),
            SearchMode::Fuzzy(matcher) => {
                matcher.is_match(product.fields(&Field::PRIORITY), query)
            }
        }
    }
}
