//! Stock metadata lookup: a pluggable provider plus a per-engine cache.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use newsimpact_core::{normalize_symbol, StockMetadata, StockRecord, StocksFile};

/// Source of stock metadata. Must never fail: unknown symbols get defaults.
pub trait MetadataProvider: Send + Sync {
    fn get_metadata(&self, symbol: &str) -> StockMetadata;
}

struct BuiltinStock {
    symbol: &'static str,
    market_cap: f64,
    sector: &'static str,
    industry: &'static str,
    competitors: &'static [&'static str],
    suppliers: &'static [&'static str],
    raw_materials: &'static [&'static str],
    beta: f64,
    pe_ratio: f64,
    revenue: f64,
}

const BUILTIN: &[BuiltinStock] = &[
    BuiltinStock {
        symbol: "AAPL",
        market_cap: 2_500_000_000_000.0,
        sector: "Technology",
        industry: "Consumer Electronics",
        competitors: &["MSFT", "GOOGL", "AMZN", "Samsung"],
        suppliers: &["TSMC", "Foxconn", "Qualcomm"],
        raw_materials: &["Silicon", "Aluminum", "Rare Earth Metals"],
        beta: 1.2,
        pe_ratio: 25.5,
        revenue: 394_328_000_000.0,
    },
    BuiltinStock {
        symbol: "MSFT",
        market_cap: 2_200_000_000_000.0,
        sector: "Technology",
        industry: "Software",
        competitors: &["GOOGL", "AAPL", "AMZN", "Oracle"],
        suppliers: &["Intel", "AMD", "NVIDIA"],
        raw_materials: &["Software Licenses", "Cloud Infrastructure"],
        beta: 1.1,
        pe_ratio: 30.2,
        revenue: 198_270_000_000.0,
    },
    BuiltinStock {
        symbol: "TSLA",
        market_cap: 800_000_000_000.0,
        sector: "Consumer Discretionary",
        industry: "Automotive",
        competitors: &["Ford", "GM", "Toyota", "BMW"],
        suppliers: &["Panasonic", "CATL", "LG Chem"],
        raw_materials: &["Lithium", "Nickel", "Cobalt", "Steel"],
        beta: 2.1,
        pe_ratio: 45.8,
        revenue: 81_462_000_000.0,
    },
    BuiltinStock {
        symbol: "GOOGL",
        market_cap: 1_800_000_000_000.0,
        sector: "Technology",
        industry: "Internet Services",
        competitors: &["MSFT", "AAPL", "AMZN", "Meta"],
        suppliers: &["Cloud Providers", "Data Centers"],
        raw_materials: &["Data", "Computing Resources"],
        beta: 1.0,
        pe_ratio: 28.5,
        revenue: 307_394_000_000.0,
    },
    BuiltinStock {
        symbol: "AMZN",
        market_cap: 1_600_000_000_000.0,
        sector: "Consumer Discretionary",
        industry: "Internet Retail",
        competitors: &["WMT", "TGT", "COST", "BABA"],
        suppliers: &["Various Retailers", "Logistics Partners"],
        raw_materials: &["Consumer Goods", "Packaging"],
        beta: 1.3,
        pe_ratio: 35.2,
        revenue: 514_004_000_000.0,
    },
    BuiltinStock {
        symbol: "NVDA",
        market_cap: 1_200_000_000_000.0,
        sector: "Technology",
        industry: "Semiconductors",
        competitors: &["AMD", "INTC", "TSMC"],
        suppliers: &["TSMC", "Samsung", "SK Hynix"],
        raw_materials: &["Silicon", "Rare Earth Metals"],
        beta: 1.8,
        pe_ratio: 50.5,
        revenue: 26_974_000_000.0,
    },
];

fn owned(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| (*s).to_string()).collect()
}

impl BuiltinStock {
    fn to_record(&self) -> StockRecord {
        StockRecord {
            symbol: self.symbol.to_string(),
            market_cap: Some(self.market_cap),
            beta: Some(self.beta),
            pe_ratio: Some(self.pe_ratio),
            sector: Some(self.sector.to_string()),
            industry: Some(self.industry.to_string()),
            revenue: Some(self.revenue),
            competitors: owned(self.competitors),
            suppliers: owned(self.suppliers),
            raw_materials: owned(self.raw_materials),
        }
    }
}

/// In-memory table of known symbols.
#[derive(Debug, Clone, Default)]
pub struct StaticMetadataProvider {
    stocks: HashMap<String, StockMetadata>,
}

impl StaticMetadataProvider {
    /// The built-in table of large-cap names.
    #[must_use]
    pub fn builtin() -> Self {
        Self::empty().with_records(BUILTIN.iter().map(BuiltinStock::to_record))
    }

    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Overlay records on the current table; later records replace earlier
    /// ones for the same symbol.
    #[must_use]
    pub fn with_records(mut self, records: impl IntoIterator<Item = StockRecord>) -> Self {
        for record in records {
            let metadata = StockMetadata::from_record(&record);
            self.stocks.insert(metadata.symbol.clone(), metadata);
        }
        self
    }

    /// Built-in table overlaid with a loaded stocks file.
    #[must_use]
    pub fn from_stocks_file(file: StocksFile) -> Self {
        Self::builtin().with_records(file.stocks)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stocks.is_empty()
    }
}

impl MetadataProvider for StaticMetadataProvider {
    fn get_metadata(&self, symbol: &str) -> StockMetadata {
        let key = normalize_symbol(symbol);
        if let Some(metadata) = self.stocks.get(&key) {
            return metadata.clone();
        }
        tracing::debug!(symbol = %key, "unknown symbol, using default metadata");
        StockMetadata::defaults(&key)
    }
}

/// Memoizes provider lookups for the lifetime of one engine.
///
/// Entries are insert-if-absent: once a symbol is cached, every caller sees
/// the same `Arc` for the rest of the cache's life.
pub struct MetadataCache<P> {
    provider: P,
    entries: RwLock<HashMap<String, Arc<StockMetadata>>>,
}

impl<P: MetadataProvider> MetadataCache<P> {
    #[must_use]
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            entries: RwLock::new(HashMap::new()),
        }
    }

    #[must_use]
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Cached metadata for `symbol`, loading it from the provider on a miss.
    pub fn get_or_load(&self, symbol: &str) -> Arc<StockMetadata> {
        let key = normalize_symbol(symbol);

        {
            let entries = self.entries.read().unwrap_or_else(|poisoned| {
                tracing::warn!("metadata cache lock poisoned, recovering");
                poisoned.into_inner()
            });
            if let Some(hit) = entries.get(&key) {
                return Arc::clone(hit);
            }
        }

        // Provider call happens outside the lock; a racing loader may win.
        let loaded = Arc::new(self.provider.get_metadata(&key));
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(entries.entry(key).or_insert(loaded))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
