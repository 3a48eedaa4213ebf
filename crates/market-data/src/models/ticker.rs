/// Fallback reference price for symbols outside the table.
const DEFAULT_BASE_PRICE: f64 = 100.0;

/// One row of the tracked symbol table.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ticker {
    /// Exchange symbol, as sent to the upstream provider
    pub symbol: &'static str,

    /// Display name
    pub name: &'static str,

    /// Reference price used to build synthetic quotes
    pub base_price: f64,
}

/// Tracked tickers, in display order.
pub const TOP_TICKERS: [Ticker; 10] = [
    Ticker {
        symbol: "AAPL",
        name: "Apple Inc.",
        base_price: 237.30,
    },
    Ticker {
        symbol: "MSFT",
        name: "Microsoft Corporation",
        base_price: 392.53,
    },
    Ticker {
        symbol: "GOOGL",
        name: "Alphabet Inc.",
        base_price: 168.50,
    },
    Ticker {
        symbol: "AMZN",
        name: "Amazon.com Inc.",
        base_price: 208.74,
    },
    Ticker {
        symbol: "NVDA",
        name: "NVIDIA Corporation",
        base_price: 120.02,
    },
    Ticker {
        symbol: "META",
        name: "Meta Platforms Inc.",
        base_price: 660.52,
    },
    Ticker {
        symbol: "TSLA",
        name: "Tesla Inc.",
        base_price: 285.71,
    },
    Ticker {
        symbol: "BRK-B",
        name: "Berkshire Hathaway Inc.",
        base_price: 407.28,
    },
    Ticker {
        symbol: "JPM",
        name: "JPMorgan Chase & Co.",
        base_price: 189.41,
    },
    Ticker {
        symbol: "V",
        name: "Visa Inc.",
        base_price: 276.37,
    },
];

fn lookup(symbol: &str) -> Option<&'static Ticker> {
    TOP_TICKERS.iter().find(|t| t.symbol == symbol)
}

/// Display name for a symbol, or the symbol itself when it is not tracked.
pub fn company_name(symbol: &str) -> &str {
    lookup(symbol).map(|t| t.name).unwrap_or(symbol)
}

/// Reference price for a symbol, or 100 when it is not tracked.
pub fn base_price(symbol: &str) -> f64 {
    lookup(symbol)
        .map(|t| t.base_price)
        .unwrap_or(DEFAULT_BASE_PRICE)
}
