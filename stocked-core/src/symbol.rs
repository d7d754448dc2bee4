//! Ticker normalisation and display names.

/// Upper-cases a ticker and maps common index aliases onto their feed symbols.
pub fn normalize_symbol(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    let corrected = match upper.as_str() {
        "DJI" | "DOW" => "^DJI",
        "SPX" | "SP500" => "^GSPC",
        "NASDAQ" => "^IXIC",
        "VIX" => "^VIX",
        _ => return upper,
    };
    corrected.to_string()
}

/// Human readable name for well-known symbols, or the symbol itself.
pub fn display_name(symbol: &str) -> &str {
    match symbol {
        "AAPL" => "Apple Inc.",
        "GOOGL" => "Alphabet Inc.",
        "MSFT" => "Microsoft Corp.",
        "TSLA" => "Tesla Inc.",
        "AMZN" => "Amazon.com Inc.",
        "META" => "Meta Platforms Inc.",
        "NVDA" => "NVIDIA Corp.",
        "NFLX" => "Netflix Inc.",
        "SPY" => "SPDR S&P 500 ETF",
        "QQQ" => "Invesco QQQ Trust",
        "^DJI" | "DJI" => "Dow Jones Industrial Average",
        "^GSPC" => "S&P 500 Index",
        "^IXIC" => "NASDAQ Composite",
        "^VIX" => "CBOE Volatility Index",
        "DIA" => "SPDR Dow Jones Industrial Average ETF",
        other => other,
    }
}
