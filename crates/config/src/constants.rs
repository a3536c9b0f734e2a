//! Default values shared by the settings and their consumers

/// Manual input decoding
pub mod decoder {
    /// Shortest manual input (in characters) worth classifying
    pub const MIN_INPUT_CHARS: usize = 3;
}

/// Canned capture source
pub mod capture {
    /// Simulated recognition latency
    pub const DELAY_MS: u64 = 1200;

    /// Upper bound accepted by validation
    pub const MAX_DELAY_MS: u64 = 60_000;

    /// Phrases returned by the canned source
    pub const CANNED_PHRASES: [&str; 5] = [
        "1件50 加一元多一件",
        "買2送一",
        "第2件半價",
        "1件100元，加10元多一件",
        "滿千送百",
    ];
}

/// Environment variable handling
pub mod env {
    /// Prefix for overrides, e.g. PROMO_DECODER__DECODER__MIN_INPUT_CHARS
    pub const PREFIX: &str = "PROMO_DECODER";

    /// Selects the `config/{env}` overlay
    pub const ENV_VAR: &str = "PROMO_DECODER_ENV";
}
