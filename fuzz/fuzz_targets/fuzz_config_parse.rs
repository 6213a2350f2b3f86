//! Fuzz target: `HalConfig::from_json`
//!
//! Feeds arbitrary bytes to the config parser and checks:
//! - No panics on malformed JSON or out-of-range values
//! - Anything accepted passes `validate` and its log level resolves
//!
//! cargo fuzz run fuzz_config_parse

#![no_main]

use elevator_hal::config::HalConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(config) = HalConfig::from_json(text) {
        assert!(config.validate().is_ok());
        assert!(config.level_filter().is_ok());
        assert!((1..=1000).contains(&config.poll_interval_ms));
    }
});
