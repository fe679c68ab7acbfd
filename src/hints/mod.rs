//! Hints and word details
//!
//! The game never waits on a provider: requests go through [`HintChannel`] and any
//! provider failure is replaced by a fallback value.

mod channel;
mod provider;

pub use channel::{HintChannel, HintPayload, HintResponse};
pub use provider::{
    DEFAULT_FALLBACK_HINT, DisabledHints, HintError, HintProvider, StaticHints, WordEntry,
    WordInfo, hint_or_fallback, word_info_or_fallback,
};

use crate::config::ResolvedConfig;
use crate::core::Word;
use std::sync::Arc;

/// Provider selected by configuration
#[must_use]
pub fn provider_from_config(config: &ResolvedConfig) -> Arc<dyn HintProvider> {
    if config.hints_enabled {
        Arc::new(StaticHints::from_entries(&config.words))
    } else {
        Arc::new(DisabledHints)
    }
}

/// Hint shown before the player asks for one
///
/// The configured initial hint wins; otherwise the provider's hint is used when it
/// has one for `target`.
#[must_use]
pub fn opening_hint(
    config: &ResolvedConfig,
    provider: &dyn HintProvider,
    target: &Word,
) -> Option<String> {
    if !config.hints_enabled {
        return None;
    }
    config
        .initial_hint
        .clone()
        .or_else(|| provider.hint(target, &[]).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FileConfig, Overrides, parse_config, resolve};

    #[test]
    fn opening_hint_from_provider_table() {
        let config = resolve(&FileConfig::default(), &Overrides::default()).unwrap();
        let provider = provider_from_config(&config);
        assert_eq!(
            opening_hint(&config, provider.as_ref(), &config.target).as_deref(),
            Some("Something we do; something we watch")
        );

        let bridge = Word::new("bridge").unwrap();
        assert_eq!(opening_hint(&config, provider.as_ref(), &bridge), None);
    }

    #[test]
    fn opening_hint_disabled() {
        let file = parse_config("[hints]\nenabled = false\ninitial = \"ignored\"\n").unwrap();
        let config = resolve(&file, &Overrides::default()).unwrap();
        let provider = provider_from_config(&config);
        assert_eq!(provider.name(), "disabled");
        assert_eq!(opening_hint(&config, provider.as_ref(), &config.target), None);
    }

    #[test]
    fn configured_initial_hint_wins() {
        let file = parse_config("[hints]\ninitial = \"Chatter\"\n").unwrap();
        let config = resolve(&file, &Overrides::default()).unwrap();
        let provider = provider_from_config(&config);
        assert_eq!(
            opening_hint(&config, provider.as_ref(), &config.target).as_deref(),
            Some("Chatter")
        );
    }
}
