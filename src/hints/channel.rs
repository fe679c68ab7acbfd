//! Background hint requests
//!
//! Each request runs on its own short-lived thread and reports back over an mpsc
//! channel. Requests are never cancelled; the consumer checks
//! [`HintResponse::is_current`] and drops answers for an earlier game.

use super::{HintProvider, WordInfo, hint_or_fallback, word_info_or_fallback};
use crate::core::Word;
use log::{debug, warn};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HintPayload {
    Hint(String),
    WordInfo(WordInfo),
}

/// A finished request, tagged with the target and game generation it was made for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HintResponse {
    pub target: Word,
    pub generation: u64,
    pub payload: HintPayload,
}

impl HintResponse {
    /// True if this response belongs to the game with `target` in `generation`
    #[must_use]
    pub fn is_current(&self, target: &Word, generation: u64) -> bool {
        self.generation == generation && &self.target == target
    }
}

/// Dispatches hint requests and collects their responses
pub struct HintChannel {
    provider: Arc<dyn HintProvider>,
    fallback_hint: String,
    sender: Sender<HintResponse>,
    receiver: Receiver<HintResponse>,
    in_flight: usize,
    generation: u64,
}

impl HintChannel {
    pub fn new(provider: Arc<dyn HintProvider>, fallback_hint: impl Into<String>) -> Self {
        let (sender, receiver) = mpsc::channel();
        Self {
            provider,
            fallback_hint: fallback_hint.into(),
            sender,
            receiver,
            in_flight: 0,
            generation: 0,
        }
    }

    #[must_use]
    pub fn provider(&self) -> &dyn HintProvider {
        self.provider.as_ref()
    }

    /// Generation stamped on new requests
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a new game generation; responses to earlier requests become stale
    pub fn next_generation(&mut self) {
        self.generation += 1;
        debug!("Hint generation {}", self.generation);
    }

    /// Request a hint for `target`; the answer is always a hint, possibly the fallback
    pub fn request_hint(&mut self, target: &Word, guesses: Vec<String>) {
        let fallback = self.fallback_hint.clone();
        let on_panic = HintPayload::Hint(fallback.clone());
        self.spawn(target, on_panic, move |provider, target| {
            HintPayload::Hint(hint_or_fallback(provider, target, &guesses, &fallback))
        });
    }

    /// Request details about `word`
    pub fn request_word_info(&mut self, word: &Word) {
        let on_panic = HintPayload::WordInfo(WordInfo::fallback(word));
        self.spawn(word, on_panic, |provider, word| {
            HintPayload::WordInfo(word_info_or_fallback(provider, word))
        });
    }

    fn spawn<F>(&mut self, target: &Word, on_panic: HintPayload, work: F)
    where
        F: FnOnce(&dyn HintProvider, &Word) -> HintPayload + Send + 'static,
    {
        let provider = Arc::clone(&self.provider);
        let sender = self.sender.clone();
        let target = target.clone();
        let generation = self.generation;
        self.in_flight += 1;
        debug!("Hint request for {target} via {}", provider.name());

        let job = move || {
            // Every request is answered, even when the provider panics
            let payload = panic::catch_unwind(AssertUnwindSafe(|| {
                work(provider.as_ref(), &target)
            }))
            .unwrap_or_else(|_| {
                warn!("Hint provider {} panicked; using fallback", provider.name());
                on_panic
            });
            let response = HintResponse {
                target,
                generation,
                payload,
            };
            if sender.send(response).is_err() {
                debug!("Hint receiver dropped before response arrived");
            }
        };

        // A request whose worker fails to spawn is never answered
        if let Err(e) = thread::Builder::new().name("hint".into()).spawn(job) {
            warn!("Failed to spawn hint worker: {e}");
            self.in_flight -= 1;
        }
    }

    /// Next finished response, without blocking
    pub fn try_next(&mut self) -> Option<HintResponse> {
        let response = self.receiver.try_recv().ok()?;
        self.in_flight = self.in_flight.saturating_sub(1);
        Some(response)
    }

    /// Next finished response, waiting up to `timeout`
    pub fn wait(&mut self, timeout: Duration) -> Option<HintResponse> {
        match self.receiver.recv_timeout(timeout) {
            Ok(response) => {
                self.in_flight = self.in_flight.saturating_sub(1);
                Some(response)
            }
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => None,
        }
    }

    /// Requests sent but not yet collected
    #[must_use]
    pub const fn in_flight(&self) -> usize {
        self.in_flight
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hints::{DEFAULT_FALLBACK_HINT, DisabledHints, HintError, StaticHints, WordEntry};

    const TIMEOUT: Duration = Duration::from_secs(5);

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn hint_round_trip() {
        let provider = Arc::new(StaticHints::from_entries(&WordEntry::defaults()));
        let mut channel = HintChannel::new(provider, DEFAULT_FALLBACK_HINT);
        channel.request_hint(&word("gossip"), vec!["PLAYER".into()]);
        assert_eq!(channel.in_flight(), 1);

        let response = channel.wait(TIMEOUT).unwrap();
        assert!(response.is_current(&word("gossip"), 0));
        assert_eq!(
            response.payload,
            HintPayload::Hint("Something we do; something we watch".into())
        );
        assert_eq!(channel.in_flight(), 0);
        assert!(channel.try_next().is_none());
    }

    #[test]
    fn failed_provider_yields_fallback() {
        let mut channel = HintChannel::new(Arc::new(DisabledHints), "try harder");
        channel.request_hint(&word("bridge"), Vec::new());
        let response = channel.wait(TIMEOUT).unwrap();
        assert_eq!(response.payload, HintPayload::Hint("try harder".into()));

        channel.request_word_info(&word("bridge"));
        let response = channel.wait(TIMEOUT).unwrap();
        assert!(matches!(response.payload, HintPayload::WordInfo(ref info) if info.word == "BRIDGE"));
    }

    #[test]
    fn stale_response_is_not_current() {
        let mut channel = HintChannel::new(Arc::new(DisabledHints), DEFAULT_FALLBACK_HINT);
        channel.request_hint(&word("gossip"), Vec::new());
        let response = channel.wait(TIMEOUT).unwrap();
        assert!(!response.is_current(&word("bridge"), channel.generation()));
        assert!(response.is_current(&word("GOSSIP"), channel.generation()));
    }

    #[test]
    fn earlier_generation_is_stale() {
        let mut channel = HintChannel::new(Arc::new(DisabledHints), DEFAULT_FALLBACK_HINT);
        channel.request_hint(&word("gossip"), Vec::new());
        channel.next_generation();
        channel.request_hint(&word("gossip"), Vec::new());

        let mut generations = vec![
            channel.wait(TIMEOUT).unwrap().generation,
            channel.wait(TIMEOUT).unwrap().generation,
        ];
        generations.sort_unstable();
        assert_eq!(generations, vec![0, 1]);
        assert_eq!(channel.generation(), 1);

        let stale = HintResponse {
            target: word("gossip"),
            generation: 0,
            payload: HintPayload::Hint("old".into()),
        };
        assert!(!stale.is_current(&word("gossip"), channel.generation()));
    }

    struct PanickingHints;

    impl HintProvider for PanickingHints {
        fn name(&self) -> &str {
            "panicking"
        }

        fn hint(&self, _target: &Word, _guesses: &[String]) -> Result<String, HintError> {
            panic!("provider bug")
        }

        fn word_info(&self, _word: &Word) -> Result<WordInfo, HintError> {
            panic!("provider bug")
        }
    }

    #[test]
    fn panicking_provider_still_answers() {
        let mut channel = HintChannel::new(Arc::new(PanickingHints), "fallback");
        channel.request_hint(&word("gossip"), Vec::new());
        channel.request_word_info(&word("gossip"));

        let mut hint = None;
        let mut info = None;
        for _ in 0..2 {
            match channel.wait(TIMEOUT).unwrap().payload {
                HintPayload::Hint(h) => hint = Some(h),
                HintPayload::WordInfo(i) => info = Some(i),
            }
        }
        assert_eq!(hint.as_deref(), Some("fallback"));
        assert_eq!(info, Some(WordInfo::fallback(&word("gossip"))));
        assert_eq!(channel.in_flight(), 0);
    }
}
