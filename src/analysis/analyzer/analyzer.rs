//! Core analyzer: cached pipeline lookup, construction, and shutdown.
//!
//! An [`Analyzer`] pairs a [`ComponentsFactory`] (which knows how to build the
//! pipeline for a field) with a [`ReuseStrategy`] (which decides which cached
//! pipeline may serve a field) and owns the thread-scoped slot those cached
//! pipelines live in.
//!
//! # Role in Analysis Pipeline
//!
//! ```text
//! caller ─> Analyzer::token_stream(field, input)
//!              │
//!              ├─ strategy lookup ── hit ──> components.set_reader(input)
//!              │                └── miss ─> factory.create_components(field, input)
//!              │                            strategy store
//!              └─> AnalyzedTokenStream (terminal stage, locked for this thread)
//! ```
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, StandardAnalysis};
//!
//! let analyzer = Analyzer::new(Arc::new(StandardAnalysis::new().unwrap()));
//!
//! let terms: Vec<String> = analyzer
//!     .token_stream_for_str("title", "The Quick Brown Fox")
//!     .unwrap()
//!     .map(|token| token.unwrap().text)
//!     .collect();
//! assert_eq!(terms, vec!["quick", "brown", "fox"]);
//!
//! analyzer.close();
//! assert!(analyzer.token_stream_for_str("title", "again").is_err());
//! ```
//!
//! Implementing a custom factory:
//!
//! ```
//! use std::sync::Arc;
//!
//! use sarissa_analysis::analysis::analyzer::{Analyzer, ComponentsFactory};
//! use sarissa_analysis::analysis::components::TokenStreamComponents;
//! use sarissa_analysis::analysis::reader::TextSource;
//! use sarissa_analysis::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//! use sarissa_analysis::error::Result;
//!
//! struct MyAnalysis;
//!
//! impl ComponentsFactory for MyAnalysis {
//!     fn create_components(
//!         &self,
//!         _field_name: &str,
//!         reader: TextSource<'_>,
//!     ) -> Result<TokenStreamComponents> {
//!         let mut tokenizer = WhitespaceTokenizer::new();
//!         tokenizer.set_reader(reader)?;
//!         Ok(TokenStreamComponents::new(Box::new(tokenizer)))
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "my_analysis"
//!     }
//! }
//!
//! let analyzer = Analyzer::new(Arc::new(MyAnalysis));
//! let tokens = analyzer.analyze("body", "a b").unwrap();
//! assert_eq!(tokens.len(), 2);
//! ```

use std::fmt;
use std::sync::Arc;

use parking_lot::lock_api::ArcMutexGuard;
use parking_lot::{Mutex, RawMutex};
use tracing::{debug, trace};

use crate::analysis::components::TokenStreamComponents;
use crate::analysis::reader::{ReusableStringReader, TextSource};
use crate::analysis::reuse::{
    ComponentsSlot, GLOBAL_REUSE_STRATEGY, ReuseStrategy, SharedComponents,
};
use crate::analysis::token::{Token, TokenStream};
use crate::error::{Result, SarissaError};

/// Builds the analysis pipeline for a field.
///
/// This is the part a concrete analysis policy supplies; the reuse machinery
/// lives in [`Analyzer`].
///
/// # Thread Safety
///
/// Factories are shared by every thread using the analyzer, so they must be
/// `Send + Sync`. The pipelines they build are only ever used by the thread
/// that requested them.
pub trait ComponentsFactory: Send + Sync {
    /// Build a new pipeline for `field_name` whose entry stage is already
    /// bound to `reader`.
    fn create_components(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<TokenStreamComponents>;

    /// Wrap the caller's input before it reaches the tokenizer, e.g. with char
    /// filters. The default returns `reader` unchanged.
    fn init_reader<'a>(&self, _field_name: &str, reader: TextSource<'a>) -> TextSource<'a> {
        reader
    }

    /// Position gap inserted between values of a multi-valued field.
    fn position_increment_gap(&self, _field_name: &str) -> u32 {
        0
    }

    /// Offset gap inserted between values of a multi-valued field.
    fn offset_gap(&self, _field_name: &str) -> u32 {
        1
    }

    /// Get the name of this factory (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Text analyzer that reuses pipelines per thread.
///
/// Analyzers are meant to be shared (`Arc<Analyzer>`) by many threads. Each
/// thread gets its own cached pipelines; none is ever visible to another
/// thread. [`close`](Self::close) (or dropping the analyzer) releases every
/// cached pipeline and makes further calls fail with
/// [`SarissaError::ResourceReleased`].
pub struct Analyzer {
    factory: Arc<dyn ComponentsFactory>,
    reuse_strategy: &'static dyn ReuseStrategy,
    stored: ComponentsSlot,
}

impl Analyzer {
    /// Create an analyzer using the global reuse strategy.
    pub fn new(factory: Arc<dyn ComponentsFactory>) -> Self {
        Self::with_reuse_strategy(factory, &GLOBAL_REUSE_STRATEGY)
    }

    /// Create an analyzer with an explicit reuse strategy.
    pub fn with_reuse_strategy(
        factory: Arc<dyn ComponentsFactory>,
        reuse_strategy: &'static dyn ReuseStrategy,
    ) -> Self {
        Analyzer {
            factory,
            reuse_strategy,
            stored: ComponentsSlot::new(),
        }
    }

    /// Analyze `reader` as the content of `field_name`.
    ///
    /// The returned stream holds this thread's pipeline for the cache key;
    /// drop it before requesting another stream for the same key on this
    /// thread.
    pub fn token_stream(
        &self,
        field_name: &str,
        reader: TextSource<'_>,
    ) -> Result<AnalyzedTokenStream> {
        let cached = self
            .reuse_strategy
            .reusable_components(&self.stored, field_name)?;
        let reader = self.factory.init_reader(field_name, reader);

        let components = match cached {
            Some(shared) => {
                trace!(field = field_name, "reusing cached analysis pipeline");
                let mut components = lock_components(&shared, field_name)?;
                components.set_reader(reader)?;
                components
            }
            None => self.create_and_store(field_name, reader)?,
        };

        Ok(AnalyzedTokenStream { components })
    }

    /// Analyze an in-memory string as the content of `field_name`.
    ///
    /// Identical to [`token_stream`](Self::token_stream) but rebinds a string
    /// reader kept with the cached pipeline instead of allocating a new one.
    pub fn token_stream_for_str(&self, field_name: &str, text: &str) -> Result<AnalyzedTokenStream> {
        let cached = self
            .reuse_strategy
            .reusable_components(&self.stored, field_name)?;
        let mut cached = cached
            .map(|shared| lock_components(&shared, field_name))
            .transpose()?;

        let mut string_reader = cached
            .as_mut()
            .and_then(|components| components.take_reusable_string_reader())
            .unwrap_or_default();
        string_reader.set_value(text);
        let reader = self
            .factory
            .init_reader(field_name, Box::new(&mut string_reader));

        let mut components = match cached {
            Some(mut components) => {
                trace!(field = field_name, "reusing cached analysis pipeline");
                components.set_reader(reader)?;
                components
            }
            None => self.create_and_store(field_name, reader)?,
        };
        components.set_reusable_string_reader(string_reader);

        Ok(AnalyzedTokenStream { components })
    }

    /// Analyze `text` and collect every token.
    pub fn analyze(&self, field_name: &str, text: &str) -> Result<Vec<Token>> {
        self.token_stream_for_str(field_name, text)?.collect()
    }

    /// Release every cached pipeline. Idempotent.
    pub fn close(&self) {
        if self.stored.release() {
            debug!(
                factory = self.factory.name(),
                strategy = self.reuse_strategy.name(),
                "analyzer closed"
            );
        }
    }

    /// Drop the pipelines cached by threads that have exited.
    ///
    /// Storing a pipeline for a new thread does this as well; call it to
    /// reclaim memory when no new threads are expected. Returns the number of
    /// threads whose pipelines were dropped.
    pub fn purge_exited_threads(&self) -> usize {
        let purged = self.stored.purge();
        if purged > 0 {
            debug!(
                factory = self.factory.name(),
                threads = purged,
                "dropped pipelines of exited threads"
            );
        }
        purged
    }

    /// Number of threads holding cached pipelines, including exited threads
    /// not yet purged.
    pub fn cached_thread_count(&self) -> usize {
        self.stored.len()
    }

    /// Whether [`close`](Self::close) has been called.
    pub fn is_closed(&self) -> bool {
        self.stored.is_released()
    }

    /// The reuse strategy this analyzer was built with.
    pub fn reuse_strategy(&self) -> &'static dyn ReuseStrategy {
        self.reuse_strategy
    }

    /// The pipeline factory.
    pub fn factory(&self) -> &Arc<dyn ComponentsFactory> {
        &self.factory
    }

    /// Position gap between values of a multi-valued field.
    pub fn position_increment_gap(&self, field_name: &str) -> u32 {
        self.factory.position_increment_gap(field_name)
    }

    /// Offset gap between values of a multi-valued field.
    pub fn offset_gap(&self, field_name: &str) -> u32 {
        self.factory.offset_gap(field_name)
    }

    fn create_and_store(&self, field_name: &str, reader: TextSource<'_>) -> Result<ComponentsGuard> {
        let components = self.factory.create_components(field_name, reader)?;
        debug!(
            field = field_name,
            factory = self.factory.name(),
            strategy = self.reuse_strategy.name(),
            "built analysis pipeline"
        );

        let shared = Arc::new(Mutex::new(components));
        self.reuse_strategy
            .set_reusable_components(&self.stored, field_name, Arc::clone(&shared))?;
        lock_components(&shared, field_name)
    }
}

impl Drop for Analyzer {
    fn drop(&mut self) {
        self.close();
    }
}

impl fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analyzer")
            .field("factory", &self.factory.name())
            .field("reuse_strategy", &self.reuse_strategy.name())
            .field("stored", &self.stored)
            .finish()
    }
}

type ComponentsGuard = ArcMutexGuard<RawMutex, TokenStreamComponents>;

fn lock_components(shared: &SharedComponents, field_name: &str) -> Result<ComponentsGuard> {
    shared.try_lock_arc().ok_or_else(|| {
        SarissaError::invalid_operation(format!(
            "a token stream for field '{field_name}' is still in use on this thread"
        ))
    })
}

/// The terminal stage of this thread's cached pipeline.
///
/// Holds the pipeline exclusively until dropped. Not `Send`: the pipeline
/// belongs to the thread that requested it.
pub struct AnalyzedTokenStream {
    components: ComponentsGuard,
}

impl AnalyzedTokenStream {
    /// The pipeline backing this stream.
    pub fn components(&self) -> &TokenStreamComponents {
        &self.components
    }

    pub(crate) fn reusable_string_reader(&self) -> Option<&ReusableStringReader> {
        self.components.reusable_string_reader()
    }
}

impl TokenStream for AnalyzedTokenStream {
    fn next_token(&mut self) -> Result<Option<Token>> {
        self.components.token_stream().next_token()
    }
}

impl Iterator for AnalyzedTokenStream {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose()
    }
}

impl fmt::Debug for AnalyzedTokenStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalyzedTokenStream")
            .field("components", &*self.components)
            .finish()
    }
}
