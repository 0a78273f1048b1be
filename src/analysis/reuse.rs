//! Reuse strategies: which cached pipeline, if any, serves a field on this thread.
//!
//! Strategies are stateless and shared by every analyzer that selects them.
//! All per-analyzer state lives in the analyzer's [`ThreadScopedSlot`], whose
//! value is a [`StoredComponents`]:
//!
//! - [`GlobalReuseStrategy`] stores a single pipeline per thread and ignores the
//!   field name. Only correct when pipeline construction does not depend on it.
//! - [`PerFieldReuseStrategy`] stores a `field name -> pipeline` map per thread.
//!
//! # Examples
//!
//! ```
//! use sarissa_analysis::analysis::reuse::{
//!     PER_FIELD_REUSE_STRATEGY, ReuseStrategy, ReuseStrategyKind,
//! };
//!
//! let strategy = ReuseStrategyKind::PerField.strategy();
//! assert_eq!(strategy.name(), PER_FIELD_REUSE_STRATEGY.name());
//! ```

use std::fmt::Debug;
use std::sync::Arc;

use ahash::AHashMap;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::analysis::components::TokenStreamComponents;
use crate::analysis::slot::ThreadScopedSlot;
use crate::error::Result;

/// A cached pipeline. Only the thread that built it ever locks it.
pub type SharedComponents = Arc<Mutex<TokenStreamComponents>>;

/// A thread's `field name -> pipeline` map.
pub type SharedFieldMap = Arc<Mutex<AHashMap<String, SharedComponents>>>;

/// The value an analyzer's slot holds for one thread.
#[derive(Clone, Debug)]
pub enum StoredComponents {
    /// One pipeline for every field.
    Components(SharedComponents),
    /// One pipeline per field name.
    FieldMap(SharedFieldMap),
}

/// The slot type owned by every analyzer.
pub type ComponentsSlot = ThreadScopedSlot<StoredComponents>;

/// Policy deciding whether a previously built pipeline may be reused.
///
/// Implementations must surface [`SarissaError::ResourceReleased`] from the
/// slot unchanged.
///
/// [`SarissaError::ResourceReleased`]: crate::error::SarissaError::ResourceReleased
pub trait ReuseStrategy: Send + Sync + Debug {
    /// The cached pipeline for `field_name` on the calling thread.
    fn reusable_components(
        &self,
        slot: &ComponentsSlot,
        field_name: &str,
    ) -> Result<Option<SharedComponents>>;

    /// Cache `components` for `field_name` on the calling thread.
    fn set_reusable_components(
        &self,
        slot: &ComponentsSlot,
        field_name: &str,
        components: SharedComponents,
    ) -> Result<()>;

    /// Get the name of this strategy (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// Reuses one pipeline per thread regardless of the field.
#[derive(Clone, Copy, Debug, Default)]
pub struct GlobalReuseStrategy;

impl ReuseStrategy for GlobalReuseStrategy {
    fn reusable_components(
        &self,
        slot: &ComponentsSlot,
        _field_name: &str,
    ) -> Result<Option<SharedComponents>> {
        Ok(match slot.get()? {
            Some(StoredComponents::Components(components)) => Some(components),
            _ => None,
        })
    }

    fn set_reusable_components(
        &self,
        slot: &ComponentsSlot,
        _field_name: &str,
        components: SharedComponents,
    ) -> Result<()> {
        slot.set(StoredComponents::Components(components))
    }

    fn name(&self) -> &'static str {
        "global"
    }
}

/// Reuses one pipeline per thread and field name.
#[derive(Clone, Copy, Debug, Default)]
pub struct PerFieldReuseStrategy;

impl ReuseStrategy for PerFieldReuseStrategy {
    fn reusable_components(
        &self,
        slot: &ComponentsSlot,
        field_name: &str,
    ) -> Result<Option<SharedComponents>> {
        Ok(match slot.get()? {
            Some(StoredComponents::FieldMap(map)) => map.lock().get(field_name).cloned(),
            _ => None,
        })
    }

    fn set_reusable_components(
        &self,
        slot: &ComponentsSlot,
        field_name: &str,
        components: SharedComponents,
    ) -> Result<()> {
        let map = match slot.get()? {
            Some(StoredComponents::FieldMap(map)) => map,
            _ => {
                let map = SharedFieldMap::default();
                slot.set(StoredComponents::FieldMap(Arc::clone(&map)))?;
                map
            }
        };
        map.lock().insert(field_name.to_string(), components);
        Ok(())
    }

    fn name(&self) -> &'static str {
        "per_field"
    }
}

/// Process-wide global strategy.
pub static GLOBAL_REUSE_STRATEGY: GlobalReuseStrategy = GlobalReuseStrategy;

/// Process-wide per-field strategy.
pub static PER_FIELD_REUSE_STRATEGY: PerFieldReuseStrategy = PerFieldReuseStrategy;

/// Serializable selection of a builtin strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReuseStrategyKind {
    /// [`GLOBAL_REUSE_STRATEGY`]
    #[default]
    Global,
    /// [`PER_FIELD_REUSE_STRATEGY`]
    PerField,
}

impl ReuseStrategyKind {
    /// The shared strategy instance for this kind.
    pub fn strategy(self) -> &'static dyn ReuseStrategy {
        match self {
            ReuseStrategyKind::Global => &GLOBAL_REUSE_STRATEGY,
            ReuseStrategyKind::PerField => &PER_FIELD_REUSE_STRATEGY,
        }
    }
}
