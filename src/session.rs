//! Configurator session: selection state plus the wizard step machine.
//!
//! A [`ConfiguratorSession`] is the single source of truth for one visitor's
//! build. It owns the current [`Configuration`] and [`WizardStep`] and is the
//! only way to mutate them, so the invariants hold at every observable point:
//!
//! - `color` and `base` always resolve against the catalog (validated on
//!   every single-select; the defaults resolve by construction)
//! - multi-select lists hold distinct ids that resolved at selection time
//! - the step index is always within `0..WizardStep::COUNT`
//!
//! Every mutation is synchronous and atomic: a rejected operation returns a
//! [`SelectionError`] and leaves the session exactly as it was. State is
//! owned, never global — two sessions never share anything, so concurrent
//! sessions (one per running process) are trivially independent.
//!
//! # Step Flow
//!
//! ```text
//! Exterior <-> Base <-> Modules <-> Accessories <-> Tools <-> Summary
//! ```
//!
//! `advance`/`retreat` walk the line and saturate at the ends; `go_to_step`
//! jumps anywhere. Summary is an ordinary, revisitable step, not a terminal
//! state, and no transition touches the selections.

use crate::catalog::{Catalog, CatalogList, DEFAULT_COLOR_ID, NO_BASE_ID};
use crate::error::SelectionError;
use serde::Serialize;
use strum::Display;
use tracing::debug;

/// The mutable record of a single session's selections.
///
/// Fields are public for read access and for building ad-hoc configurations
/// in tests and the CLI; live sessions mutate only through
/// [`ConfiguratorSession`] so validation cannot be skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Configuration {
    /// Exterior finish id — exactly one, always resolvable
    pub color: String,
    /// Base/stand id — exactly one, `no-base` means none
    pub base: String,
    /// Selected cooking module ids, in selection order
    pub modules: Vec<String>,
    /// Selected accessory ids, in selection order
    pub accessories: Vec<String>,
    /// Selected tool ids, in selection order
    pub tools: Vec<String>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            color: DEFAULT_COLOR_ID.to_string(),
            base: NO_BASE_ID.to_string(),
            modules: Vec::new(),
            accessories: Vec::new(),
            tools: Vec::new(),
        }
    }
}

impl Configuration {
    /// Borrow the multi-select list for a catalog list, if it has one.
    ///
    /// Colors and bases are single-select and return `None`.
    pub fn multi_select(&self, list: CatalogList) -> Option<&[String]> {
        match list {
            CatalogList::Modules => Some(&self.modules),
            CatalogList::Accessories => Some(&self.accessories),
            CatalogList::Tools => Some(&self.tools),
            CatalogList::Colors | CatalogList::Bases => None,
        }
    }

    /// True if the id is currently selected in the given multi-select list
    pub fn is_selected(&self, list: CatalogList, id: &str) -> bool {
        self.multi_select(list)
            .is_some_and(|ids| ids.iter().any(|s| s == id))
    }
}

/// Position in the fixed six-stage selection flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[repr(u8)]
pub enum WizardStep {
    Exterior = 0,
    Base = 1,
    Modules = 2,
    Accessories = 3,
    Tools = 4,
    Summary = 5,
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::Exterior
    }
}

impl WizardStep {
    /// Number of steps in the wizard
    pub const COUNT: usize = 6;

    /// Zero-based index of this step
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Step for a zero-based index, or `None` when out of range
    pub const fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Self::Exterior),
            1 => Some(Self::Base),
            2 => Some(Self::Modules),
            3 => Some(Self::Accessories),
            4 => Some(Self::Tools),
            5 => Some(Self::Summary),
            _ => None,
        }
    }

    /// Next step, or `None` at Summary
    pub const fn next(self) -> Option<Self> {
        Self::from_index(self.index() + 1)
    }

    /// Previous step, or `None` at Exterior
    pub const fn previous(self) -> Option<Self> {
        match self.index().checked_sub(1) {
            Some(i) => Self::from_index(i),
            None => None,
        }
    }

    /// Display title for the step header
    pub const fn title(self) -> &'static str {
        match self {
            Self::Exterior => "Choose Your Exterior",
            Self::Base => "Select Your Base",
            Self::Modules => "Add Cooking Modules",
            Self::Accessories => "Add Accessories",
            Self::Tools => "Add Tools",
            Self::Summary => "Your Configuration",
        }
    }

    /// Short label for the step indicator
    pub const fn label(self) -> &'static str {
        match self {
            Self::Exterior => "Exterior",
            Self::Base => "Base",
            Self::Modules => "Modules",
            Self::Accessories => "Accessories",
            Self::Tools => "Tools",
            Self::Summary => "Summary",
        }
    }

    /// The catalog list this step selects from (`None` for Summary)
    pub const fn catalog_list(self) -> Option<CatalogList> {
        match self {
            Self::Exterior => Some(CatalogList::Colors),
            Self::Base => Some(CatalogList::Bases),
            Self::Modules => Some(CatalogList::Modules),
            Self::Accessories => Some(CatalogList::Accessories),
            Self::Tools => Some(CatalogList::Tools),
            Self::Summary => None,
        }
    }

    /// All steps in wizard order
    pub const fn all_steps() -> &'static [Self] {
        &[
            Self::Exterior,
            Self::Base,
            Self::Modules,
            Self::Accessories,
            Self::Tools,
            Self::Summary,
        ]
    }
}

/// One visitor's configurator session.
///
/// # Example
///
/// ```
/// use pyretui::catalog::Catalog;
/// use pyretui::session::{ConfiguratorSession, WizardStep};
///
/// let catalog = Catalog::standard();
/// let mut session = ConfiguratorSession::new();
///
/// session.select_color(&catalog, "ember").unwrap();
/// session.toggle_module(&catalog, "pizza-oven").unwrap();
/// session.advance();
/// assert_eq!(session.step(), WizardStep::Base);
///
/// // Unknown ids are rejected without touching state
/// assert!(session.select_color(&catalog, "plaid").is_err());
/// assert_eq!(session.config().color, "ember");
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfiguratorSession {
    config: Configuration,
    step: WizardStep,
}

impl ConfiguratorSession {
    /// Start a session at the Exterior step with the default build
    pub fn new() -> Self {
        Self::default()
    }

    /// Current selections (read-only; mutate through the operations)
    #[inline]
    pub fn config(&self) -> &Configuration {
        &self.config
    }

    /// Current wizard step
    #[inline]
    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Select the exterior finish. Rejects ids missing from the color catalog.
    pub fn select_color(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        Self::validate(catalog, CatalogList::Colors, id)?;
        debug!(color = id, "exterior selected");
        self.config.color = id.to_string();
        Ok(())
    }

    /// Select the base/stand. Rejects ids missing from the base catalog.
    pub fn select_base(&mut self, catalog: &Catalog, id: &str) -> Result<(), SelectionError> {
        Self::validate(catalog, CatalogList::Bases, id)?;
        debug!(base = id, "base selected");
        self.config.base = id.to_string();
        Ok(())
    }

    /// Toggle a cooking module in or out of the build
    pub fn toggle_module(&mut self, catalog: &Catalog, id: &str) -> Result<bool, SelectionError> {
        Self::validate(catalog, CatalogList::Modules, id)?;
        Ok(Self::toggle_in(&mut self.config.modules, id))
    }

    /// Toggle an accessory in or out of the build
    pub fn toggle_accessory(
        &mut self,
        catalog: &Catalog,
        id: &str,
    ) -> Result<bool, SelectionError> {
        Self::validate(catalog, CatalogList::Accessories, id)?;
        Ok(Self::toggle_in(&mut self.config.accessories, id))
    }

    /// Toggle a tool in or out of the build
    pub fn toggle_tool(&mut self, catalog: &Catalog, id: &str) -> Result<bool, SelectionError> {
        Self::validate(catalog, CatalogList::Tools, id)?;
        Ok(Self::toggle_in(&mut self.config.tools, id))
    }

    /// Apply the toggle for whichever multi-select list the id belongs to.
    ///
    /// Convenience for input handling where the active step already names the
    /// list. Single-select lists go through `select_color`/`select_base`.
    pub fn toggle(
        &mut self,
        catalog: &Catalog,
        list: CatalogList,
        id: &str,
    ) -> Result<bool, SelectionError> {
        match list {
            CatalogList::Modules => self.toggle_module(catalog, id),
            CatalogList::Accessories => self.toggle_accessory(catalog, id),
            CatalogList::Tools => self.toggle_tool(catalog, id),
            CatalogList::Colors => {
                self.select_color(catalog, id)?;
                Ok(true)
            }
            CatalogList::Bases => {
                self.select_base(catalog, id)?;
                Ok(true)
            }
        }
    }

    /// Move to the next step; saturates at Summary
    pub fn advance(&mut self) -> WizardStep {
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        self.step
    }

    /// Move to the previous step; saturates at Exterior
    pub fn retreat(&mut self) -> WizardStep {
        if let Some(prev) = self.step.previous() {
            self.step = prev;
        }
        self.step
    }

    /// Jump directly to a step by zero-based index.
    ///
    /// Any step is reachable from any step. Out-of-range indices are rejected
    /// and the current step is unchanged.
    pub fn go_to_step(&mut self, index: usize) -> Result<WizardStep, SelectionError> {
        let step = WizardStep::from_index(index).ok_or(SelectionError::StepOutOfRange {
            index,
            limit: WizardStep::COUNT,
        })?;
        self.step = step;
        Ok(step)
    }

    fn validate(catalog: &Catalog, list: CatalogList, id: &str) -> Result<(), SelectionError> {
        if catalog.contains(list, id) {
            Ok(())
        } else {
            Err(SelectionError::InvalidSelection {
                list,
                id: id.to_string(),
            })
        }
    }

    /// Remove the id if present, append it otherwise. Returns true when the
    /// id ended up selected.
    fn toggle_in(ids: &mut Vec<String>, id: &str) -> bool {
        if let Some(pos) = ids.iter().position(|s| s == id) {
            ids.remove(pos);
            debug!(id, "option removed");
            false
        } else {
            ids.push(id.to_string());
            debug!(id, "option added");
            true
        }
    }
}
