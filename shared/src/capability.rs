use serde::{Deserialize, Serialize};

/// The three per-record booleans the server sends with every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityFlags {
    /// Record may be edited.
    #[serde(default)]
    pub edit_flag: bool,
    /// Record may be deleted.
    #[serde(default)]
    pub delete_flag: bool,
    /// Record is inactive and may be reinstated.
    #[serde(default)]
    pub reinstate_flag: bool,
}

/// Action occupying the leading slot of a row's action cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimaryAction {
    /// Open the modify form.
    Edit,
    /// Open the modify form in reinstate mode.
    Reinstate,
}

/// Row-level action a user can trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowAction {
    /// Edit the record.
    Edit,
    /// Reinstate an inactive record.
    Reinstate,
    /// Delete the record.
    Delete,
}

/// How an action affordance should render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionState {
    /// Not rendered at all.
    Hidden,
    /// Rendered but inert (no update access).
    Disabled,
    /// Rendered and clickable.
    Enabled,
}

/// Closed set of what a row allows. Edit and reinstate share one slot, so a
/// row can never offer both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowCapabilities {
    primary: Option<PrimaryAction>,
    deletable: bool,
}

impl RowCapabilities {
    /// Read-only row.
    pub const NONE: Self = Self {
        primary: None,
        deletable: false,
    };

    /// Build from a primary action and the delete bit.
    pub const fn new(primary: Option<PrimaryAction>, deletable: bool) -> Self {
        Self {
            primary,
            deletable,
        }
    }

    /// Edit wins over reinstate when the server sends both.
    pub fn from_flags(flags: CapabilityFlags) -> Self {
        let primary = if flags.edit_flag {
            Some(PrimaryAction::Edit)
        } else if flags.reinstate_flag {
            Some(PrimaryAction::Reinstate)
        } else {
            None
        };
        Self::new(primary, flags.delete_flag)
    }

    /// The leading action, if any.
    pub fn primary(self) -> Option<PrimaryAction> {
        self.primary
    }

    /// Whether the record may be edited.
    pub fn can_edit(self) -> bool {
        self.primary == Some(PrimaryAction::Edit)
    }

    /// Whether the record may be reinstated.
    pub fn can_reinstate(self) -> bool {
        self.primary == Some(PrimaryAction::Reinstate)
    }

    /// Whether the record may be deleted.
    pub fn can_delete(self) -> bool {
        self.deletable
    }

    /// No action at all.
    pub fn is_read_only(self) -> bool {
        self.primary.is_none() && !self.deletable
    }

    /// Whether `action` is offered by this row, independent of access.
    pub fn allows(self, action: RowAction) -> bool {
        match action {
            RowAction::Edit => self.can_edit(),
            RowAction::Reinstate => self.can_reinstate(),
            RowAction::Delete => self.can_delete(),
        }
    }

    /// A capability the row lacks is hidden; one the row has is enabled only
    /// with update access.
    pub fn action_state(self, action: RowAction, has_update_access: bool) -> ActionState {
        if !self.allows(action) {
            ActionState::Hidden
        } else if has_update_access {
            ActionState::Enabled
        } else {
            ActionState::Disabled
        }
    }
}

impl From<CapabilityFlags> for RowCapabilities {
    fn from(flags: CapabilityFlags) -> Self {
        Self::from_flags(flags)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(edit: bool, delete: bool, reinstate: bool) -> CapabilityFlags {
        CapabilityFlags {
            edit_flag: edit,
            delete_flag: delete,
            reinstate_flag: reinstate,
        }
    }

    #[test]
    fn edit_takes_the_primary_slot_over_reinstate() {
        let caps = RowCapabilities::from_flags(flags(true, false, true));
        assert!(caps.can_edit());
        assert!(!caps.can_reinstate());
    }

    #[test]
    fn reinstate_only_when_not_editable() {
        let caps = RowCapabilities::from_flags(flags(false, true, true));
        assert_eq!(caps.primary(), Some(PrimaryAction::Reinstate));
        assert!(caps.can_delete());
    }

    #[test]
    fn no_flags_is_read_only() {
        let caps = RowCapabilities::from_flags(CapabilityFlags::default());
        assert!(caps.is_read_only());
        assert_eq!(caps, RowCapabilities::NONE);
    }

    #[test]
    fn missing_capability_is_hidden_even_with_access() {
        let caps = RowCapabilities::from_flags(flags(false, false, false));
        for action in [RowAction::Edit, RowAction::Reinstate, RowAction::Delete] {
            assert_eq!(caps.action_state(action, true), ActionState::Hidden);
        }
    }

    #[test]
    fn present_capability_needs_update_access() {
        let caps = RowCapabilities::from_flags(flags(true, true, false));
        assert_eq!(caps.action_state(RowAction::Edit, true), ActionState::Enabled);
        assert_eq!(caps.action_state(RowAction::Delete, false), ActionState::Disabled);
    }

    #[test]
    fn flags_default_to_false_when_absent() {
        let parsed: CapabilityFlags =
            serde_json::from_value(serde_json::json!({ "editFlag": true })).expect("deserialize");
        assert_eq!(parsed, flags(true, false, false));
    }
}
