use std::rc::Rc;

use yew::prelude::Reducible;

use super::claims::IdentityClaims;

/// The one mutable piece of application state: the current identity, if any.
///
/// Either fully absent (signed out) or holding one decoded claims record
/// (signed in). Lives only in page memory, so a reload always starts signed
/// out. Owned by the root component; children mutate it exclusively through
/// [`SessionAction`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    identity: Option<IdentityClaims>,
}

/// The only two mutations the session cell accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionAction {
    /// A credential was decoded successfully.
    SignIn(IdentityClaims),
    /// Explicit logout.
    SignOut,
}

impl Session {
    pub fn identity(&self) -> Option<&IdentityClaims> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    fn apply(&self, action: SessionAction) -> Session {
        match action {
            SessionAction::SignIn(identity) => Session {
                identity: Some(identity),
            },
            SessionAction::SignOut => Session { identity: None },
        }
    }
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        // Signing out while already signed out leaves the cell untouched.
        if matches!(action, SessionAction::SignOut) && self.identity.is_none() {
            return self;
        }
        Rc::new(self.apply(action))
    }
}
