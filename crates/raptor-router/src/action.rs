//! Action descriptor parsing.

/// The parsed form of a route's action string.
///
/// `UserController@show` splits into a controller identifier and a method
/// name; an action without `@` is a bare callable reference with no
/// controller. The router hands descriptors to the dispatcher untouched
/// and never loads or invokes code itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActionDescriptor {
    /// Controller identifier, absent for bare callables.
    pub controller: Option<String>,
    /// Method (or callable) name.
    pub method: String,
}

impl ActionDescriptor {
    /// Parses an action string, splitting on the first `@`.
    pub fn parse(action: &str) -> Self {
        match action.split_once('@') {
            Some((controller, method)) => Self {
                controller: Some(controller.to_string()),
                method: method.to_string(),
            },
            None => Self {
                controller: None,
                method: action.to_string(),
            },
        }
    }

    /// Returns the canonical action string this descriptor was parsed from.
    ///
    /// Used as the lookup key in the handler registry.
    pub fn key(&self) -> String {
        match &self.controller {
            Some(controller) => format!("{controller}@{}", self.method),
            None => self.method.clone(),
        }
    }
}

impl std::fmt::Display for ActionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
