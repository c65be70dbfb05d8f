//! Access rules attached to protected operations.

use std::fmt;

use crate::claims::Role;

/// What a caller must be to use a protected operation.
///
/// "Exact role" and "any of a set of roles" share the [`AnyRole`] variant:
/// an exact requirement is a set with one member. Requirements are declared
/// once per route and never change.
///
/// [`AnyRole`]: CapabilityRequirement::AnyRole
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityRequirement {
    /// Any verified principal with an active session.
    Authenticated,
    /// The principal's role must be one of these. An empty set admits nobody.
    AnyRole(Vec<Role>),
}

impl CapabilityRequirement {
    pub fn authenticated() -> Self {
        Self::Authenticated
    }

    pub fn exact(role: Role) -> Self {
        Self::AnyRole(vec![role])
    }

    pub fn any_of<I>(roles: I) -> Self
    where
        I: IntoIterator<Item = Role>,
    {
        let mut allowed: Vec<Role> = Vec::new();
        for role in roles {
            if !allowed.contains(&role) {
                allowed.push(role);
            }
        }
        Self::AnyRole(allowed)
    }

    pub fn is_satisfied_by(&self, role: Role) -> bool {
        match self {
            Self::Authenticated => true,
            Self::AnyRole(allowed) => allowed.contains(&role),
        }
    }
}

impl fmt::Display for CapabilityRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Authenticated => f.write_str("authenticated"),
            Self::AnyRole(roles) => {
                let names: Vec<&str> = roles.iter().map(Role::as_str).collect();
                write!(f, "any of [{}]", names.join(", "))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authenticated_admits_every_role() {
        let requirement = CapabilityRequirement::authenticated();
        for role in Role::ALL {
            assert!(requirement.is_satisfied_by(role));
        }
    }

    #[test]
    fn test_exact_role() {
        let requirement = CapabilityRequirement::exact(Role::Admin);
        assert!(requirement.is_satisfied_by(Role::Admin));
        assert!(!requirement.is_satisfied_by(Role::Faculty));
        assert!(!requirement.is_satisfied_by(Role::Student));
    }

    #[test]
    fn test_any_of() {
        let requirement = CapabilityRequirement::any_of([Role::Faculty, Role::Admin]);
        assert!(requirement.is_satisfied_by(Role::Faculty));
        assert!(requirement.is_satisfied_by(Role::Admin));
        assert!(!requirement.is_satisfied_by(Role::Student));
    }

    #[test]
    fn test_any_of_deduplicates() {
        let requirement = CapabilityRequirement::any_of([Role::Admin, Role::Admin]);
        assert_eq!(requirement, CapabilityRequirement::exact(Role::Admin));
    }

    #[test]
    fn test_empty_set_admits_nobody() {
        let requirement = CapabilityRequirement::any_of(Vec::new());
        for role in Role::ALL {
            assert!(!requirement.is_satisfied_by(role));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(
            CapabilityRequirement::any_of([Role::Faculty, Role::Admin]).to_string(),
            "any of [faculty, admin]"
        );
        assert_eq!(CapabilityRequirement::Authenticated.to_string(), "authenticated");
    }
}
