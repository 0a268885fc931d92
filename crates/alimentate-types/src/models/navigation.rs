//! Logical navigation destinations emitted by session actions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named route a caller should navigate to after a session action.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Destination {
    /// Landing page after sign-in
    #[default]
    Home,
    /// Profile page, alternative post sign-in landing
    Profile,
    /// Sign-in form
    SignIn,
    /// Sign-up form
    SignUp,
}

impl Destination {
    /// Route name as used by the router.
    pub const fn route_name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Profile => "profile",
            Self::SignIn => "sign-in",
            Self::SignUp => "sign-up",
        }
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route_name())
    }
}

impl FromStr for Destination {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(Self::Home),
            "profile" => Ok(Self::Profile),
            "sign-in" => Ok(Self::SignIn),
            "sign-up" => Ok(Self::SignUp),
            other => Err(format!("Unknown destination: {}", other)),
        }
    }
}
