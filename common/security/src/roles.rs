use serde::{Serialize, Deserialize};
use std::convert::Infallible;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    SuperAdmin,
    Admin,
    Manager,
    Cashier,
    Support,
    Unknown(String),
}

impl FromStr for Role {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "super_admin" | "SuperAdmin" => Role::SuperAdmin,
            "admin" | "Admin" => Role::Admin,
            "manager" | "Manager" => Role::Manager,
            "cashier" | "Cashier" => Role::Cashier,
            "support" | "Support" => Role::Support,
            other => Role::Unknown(other.to_string()),
        })
    }
}
