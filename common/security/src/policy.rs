use crate::{roles::Role, SecurityContext, SecurityError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    /// Authorize, capture, process and list stored sources.
    PaymentProcess,
    /// Refund and void.
    PaymentRefund,
    /// Read and change payment plugin configuration.
    PluginConfigure,
}

impl Capability {
    /// Label used in `missing_role` error bodies.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::PaymentProcess => "payment_process",
            Capability::PaymentRefund => "payment_refund",
            Capability::PluginConfigure => "plugin_configure",
        }
    }
}

fn allowed_roles(cap: Capability) -> &'static [Role] {
    use Capability::*;
    use Role::*;
    match cap {
        PaymentProcess => &[SuperAdmin, Admin, Manager, Cashier],
        PaymentRefund => &[SuperAdmin, Admin, Manager],
        PluginConfigure => &[SuperAdmin, Admin],
    }
}

pub fn ensure_capability(ctx: &SecurityContext, cap: Capability) -> Result<(), SecurityError> {
    let allowed = allowed_roles(cap);
    if ctx.roles.iter().any(|r| allowed.iter().any(|a| a == r)) { return Ok(()); }
    Err(SecurityError::Forbidden)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Actor;
    use uuid::Uuid;

    fn mk_ctx(roles: Vec<Role>) -> SecurityContext {
        SecurityContext { tenant_id: Uuid::new_v4(), actor: Actor { id: Some(Uuid::new_v4()), name: None, email: None }, roles, trace_id: None }
    }

    #[test]
    fn cashier_cannot_refund() {
        let ctx = mk_ctx(vec![Role::Cashier]);
        assert!(ensure_capability(&ctx, Capability::PaymentRefund).is_err(), "Cashier should not refund");
        assert!(ensure_capability(&ctx, Capability::PaymentProcess).is_ok());
    }

    #[test]
    fn manager_cannot_configure_plugins() {
        let ctx = mk_ctx(vec![Role::Manager]);
        assert!(ensure_capability(&ctx, Capability::PluginConfigure).is_err());
    }

    #[test]
    fn superadmin_has_all() {
        let ctx = mk_ctx(vec![Role::SuperAdmin]);
        for cap in [Capability::PaymentProcess, Capability::PaymentRefund, Capability::PluginConfigure] {
            assert!(ensure_capability(&ctx, cap).is_ok(), "SuperAdmin missing {:?}", cap);
        }
    }

    #[test]
    fn unknown_roles_grant_nothing() {
        let ctx = mk_ctx(vec![Role::Unknown("auditor".into()), Role::Support]);
        assert!(ensure_capability(&ctx, Capability::PaymentProcess).is_err());
    }
}
