use crate::errors::{manager_error, record, require};
use crate::AppState;
use axum::{
    extract::{Path, State},
    Json,
};
use common_http_errors::ApiResult;
use common_plugins::{ConfigStructure, ConfigurationUpdate, PaymentPlugin};
use common_security::{Capability, SecurityCtxExtractor};
use serde::Serialize;
use tracing::info;

/// Admin view of a plugin. Configured values are never echoed back.
#[derive(Serialize)]
pub struct PluginView {
    pub name: &'static str,
    pub active: bool,
    pub config_structure: &'static ConfigStructure,
}

impl PluginView {
    fn of(plugin: &dyn PaymentPlugin) -> Self {
        Self { name: plugin.name(), active: plugin.is_active(), config_structure: plugin.config_structure() }
    }
}

pub async fn list_plugins(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
) -> ApiResult<Json<Vec<PluginView>>> {
    require(&state, &sec, Capability::PluginConfigure)?;
    let views = state.manager.plugins().iter().map(|p| PluginView::of(p.as_ref())).collect();
    Ok(Json(views))
}

pub async fn save_plugin_configuration(
    State(state): State<AppState>,
    SecurityCtxExtractor(sec): SecurityCtxExtractor,
    Path(name): Path<String>,
    Json(update): Json<ConfigurationUpdate>,
) -> ApiResult<Json<PluginView>> {
    require(&state, &sec, Capability::PluginConfigure)?;
    let changed: Vec<String> = update.configuration.iter().map(|item| item.name.clone()).collect();
    state
        .manager
        .save_plugin_configuration(&name, update)
        .map_err(|e| record(&state, manager_error(e, sec.trace_id)))?;
    info!(tenant_id = %sec.tenant_id, actor = ?sec.actor.id, plugin = %name, ?changed, "Plugin configuration saved");
    let plugin = state
        .manager
        .get_plugin(&name)
        .ok_or_else(|| record(&state, manager_error(common_plugins::ManagerError::PluginNotFound { gateway: name.clone() }, sec.trace_id)))?;
    Ok(Json(PluginView::of(plugin.as_ref())))
}
