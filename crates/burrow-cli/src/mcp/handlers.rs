//! MCP tool handlers implementation

use std::sync::Arc;

use burrow_core::{
    display::{DayDetails, LoadingPlaceholder, Roadmap, StatsCard, ToggleResult},
    params as core, Session,
};
use log::debug;
use rmcp::{
    handler::server::wrapper::Parameters,
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;
use tokio::sync::Mutex;

use super::to_mcp_error;

/// Generic MCP wrapper for core parameter types with serde integration
///
/// The core parameter types stay free of MCP concerns; this transparent
/// wrapper adds the deserialization and schema the protocol needs.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> AsRef<T> for McpParams<T>
where
    T: JsonSchema,
{
    fn as_ref(&self) -> &T {
        &self.0
    }
}

pub type DayRef = McpParams<core::DayRef>;
pub type ToggleExercise = McpParams<core::ToggleExercise>;

pub type McpResult = Result<CallToolResult, ErrorData>;

fn text(markdown: String) -> McpResult {
    Ok(CallToolResult::success(vec![Content::text(markdown)]))
}

fn placeholder(session: &Session) -> McpResult {
    text(LoadingPlaceholder::with_error(session.last_error()).to_string())
}

/// Handler implementations for the MCP server
pub struct McpHandlers {
    session: Arc<Mutex<Session>>,
}

impl McpHandlers {
    pub fn new(session: Arc<Mutex<Session>>) -> Self {
        Self { session }
    }

    pub async fn show_roadmap(&self) -> McpResult {
        debug!("show_roadmap");

        let session = self.session.lock().await;
        if !session.is_loaded() {
            return placeholder(&session);
        }
        let plan = session
            .plan()
            .map_err(|e| to_mcp_error("Failed to show roadmap", &e))?;
        text(Roadmap::with_title(plan, "Excavation Roadmap").to_string())
    }

    pub async fn show_day(&self, Parameters(params): Parameters<DayRef>) -> McpResult {
        debug!("show_day: {params:?}");

        let session = self.session.lock().await;
        if !session.is_loaded() {
            return placeholder(&session);
        }
        let params = params.as_ref();
        let day = session
            .day(params)
            .map_err(|e| to_mcp_error("Failed to show day", &e))?;
        let state = session
            .day_state(params)
            .map_err(|e| to_mcp_error("Failed to show day", &e))?;
        text(DayDetails::with_state(day, state).to_string())
    }

    pub async fn show_stats(&self) -> McpResult {
        debug!("show_stats");

        let session = self.session.lock().await;
        match session.profile() {
            Ok(profile) => text(StatsCard::new(&profile).to_string()),
            Err(_) => placeholder(&session),
        }
    }

    pub async fn toggle_exercise(
        &self,
        Parameters(params): Parameters<ToggleExercise>,
    ) -> McpResult {
        debug!("toggle_exercise: {params:?}");

        let params = params.as_ref();
        let exercise_index = params
            .exercise_index()
            .map_err(|e| to_mcp_error("Failed to toggle exercise", &e))?;
        let day = self
            .session
            .lock()
            .await
            .toggle_exercise(params)
            .map_err(|e| to_mcp_error("Failed to toggle exercise", &e))?;

        text(ToggleResult::new(&day, exercise_index).to_string())
    }

    pub async fn reload(&self) -> McpResult {
        debug!("reload");

        let mut session = self.session.lock().await;
        let profile = session
            .load()
            .await
            .map_err(|e| to_mcp_error("Failed to reload plan", &e))?;

        let days = profile.plan.as_ref().map_or(0, |plan| plan.len());
        text(format!(
            "Reloaded the plan of {} ({days} days).\n",
            session.username()
        ))
    }
}
