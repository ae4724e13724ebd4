//! MCP server implementation for Burrow
//!
//! Exposes the roadmap, day, stats and toggle views of one session to AI
//! assistants over the Model Context Protocol.

use std::sync::Arc;

use anyhow::Result;
use burrow_core::Session;
use log::{debug, error, info};
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::{
    signal::unix::{signal, SignalKind},
    sync::Mutex,
};

pub mod errors;
pub mod handlers;

pub use errors::to_mcp_error;
pub use handlers::{DayRef, McpResult, ToggleExercise};

/// MCP server for Burrow
#[derive(Clone)]
pub struct BurrowMcpServer {
    session: Arc<Mutex<Session>>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl BurrowMcpServer {
    /// Create a new Burrow MCP server around a session
    pub fn new(session: Session) -> Self {
        Self {
            session: Arc::new(Mutex::new(session)),
            tool_router: Self::tool_router(),
        }
    }

    fn handlers(&self) -> handlers::McpHandlers {
        handlers::McpHandlers::new(self.session.clone())
    }

    #[tool(
        name = "show_roadmap",
        description = "Show the user's workout roadmap: every day of the plan with its state (completed, current or locked), estimated time, suggested calories and exercise count. Days unlock one after another as the previous day is completed."
    )]
    async fn show_roadmap(&self) -> McpResult {
        self.handlers().show_roadmap().await
    }

    #[tool(
        name = "show_day",
        description = "Show one day of the plan with its exercise checklist (sets, reps, instructions), progress and roadmap state. Days are numbered from 1 as on the roadmap."
    )]
    async fn show_day(&self, params: Parameters<DayRef>) -> McpResult {
        self.handlers().show_day(params).await
    }

    #[tool(
        name = "show_stats",
        description = "Show the stats card: days completed, workouts finished, tunnel level and experience. Every three finished exercises raise the level by one."
    )]
    async fn show_stats(&self) -> McpResult {
        self.handlers().show_stats().await
    }

    #[tool(
        name = "toggle_exercise",
        description = "Tick an exercise on or off. Day and exercise are numbered from 1. Locked days are refused. When every exercise of a day is ticked the day is completed and the next day unlocks. Changes live in this session only."
    )]
    async fn toggle_exercise(&self, params: Parameters<ToggleExercise>) -> McpResult {
        self.handlers().toggle_exercise(params).await
    }

    #[tool(
        name = "reload",
        description = "Fetch the user's plan again from its source, replacing any changes made in this session. Use after a failed load or to pick up changes made elsewhere."
    )]
    async fn reload(&self) -> McpResult {
        self.handlers().reload().await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for BurrowMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "burrow".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: None,
                icons: None,
                website_url: None,
            },
            instructions: Some(r#"Burrow shows a user's workout plan as a cave-themed roadmap of days.

## Core Concepts
- **Days**: each day has a name, estimated time, suggested calories and a list of exercises
- **States**: a day is completed once it has a completion date, current when it is the first day or follows a completed day, and locked otherwise
- **Levels**: every three finished exercises raise the tunnel level; experience within a level is shown on the stats card

## Workflow
1. Use `show_roadmap` to see which day is current
2. Use `show_day` to read its exercises
3. Tick exercises with `toggle_exercise` as they are done
4. Check progress with `show_stats`
5. Use `reload` if the plan failed to load or changed elsewhere"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: BurrowMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Burrow MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
