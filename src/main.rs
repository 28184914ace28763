//! Move-generation lab server (default binary).
//!
//! Serves POST /api/generate for the visualizer frontend.

use anyhow::Result;

use tetris_movegen::server::{resolve_addr, router};

#[tokio::main]
async fn main() -> Result<()> {
    let addr = resolve_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("movegen server listening on {addr}");

    axum::serve(listener, router()).await?;
    Ok(())
}
