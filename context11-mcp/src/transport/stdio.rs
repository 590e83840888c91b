//! Stdio transport: newline-delimited JSON-RPC over stdin/stdout.

use crate::error::ServerResult;
use crate::mcp::McpServer;
use context11_client::ApiContext;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

/// Serve on the process's stdin/stdout until EOF.
pub async fn serve_stdio(server: &McpServer, ctx: &ApiContext) -> ServerResult<()> {
    tracing::info!(api_url = %ctx.base_url(), "Context11 MCP server running on stdio");
    let reader = BufReader::new(tokio::io::stdin());
    serve_lines(server, ctx, reader, tokio::io::stdout()).await
}

/// Process messages one line at a time, in arrival order. Blank lines are
/// skipped; each response is written as one line and flushed.
///
/// Lines are handled as raw bytes, so a line that is not valid UTF-8 gets a
/// parse error response and the loop keeps reading.
pub async fn serve_lines<R, W>(
    server: &McpServer,
    ctx: &ApiContext,
    mut reader: R,
    mut writer: W,
) -> ServerResult<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            break;
        }

        let line = trim_ascii_whitespace(&buf);
        if line.is_empty() {
            continue;
        }

        if let Some(response) = server.handle_message(ctx, line).await {
            let mut payload = serde_json::to_vec(&response)?;
            payload.push(b'\n');
            writer.write_all(&payload).await?;
            writer.flush().await?;
        }
    }

    tracing::info!("stdin closed; stopping");
    Ok(())
}

fn trim_ascii_whitespace(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_ascii_whitespace() {
        assert_eq!(trim_ascii_whitespace(b"  {}\r\n"), b"{}");
        assert_eq!(trim_ascii_whitespace(b" \t\r\n"), b"");
        assert_eq!(trim_ascii_whitespace(b""), b"");
    }
}
