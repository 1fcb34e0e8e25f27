use geowrr_application::use_cases::PipeSession;
use geowrr_domain::pipe_protocol::emit_fail;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

/// Serves one request at a time until the host closes the input. Every reply
/// is flushed before the next line is read. A line that is not valid UTF-8
/// gets `FAIL` and the loop carries on.
pub async fn serve_pipe<R, W>(
    mut reader: R,
    mut writer: W,
    mut session: PipeSession,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!("Waiting for handshake");

    let mut buf = Vec::with_capacity(512);
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf).await? == 0 {
            return Ok(());
        }

        let reply = match std::str::from_utf8(strip_line_ending(&buf)) {
            Ok(line) => {
                debug!(line = %line, "Request");
                session.handle_line(line)
            }
            Err(e) => {
                warn!(error = %e, bytes = buf.len(), "Request is not valid UTF-8");
                emit_fail().to_string()
            }
        };

        writer.write_all(reply.as_bytes()).await?;
        writer.flush().await?;
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
